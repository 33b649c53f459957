//! Response schema sent to the provider as `responseSchema`.

use serde::Serialize;
use std::collections::BTreeMap;

/// Field names every analysis schema must declare as required.
pub const BASE_REQUIRED_FIELDS: [&str; 3] = ["summary", "captions", "objects"];

/// Additional required field for specialist profiles.
pub const SPECIALIST_NOTES_FIELD: &str = "specialistNotes";

/// A JSON-Schema-like node in the subset the provider understands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Schema {
    Object {
        properties: BTreeMap<String, Schema>,
        required: Vec<String>,
    },
    Array {
        items: Box<Schema>,
    },
    String,
    Number,
}

impl Schema {
    pub fn object<I, K>(properties: I, required: &[&str]) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        Schema::Object {
            properties: properties.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            required: required.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn array_of(items: Schema) -> Self {
        Schema::Array {
            items: Box::new(items),
        }
    }

    /// Required field names of an object node; empty for any other node.
    pub fn required_fields(&self) -> &[String] {
        match self {
            Schema::Object { required, .. } => required,
            _ => &[],
        }
    }

    pub fn requires(&self, field: &str) -> bool {
        self.required_fields().iter().any(|f| f == field)
    }

    pub fn property(&self, name: &str) -> Option<&Schema> {
        match self {
            Schema::Object { properties, .. } => properties.get(name),
            _ => None,
        }
    }
}

fn bounding_box_schema() -> Schema {
    Schema::object(
        [
            ("x", Schema::Number),
            ("y", Schema::Number),
            ("width", Schema::Number),
            ("height", Schema::Number),
        ],
        &["x", "y", "width", "height"],
    )
}

fn detected_object_schema() -> Schema {
    Schema::object(
        [
            ("label", Schema::String),
            ("confidence", Schema::Number),
            ("boundingBox", bounding_box_schema()),
        ],
        &["label", "confidence"],
    )
}

/// Build the analysis schema; specialist profiles also require `specialistNotes`.
pub fn analysis_schema(include_specialist_notes: bool) -> Schema {
    let mut properties = vec![
        ("summary", Schema::String),
        ("captions", Schema::array_of(Schema::String)),
        ("objects", Schema::array_of(detected_object_schema())),
    ];
    let mut required = BASE_REQUIRED_FIELDS.to_vec();

    if include_specialist_notes {
        properties.push((SPECIALIST_NOTES_FIELD, Schema::array_of(Schema::String)));
        required.push(SPECIALIST_NOTES_FIELD);
    }

    Schema::object(properties, &required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_schema_required_fields() {
        let schema = analysis_schema(false);
        assert_eq!(schema.required_fields(), ["summary", "captions", "objects"]);
        assert!(schema.property(SPECIALIST_NOTES_FIELD).is_none());
    }

    #[test]
    fn test_specialist_schema_requires_notes() {
        let schema = analysis_schema(true);
        assert!(schema.requires(SPECIALIST_NOTES_FIELD));
        assert_eq!(
            schema.property(SPECIALIST_NOTES_FIELD),
            Some(&Schema::array_of(Schema::String))
        );
    }

    #[test]
    fn test_schema_serializes_with_type_tags() {
        let value = serde_json::to_value(bounding_box_schema()).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "object",
                "properties": {
                    "height": {"type": "number"},
                    "width": {"type": "number"},
                    "x": {"type": "number"},
                    "y": {"type": "number"}
                },
                "required": ["x", "y", "width", "height"]
            })
        );
    }

    #[test]
    fn test_object_items_require_label_and_confidence() {
        let schema = analysis_schema(false);
        let Some(Schema::Array { items }) = schema.property("objects") else {
            panic!("objects should be an array schema");
        };
        assert_eq!(items.required_fields(), ["label", "confidence"]);
        assert!(items.property("boundingBox").is_some());
    }

    #[test]
    fn test_non_object_has_no_required_fields() {
        assert!(Schema::String.required_fields().is_empty());
        assert!(!Schema::Number.requires("summary"));
    }
}

//! Response validator
//!
//! Checks the provider's parsed JSON against the analysis shape. The schema
//! sent with the request is only advisory on the provider side, so this is
//! the gate that counts. Validation stops at the first violation.
//!
//! Unknown fields are ignored. `specialistNotes` is optional for every
//! profile, including specialist ones, and passed through for non-specialist
//! profiles as well.

use super::entities::{AnalysisResult, BoundingBox, DetectedObject};
use crate::core::error::{DomainError, ShapeViolation};
use crate::profile::entities::DomainProfile;
use serde_json::{Map, Value};
use tracing::debug;

type Result<T> = std::result::Result<T, DomainError>;

/// Validate a parsed provider payload for `profile` into an [`AnalysisResult`].
pub fn validate_analysis(parsed: &Value, profile: &DomainProfile) -> Result<AnalysisResult> {
    let root = as_object(parsed, "$")?;

    let summary = require_string(root, "summary", "summary")?.to_string();
    let captions = string_list(require(root, "captions", "captions")?, "captions")?;

    let objects = require_array(root, "objects", "objects")?
        .iter()
        .enumerate()
        .map(|(i, entry)| detected_object(entry, &format!("objects[{i}]")))
        .collect::<Result<Vec<_>>>()?;

    let specialist_notes = match optional(root, "specialistNotes") {
        Some(value) => Some(string_list(value, "specialistNotes")?),
        None => None,
    };

    if profile.is_specialist() && specialist_notes.is_none() {
        debug!(domain = %profile.domain_id, "Specialist profile answered without notes");
    }

    Ok(AnalysisResult {
        summary,
        captions,
        objects,
        specialist_notes,
    })
}

fn detected_object(value: &Value, path: &str) -> Result<DetectedObject> {
    let entry = as_object(value, path)?;

    let label_path = format!("{path}.label");
    let label = require_string(entry, "label", &label_path)?.trim();
    if label.is_empty() {
        return Err(DomainError::shape(label_path, ShapeViolation::EmptyLabel));
    }

    let confidence = unit_interval(entry, "confidence", &format!("{path}.confidence"))?;

    let bounding_box = match optional(entry, "boundingBox") {
        Some(value) => Some(bounding_box(value, &format!("{path}.boundingBox"))?),
        None => None,
    };

    Ok(DetectedObject {
        label: label.to_string(),
        confidence,
        bounding_box,
    })
}

/// All four coordinates are required once a box is present.
fn bounding_box(value: &Value, path: &str) -> Result<BoundingBox> {
    let map = as_object(value, path)?;
    let coord = |key: &str| unit_interval(map, key, &format!("{path}.{key}"));

    Ok(BoundingBox {
        x: coord("x")?,
        y: coord("y")?,
        width: coord("width")?,
        height: coord("height")?,
    })
}

/// A present, non-null field.
fn optional<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

fn require<'a>(map: &'a Map<String, Value>, key: &str, path: &str) -> Result<&'a Value> {
    optional(map, key).ok_or_else(|| DomainError::shape(path, ShapeViolation::Missing))
}

fn require_string<'a>(map: &'a Map<String, Value>, key: &str, path: &str) -> Result<&'a str> {
    require(map, key, path)?
        .as_str()
        .ok_or_else(|| wrong_type(path, "string"))
}

fn require_array<'a>(map: &'a Map<String, Value>, key: &str, path: &str) -> Result<&'a Vec<Value>> {
    require(map, key, path)?
        .as_array()
        .ok_or_else(|| wrong_type(path, "array"))
}

fn unit_interval(map: &Map<String, Value>, key: &str, path: &str) -> Result<f64> {
    let value = require(map, key, path)?
        .as_f64()
        .ok_or_else(|| wrong_type(path, "number"))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(DomainError::shape(path, ShapeViolation::OutOfRange { value }));
    }
    Ok(value)
}

fn string_list(value: &Value, path: &str) -> Result<Vec<String>> {
    value
        .as_array()
        .ok_or_else(|| wrong_type(path, "array"))?
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| wrong_type(format!("{path}[{i}]"), "string"))
        })
        .collect()
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| wrong_type(path, "object"))
}

fn wrong_type(path: impl Into<String>, expected: &'static str) -> DomainError {
    DomainError::shape(path, ShapeViolation::WrongType { expected })
}

//! Advisory credit metadata carried in response headers.

use reqwest::header::HeaderMap;

/// Candidate header names, checked in order.
pub const CREDIT_HEADERS: [&str; 3] = [
    "x-blink-credits-remaining",
    "x-usage-remaining",
    "x-ratelimit-remaining",
];

/// First candidate header that parses as a non-negative integer.
///
/// Absent and unparsable headers are skipped silently.
pub fn credits_remaining(headers: &HeaderMap) -> Option<u64> {
    CREDIT_HEADERS.iter().find_map(|name| {
        headers
            .get(*name)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn test_first_candidate_wins() {
        let map = headers(&[
            ("x-ratelimit-remaining", "7"),
            ("x-blink-credits-remaining", "42"),
        ]);
        assert_eq!(credits_remaining(&map), Some(42));
    }

    #[test]
    fn test_unparsable_header_skipped() {
        let map = headers(&[
            ("x-blink-credits-remaining", "plenty"),
            ("x-usage-remaining", "12"),
        ]);
        assert_eq!(credits_remaining(&map), Some(12));
    }

    #[test]
    fn test_negative_value_skipped() {
        let map = headers(&[("x-blink-credits-remaining", "-3")]);
        assert_eq!(credits_remaining(&map), None);
    }

    #[test]
    fn test_whitespace_tolerated() {
        let map = headers(&[("x-usage-remaining", " 5 ")]);
        assert_eq!(credits_remaining(&map), Some(5));
    }

    #[test]
    fn test_absent_headers() {
        assert_eq!(credits_remaining(&HeaderMap::new()), None);
    }
}

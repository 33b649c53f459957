//! Shared utility functions.

use std::borrow::Cow;

/// Shorten `s` to at most `max_bytes` for log lines, appending `…` when cut.
///
/// Never splits a UTF-8 character; the ellipsis is not counted.
pub fn preview(s: &str, max_bytes: usize) -> Cow<'_, str> {
    if s.len() <= max_bytes {
        return Cow::Borrowed(s);
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!("{}…", &s[..end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_is_borrowed() {
        assert!(matches!(preview("ok", 10), Cow::Borrowed("ok")));
    }

    #[test]
    fn preview_ascii_cut() {
        assert_eq!(preview("Resource exhausted", 8), "Resource…");
    }

    #[test]
    fn preview_backs_off_multibyte_boundary() {
        // 'é' occupies bytes 3..5, so byte 4 is not a boundary
        assert_eq!(preview("café!", 4), "caf…");
    }

    #[test]
    fn preview_zero_budget() {
        assert_eq!(preview("abc", 0), "…");
    }
}

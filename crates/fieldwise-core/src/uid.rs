//! Identifier normalization
//!
//! Some schemas carry generated opaque identifiers as canonical dashed
//! strings at runtime (`00000000-0000-0000-0000-000000000005`), while test
//! fixtures want a short, stable placeholder instead of hard-coding the
//! generated value (`uid:5`). These parsers recognize the two encodings so
//! the engine can compare them by their integer value.
//!
//! Parse failure on either side is not an error: the engine silently falls
//! back to plain string equality.

/// Parse the placeholder form `uid:<decimal>`.
pub fn parse_expected_uid(s: &str) -> Option<i64> {
    s.strip_prefix("uid:")?.parse().ok()
}

/// Parse the canonical form: at least eight leading `0` characters,
/// optionally followed by more digits and dashes.
///
/// All leading `0` and `-` characters are stripped and the remainder is
/// parsed as a decimal integer; an empty remainder is the identifier 0. The
/// empty string is accepted as the zero identifier (an unset field compares
/// equal to `uid:0`).
pub fn parse_actual_uid(s: &str) -> Option<i64> {
    if !s.is_empty() && !s.starts_with("00000000") {
        return None;
    }
    let trimmed = s.trim_start_matches(&['0', '-'][..]);
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse().ok()
}

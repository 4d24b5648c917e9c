//! Map-key normalization.

/// The literal a yes/no indicator column must hold to count as present.
pub const AFFIRMATIVE_TOKEN: &str = "yes";

/// Trims surrounding whitespace and lower-cases.
///
/// Idempotent: `normalize_key(&normalize_key(s)) == normalize_key(s)`.
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Checks an indicator cell against the default affirmative token.
pub fn is_affirmative(value: &str) -> bool {
    is_affirmative_token(value, AFFIRMATIVE_TOKEN)
}

/// Checks an indicator cell against a configured affirmative token.
///
/// Both sides are normalized, so `" Yes "` matches `"yes"`.
pub fn is_affirmative_token(value: &str, token: &str) -> bool {
    normalize_key(value) == normalize_key(token)
}

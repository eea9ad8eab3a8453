use once_cell::sync::Lazy;
use regex::Regex;

static LINE_ENDING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r+\n").expect("valid line ending pattern"));

/// Canonicalizes line endings and maps an absent value to the empty string.
///
/// A run of carriage returns that ends in a line feed becomes a single line
/// feed, which keeps the function idempotent for inputs such as `"\r\r\n"`.
/// Lone carriage returns are left alone.
pub fn normalize(raw: Option<&str>) -> String {
    match raw {
        Some(text) if text.contains('\r') => LINE_ENDING.replace_all(text, "\n").into_owned(),
        Some(text) => text.to_owned(),
        None => String::new(),
    }
}

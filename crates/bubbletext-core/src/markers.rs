use once_cell::sync::Lazy;
use regex::Regex;

static MARKER_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*{3,}").expect("valid marker run pattern"));

// Word characters are ASCII only. An asterisk next to another asterisk is
// never matched, which keeps both halves of a `**` delimiter.
static STRAY_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|[^*A-Za-z0-9_])\*([^*\n]|$)").expect("valid stray marker pattern")
});

/// Replaces every run of three or more asterisks with exactly two.
pub fn collapse_markers(text: &str) -> String {
    MARKER_RUN.replace_all(text, "**").into_owned()
}

/// Deletes single asterisks that cannot belong to a `**` delimiter.
///
/// An asterisk is removed when it follows the start of the text or a
/// character that is neither an asterisk nor a word character, and is itself
/// followed by the end of the text or a character other than an asterisk or
/// a line break. The neighbouring characters are kept.
pub fn strip_stray(text: &str) -> String {
    STRAY_MARKER.replace_all(text, "${1}${2}").into_owned()
}

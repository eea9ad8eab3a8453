use once_cell::sync::Lazy;
use regex::Regex;

static STAR_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([ \t]*)\*[ \t]+").expect("valid bullet pattern"));

/// Rewrites a leading `* ` list marker on each line to `- `, keeping the
/// indentation in front of it.
pub fn rewrite_bullets(text: &str) -> String {
    STAR_BULLET.replace_all(text, "${1}- ").into_owned()
}

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*\n]+)\*\*").expect("valid bold span pattern"));

/// Turns `**content**` into `<strong>content</strong>`.
///
/// The input must already be escaped: the tags produced here are the only
/// markup in the final output.
pub fn render_bold(escaped: &str) -> String {
    BOLD_SPAN
        .replace_all(escaped, "<strong>${1}</strong>")
        .into_owned()
}

use once_cell::sync::Lazy;
use regex::Regex;

// Boundary groups are consumed by a match, so `*a* *b*` only rewrites the
// first span: the shared space cannot open the second one.
static ASTERISK_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|[\s(])\*([^*\n]+)\*([\s).,!?:;]|$)").expect("valid asterisk span pattern")
});
static UNDERSCORE_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|[\s(])_([^_\n]+)_([\s).,!?:;]|$)").expect("valid underscore span pattern")
});

const DOUBLED: &str = "${1}**${2}**${3}";

/// Promotes `*word*` and `_word_` spans to the doubled `**word**` form.
///
/// The asterisk family is rewritten first, then the underscore family, each
/// in a single leftmost non-overlapping pass.
pub fn rewrite_emphasis(text: &str) -> String {
    let asterisks = ASTERISK_SPAN.replace_all(text, DOUBLED);
    UNDERSCORE_SPAN.replace_all(&asterisks, DOUBLED).into_owned()
}

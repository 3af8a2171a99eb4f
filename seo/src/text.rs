//! Plain-text helpers
//!
//! Word counting and a lightweight HTML-to-text extraction for callers that
//! only have the stored HTML of a post.

use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_BREAK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(?:p|h[1-6]|li|blockquote|div|pre|tr|td|th|figcaption)\s*>")
        .expect("block break pattern is valid")
});

static ANY_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Count whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Strip markup from serialized rich text.
///
/// Block ends and `<br>` become line breaks so that words in adjacent blocks
/// do not run together; inline tags are removed without inserting anything.
pub fn html_to_text(html: &str) -> String {
    let broken = BLOCK_BREAK_RE.replace_all(html, "\n");
    let stripped = ANY_TAG_RE.replace_all(&broken, "");
    decode_entities(&stripped)
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

//! Text statistics
//!
//! Counts derived from a draft on every evaluation. Tag counts are literal
//! substring matches on the serialized HTML, not a parse: a `<h2` written as
//! text inside a code block counts too.

use serde::{Deserialize, Serialize};

use crate::draft::DraftSnapshot;
use crate::text::word_count;
use crate::transitions::count_transition_words;

const IMG_TAG: &str = "<img";
const H2_TAG: &str = "<h2";
const H3_TAG: &str = "<h3";
const LINK_TAG: &str = "<a ";
const TABLE_TAG: &str = "<table";

/// Statistics about a draft's body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStats {
    pub word_count: usize,
    /// Byte length of the HTML in KiB, rounded half up
    pub size_kilobytes: u64,
    pub heading_h2_count: usize,
    pub heading_h3_count: usize,
    pub image_tag_count: usize,
    pub link_tag_count: usize,
    pub table_tag_count: usize,
    pub transition_word_count: usize,
}

/// Derive statistics from a draft. Never fails.
pub fn derive_stats(draft: &DraftSnapshot) -> ContentStats {
    let html = draft.body_html.as_str();

    ContentStats {
        word_count: word_count(&draft.body_text),
        size_kilobytes: size_in_kilobytes(html),
        heading_h2_count: count_tag(html, H2_TAG),
        heading_h3_count: count_tag(html, H3_TAG),
        image_tag_count: count_tag(html, IMG_TAG),
        link_tag_count: count_tag(html, LINK_TAG),
        table_tag_count: count_tag(html, TABLE_TAG),
        transition_word_count: count_transition_words(&draft.body_text),
    }
}

/// UTF-8 byte length divided by 1024, ties rounded up.
pub fn size_in_kilobytes(html: &str) -> u64 {
    (html.len() as u64 + 512) / 1024
}

/// Non-overlapping, case-sensitive occurrences of an opening-tag prefix.
fn count_tag(html: &str, prefix: &str) -> usize {
    html.matches(prefix).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_html(html: &str) -> DraftSnapshot {
        DraftSnapshot {
            body_html: html.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_draft_has_zero_stats() {
        assert_eq!(derive_stats(&DraftSnapshot::default()), ContentStats::default());
    }

    #[test]
    fn heading_count_is_literal() {
        let stats = derive_stats(&draft_with_html("<h2>A</h2><p>x</p><h2>B</h2>"));
        assert_eq!(stats.heading_h2_count, 2);
        assert_eq!(stats.heading_h3_count, 0);
    }

    #[test]
    fn tag_counts_are_case_sensitive() {
        let stats = derive_stats(&draft_with_html("<H2>A</H2><IMG src=x>"));
        assert_eq!(stats.heading_h2_count, 0);
        assert_eq!(stats.image_tag_count, 0);
    }

    #[test]
    fn attribute_laden_tags_are_counted() {
        let html = r#"<img src="a.png" alt="a"/><img class="x" src="b.png"><table class="t"><tr><td>1</td></tr></table>"#;
        let stats = derive_stats(&draft_with_html(html));
        assert_eq!(stats.image_tag_count, 2);
        assert_eq!(stats.table_tag_count, 1);
    }

    #[test]
    fn link_needs_a_trailing_space() {
        let stats = derive_stats(&draft_with_html(
            r#"<a href="/one">one</a> <abbr>x</abbr> <a>bare</a>"#,
        ));
        assert_eq!(stats.link_tag_count, 1);
    }

    #[test]
    fn tags_inside_code_text_are_still_counted() {
        let stats = derive_stats(&draft_with_html("<pre><code><h3 is a heading</code></pre>"));
        assert_eq!(stats.heading_h3_count, 1);
    }

    #[test]
    fn size_rounds_half_up() {
        assert_eq!(size_in_kilobytes(""), 0);
        assert_eq!(size_in_kilobytes(&"a".repeat(511)), 0);
        assert_eq!(size_in_kilobytes(&"a".repeat(512)), 1);
        assert_eq!(size_in_kilobytes(&"a".repeat(1024)), 1);
        assert_eq!(size_in_kilobytes(&"a".repeat(1535)), 1);
        assert_eq!(size_in_kilobytes(&"a".repeat(1536)), 2);
    }

    #[test]
    fn size_counts_utf8_bytes() {
        // "é" is two bytes
        assert_eq!(size_in_kilobytes(&"é".repeat(256)), 1);
    }

    #[test]
    fn words_and_transitions_come_from_plain_text() {
        let draft = DraftSnapshot {
            body_html: "<p>ignored words here</p>".to_string(),
            body_text: "first we plan then we build".to_string(),
            ..Default::default()
        };
        let stats = derive_stats(&draft);
        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.transition_word_count, 2);
    }
}

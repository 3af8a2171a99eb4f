//! Draft snapshot
//!
//! The read-only view of a post being edited. The editor hands a fresh
//! snapshot to the scorer on every change; the scorer never holds on to it.

use serde::{Deserialize, Serialize};

/// Everything the scorer looks at for one evaluation.
///
/// Empty strings are valid for every field and are treated as zero-length
/// input, never as errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftSnapshot {
    pub title: String,
    pub slug: String,
    /// Serialized rich-text content
    pub body_html: String,
    /// Plain-text extraction of `body_html`
    pub body_text: String,
    pub excerpt: String,
    pub meta_description: String,
    pub focus_keyword: String,
    pub featured_image_url: String,
    pub writer_name: String,
}

impl DraftSnapshot {
    /// The description search engines will show: the meta description when
    /// set, otherwise the excerpt.
    pub fn description(&self) -> &str {
        if self.meta_description.is_empty() {
            &self.excerpt
        } else {
            &self.meta_description
        }
    }

    /// The focus keyword, or `None` when the author has not chosen one.
    pub fn keyword(&self) -> Option<&str> {
        if self.focus_keyword.is_empty() {
            None
        } else {
            Some(&self.focus_keyword)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_prefers_meta_description() {
        let draft = DraftSnapshot {
            excerpt: "excerpt".to_string(),
            meta_description: "meta".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.description(), "meta");
    }

    #[test]
    fn description_falls_back_to_excerpt() {
        let draft = DraftSnapshot {
            excerpt: "excerpt".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.description(), "excerpt");
    }

    #[test]
    fn empty_keyword_is_none() {
        assert_eq!(DraftSnapshot::default().keyword(), None);
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let draft: DraftSnapshot = serde_json::from_str(r#"{"title":"Hello"}"#).unwrap();
        assert_eq!(draft.title, "Hello");
        assert!(draft.body_html.is_empty());
        assert!(draft.writer_name.is_empty());
    }
}

//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;
use maxwritings_seo::{assess, ScoringProfile};
use uuid::Uuid;

use crate::app::CreatePost;
use crate::domain::entities::{Admin, AdminId, Post, PostId, PostStatus};

/// 53 characters, contains the focus keyword
pub const TEST_TITLE: &str = "Writing Rust services that stay fast under heavy load";

/// 131 characters
pub const TEST_DESCRIPTION: &str = "A practical guide to building Rust web services that stay fast, predictable and easy to operate once real traffic starts to arrive.";

/// Body with two headed sections, a link, a table, and enough words and
/// transition words to satisfy every rule without structural issues
pub fn publishable_content() -> String {
    let paragraph = |lead: &str| {
        format!(
            "<p>{} however therefore moreover furthermore finally {}</p>",
            lead,
            vec!["word"; 140].join(" ")
        )
    };
    format!(
        "<h2>Why rust</h2>{}<h2>Getting started</h2>{}\
         <p>Read the <a href=\"https://www.rust-lang.org\">official guide</a></p>\
         <table><tr><td>rust</td></tr></table>",
        paragraph("rust matters because"),
        paragraph("install rust with"),
    )
}

/// Create a test admin with default values
pub fn test_admin() -> Admin {
    Admin {
        id: AdminId(Uuid::new_v4()),
        username: "test-admin".to_string(),
        api_key_hash: "abc123hash".to_string(),
        created_at: Utc::now(),
        last_seen_at: None,
    }
}

/// Create a draft post with the given slug, scored with the full profile
pub fn test_post(slug: &str) -> Post {
    let now = Utc::now();
    let mut post = Post {
        id: PostId(Uuid::new_v4()),
        title: TEST_TITLE.to_string(),
        slug: slug.to_string(),
        content: publishable_content(),
        image_url: Some("https://cdn.maxwritings.com/cover.png".to_string()),
        excerpt: None,
        meta_title: None,
        meta_description: Some(TEST_DESCRIPTION.to_string()),
        keywords: vec!["rust".to_string()],
        focus_keyword: Some("rust".to_string()),
        writer: "Max Writer".to_string(),
        linkedin_url: None,
        status: PostStatus::Draft,
        seo_score: 0,
        created_at: now,
        updated_at: now,
        published_at: None,
    };
    post.seo_score = assess(&ScoringProfile::full(), &post.draft_snapshot()).score() as i32;
    post
}

/// Create a published post with the given slug
pub fn test_published_post(slug: &str) -> Post {
    let mut post = test_post(slug);
    post.status = PostStatus::Published;
    post.published_at = Some(post.created_at);
    post
}

/// Input for creating a publishable post with the given slug
pub fn test_create_post(slug: &str) -> CreatePost {
    CreatePost {
        title: TEST_TITLE.to_string(),
        content: publishable_content(),
        slug: slug.to_string(),
        image_url: Some("https://cdn.maxwritings.com/cover.png".to_string()),
        excerpt: Some("Short excerpt".to_string()),
        meta_title: Some("Fast Rust services".to_string()),
        meta_description: Some(TEST_DESCRIPTION.to_string()),
        keywords: vec![" rust ".to_string(), String::new(), "seo".to_string()],
        focus_keyword: Some("rust".to_string()),
        writer: "Max Writer".to_string(),
        linkedin_url: None,
        publish: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publishable_content_scores_full_marks() {
        let post = test_post("fixture");
        let evaluation = assess(&ScoringProfile::full(), &post.draft_snapshot());
        assert!(evaluation.issues.is_empty(), "{:?}", evaluation.issues);
        assert!(evaluation.can_publish());
        assert_eq!(post.seo_score, 100);
    }
}

//! Blog post domain entity
//!
//! A post is an HTML article with SEO metadata. Drafts are only visible to
//! admins; published posts are served on the public site and the sitemap.

use chrono::{DateTime, Utc};
use maxwritings_seo::{html_to_text, DraftSnapshot};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PostId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Publication state of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostStatus::Draft => write!(f, "draft"),
            PostStatus::Published => write!(f, "published"),
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            _ => Err(format!("Unknown post status: {}", s)),
        }
    }
}

/// Column a post listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostSort {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
}

impl std::str::FromStr for PostSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" | "createdAt" => Ok(PostSort::CreatedAt),
            "updated_at" | "updatedAt" => Ok(PostSort::UpdatedAt),
            "title" => Ok(PostSort::Title),
            _ => Err(format!("Unknown sort field: {}", s)),
        }
    }
}

/// A blog post
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    /// Article body as HTML
    pub content: String,
    pub image_url: Option<String>,
    pub excerpt: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Vec<String>,
    pub focus_keyword: Option<String>,
    pub writer: String,
    pub linkedin_url: Option<String>,
    pub status: PostStatus,
    /// Score computed on the last save
    pub seo_score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Snapshot of the post as the scorer sees it
    pub fn draft_snapshot(&self) -> DraftSnapshot {
        DraftSnapshot {
            title: self.title.clone(),
            slug: self.slug.clone(),
            body_html: self.content.clone(),
            body_text: html_to_text(&self.content),
            excerpt: self.excerpt.clone().unwrap_or_default(),
            meta_description: self.meta_description.clone().unwrap_or_default(),
            focus_keyword: self.focus_keyword.clone().unwrap_or_default(),
            featured_image_url: self.image_url.clone().unwrap_or_default(),
            writer_name: self.writer.clone(),
        }
    }

    /// Apply an update in place, leaving timestamps and status alone
    pub fn apply(&mut self, update: &PostUpdate) {
        self.title = update.title.clone();
        self.slug = update.slug.clone();
        self.content = update.content.clone();
        self.seo_score = update.seo_score;
        if let Some(image_url) = &update.image_url {
            self.image_url = image_url.clone();
        }
        if let Some(excerpt) = &update.excerpt {
            self.excerpt = non_empty(excerpt);
        }
        if let Some(meta_title) = &update.meta_title {
            self.meta_title = non_empty(meta_title);
        }
        if let Some(meta_description) = &update.meta_description {
            self.meta_description = non_empty(meta_description);
        }
        if let Some(keywords) = &update.keywords {
            self.keywords = keywords.clone();
        }
        if let Some(focus_keyword) = &update.focus_keyword {
            self.focus_keyword = non_empty(focus_keyword);
        }
        if let Some(writer) = &update.writer {
            self.writer = writer.clone();
        }
        if let Some(linkedin_url) = &update.linkedin_url {
            self.linkedin_url = non_empty(linkedin_url);
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    Some(value.to_string()).filter(|v| !v.is_empty())
}

/// Data needed to create a new post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub image_url: Option<String>,
    pub excerpt: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Vec<String>,
    pub focus_keyword: Option<String>,
    pub writer: String,
    pub linkedin_url: Option<String>,
    pub status: PostStatus,
    pub seo_score: i32,
}

impl NewPost {
    /// Snapshot of the post about to be created, as the scorer sees it
    pub fn draft_snapshot(&self) -> DraftSnapshot {
        DraftSnapshot {
            title: self.title.clone(),
            slug: self.slug.clone(),
            body_html: self.content.clone(),
            body_text: html_to_text(&self.content),
            excerpt: self.excerpt.clone().unwrap_or_default(),
            meta_description: self.meta_description.clone().unwrap_or_default(),
            focus_keyword: self.focus_keyword.clone().unwrap_or_default(),
            featured_image_url: self.image_url.clone().unwrap_or_default(),
            writer_name: self.writer.clone(),
        }
    }
}

/// Replacement values for an existing post
///
/// `None` leaves a field untouched. For `image_url`, `Some(None)` removes the
/// image.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub image_url: Option<Option<String>>,
    pub excerpt: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub focus_keyword: Option<String>,
    pub writer: Option<String>,
    pub linkedin_url: Option<String>,
    pub seo_score: i32,
}

/// Filter and ordering for a page of posts
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub status: Option<PostStatus>,
    pub sort: PostSort,
    pub ascending: bool,
    pub offset: u64,
    pub limit: u64,
}

/// Sitemap location of a published post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLocation {
    pub slug: String,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        assert_eq!("Published".parse::<PostStatus>(), Ok(PostStatus::Published));
        assert_eq!(PostStatus::Draft.to_string(), "draft");
        assert!("archived".parse::<PostStatus>().is_err());
    }

    #[test]
    fn sort_accepts_both_spellings() {
        assert_eq!("createdAt".parse::<PostSort>(), Ok(PostSort::CreatedAt));
        assert_eq!("updated_at".parse::<PostSort>(), Ok(PostSort::UpdatedAt));
        assert_eq!("title".parse::<PostSort>(), Ok(PostSort::Title));
        assert!("views".parse::<PostSort>().is_err());
    }

    #[test]
    fn draft_snapshot_derives_plain_text() {
        let now = Utc::now();
        let post = Post {
            id: PostId::new(),
            title: "Writing better headlines".to_string(),
            slug: "writing-better-headlines".to_string(),
            content: "<h2>Intro</h2><p>Hello &amp; welcome</p>".to_string(),
            image_url: Some("https://cdn.example.com/a.png".to_string()),
            excerpt: None,
            meta_title: None,
            meta_description: Some("Desc".to_string()),
            keywords: vec![],
            focus_keyword: Some("headlines".to_string()),
            writer: "Max".to_string(),
            linkedin_url: None,
            status: PostStatus::Draft,
            seo_score: 0,
            created_at: now,
            updated_at: now,
            published_at: None,
        };

        let draft = post.draft_snapshot();
        assert_eq!(draft.body_text.trim(), "Intro\nHello & welcome");
        assert_eq!(draft.featured_image_url, "https://cdn.example.com/a.png");
        assert_eq!(draft.excerpt, "");
        assert_eq!(draft.keyword(), Some("headlines"));
        assert!(!post.is_published());
    }

    #[test]
    fn apply_keeps_image_unless_given() {
        let now = Utc::now();
        let mut post = Post {
            id: PostId::new(),
            title: "Old".to_string(),
            slug: "old".to_string(),
            content: "<p>old</p>".to_string(),
            image_url: Some("https://cdn.example.com/a.png".to_string()),
            excerpt: Some("Excerpt".to_string()),
            meta_title: None,
            meta_description: None,
            keywords: vec!["a".to_string()],
            focus_keyword: None,
            writer: "Max".to_string(),
            linkedin_url: None,
            status: PostStatus::Published,
            seo_score: 10,
            created_at: now,
            updated_at: now,
            published_at: Some(now),
        };

        let update = PostUpdate {
            title: "New".to_string(),
            slug: "new".to_string(),
            content: "<p>new</p>".to_string(),
            excerpt: Some(String::new()),
            seo_score: 20,
            ..Default::default()
        };
        post.apply(&update);
        assert_eq!(post.title, "New");
        assert_eq!(post.seo_score, 20);
        assert!(post.image_url.is_some());
        assert!(post.excerpt.is_none());
        assert_eq!(post.keywords, vec!["a"]);
        assert_eq!(post.status, PostStatus::Published);

        post.apply(&PostUpdate {
            image_url: Some(None),
            ..update
        });
        assert!(post.image_url.is_none());
    }
}

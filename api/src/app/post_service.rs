//! Post service
//!
//! Post CRUD with input validation, SEO scoring on every save, and the
//! publish gate.

use std::sync::Arc;

use maxwritings_seo::{assess, DraftSnapshot, Evaluation, ScoringProfile};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::app::pagination::{Page, PageRequest};
use crate::domain::entities::{
    NewPost, Post, PostId, PostLocation, PostQuery, PostSort, PostStatus, PostUpdate,
};
use crate::domain::ports::PostRepository;
use crate::error::{AppError, DomainError};

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("slug pattern is valid"));

const MAX_TITLE_CHARS: usize = 255;
const MAX_SLUG_CHARS: usize = 255;
const MAX_FOCUS_KEYWORD_CHARS: usize = 255;
const MAX_WRITER_CHARS: usize = 255;
const MAX_EXCERPT_CHARS: usize = 160;
const MAX_META_TITLE_CHARS: usize = 60;
const MAX_META_DESCRIPTION_CHARS: usize = 160;

/// Fields accepted when creating a post
///
/// Missing fields deserialize as empty so that validation reports them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub excerpt: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Vec<String>,
    pub focus_keyword: Option<String>,
    pub writer: String,
    pub linkedin_url: Option<String>,
    /// Publish immediately; subject to the publish gate
    pub publish: bool,
}

/// Fields accepted when editing a post; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditPost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub slug: Option<String>,
    pub image_url: Option<String>,
    pub excerpt: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub focus_keyword: Option<String>,
    pub writer: Option<String>,
    pub linkedin_url: Option<String>,
}

/// Which posts to list and in what order
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    pub page: PageRequest,
    pub status: Option<PostStatus>,
    pub sort: PostSort,
    pub ascending: bool,
}

/// Service for managing blog posts
pub struct PostService<PR>
where
    PR: PostRepository,
{
    posts: Arc<PR>,
    profile: ScoringProfile,
}

impl<PR> PostService<PR>
where
    PR: PostRepository,
{
    pub fn new(posts: Arc<PR>, profile: ScoringProfile) -> Self {
        Self { posts, profile }
    }

    /// Score a draft with the configured profile
    pub fn evaluate(&self, draft: &DraftSnapshot) -> Evaluation {
        assess(&self.profile, draft)
    }

    /// List a page of posts
    pub async fn list(&self, options: ListOptions) -> Result<Page<Post>, AppError> {
        let query = PostQuery {
            status: options.status,
            sort: options.sort,
            ascending: options.ascending,
            offset: options.page.offset(),
            limit: options.page.limit,
        };
        let (posts, total) = self.posts.list(&query).await?;
        Ok(Page::new(posts, options.page, total))
    }

    /// Get any post by ID
    pub async fn get(&self, id: &PostId) -> Result<Post, AppError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))
    }

    /// Get a published post by slug; drafts are reported as missing
    pub async fn get_published(&self, slug: &str) -> Result<Post, AppError> {
        self.posts
            .find_by_slug(slug)
            .await?
            .filter(Post::is_published)
            .ok_or_else(|| AppError::NotFound(format!("Post '{}' not found", slug)))
    }

    /// Create a post
    pub async fn create(&self, input: CreatePost) -> Result<Post, AppError> {
        let title = required(&input.title, "Title")?;
        let content = required(&input.content, "Content")?;
        let writer = required(&input.writer, "Writer")?;
        let slug = input.slug.trim().to_string();
        validate_slug(&slug)?;

        let excerpt = optional(input.excerpt);
        let meta_title = optional(input.meta_title);
        let meta_description = optional(input.meta_description);
        let focus_keyword = optional(input.focus_keyword);
        validate_lengths(&[
            ("Title", Some(title.as_str()), MAX_TITLE_CHARS),
            ("Slug", Some(slug.as_str()), MAX_SLUG_CHARS),
            ("Excerpt", excerpt.as_deref(), MAX_EXCERPT_CHARS),
            ("Meta title", meta_title.as_deref(), MAX_META_TITLE_CHARS),
            ("Meta description", meta_description.as_deref(), MAX_META_DESCRIPTION_CHARS),
            ("Focus keyword", focus_keyword.as_deref(), MAX_FOCUS_KEYWORD_CHARS),
            ("Writer", Some(writer.as_str()), MAX_WRITER_CHARS),
        ])?;

        if self.posts.find_by_slug(&slug).await?.is_some() {
            return Err(slug_taken());
        }

        let mut new_post = NewPost {
            title,
            slug,
            content,
            image_url: optional(input.image_url),
            excerpt,
            meta_title,
            meta_description,
            keywords: clean_keywords(input.keywords),
            focus_keyword,
            writer,
            linkedin_url: optional(input.linkedin_url),
            status: PostStatus::Draft,
            seo_score: 0,
        };

        let evaluation = self.evaluate(&new_post.draft_snapshot());
        if input.publish {
            if !evaluation.can_publish() {
                return Err(AppError::PublishBlocked(evaluation.publish_blockers));
            }
            new_post.status = PostStatus::Published;
        }
        new_post.seo_score = score_as_i32(&evaluation);

        let post = self.posts.create(&new_post).await?;
        tracing::info!(
            post_id = %post.id,
            slug = %post.slug,
            status = %post.status,
            seo_score = post.seo_score,
            "Post created"
        );

        Ok(post)
    }

    /// Edit a post
    ///
    /// Title and content must be present and non-blank. The slug defaults to
    /// the slugified title. A published post must still pass the publish gate
    /// after the edit.
    pub async fn update(&self, id: &PostId, input: EditPost) -> Result<Post, AppError> {
        let existing = self.get(id).await?;

        let title = required(input.title.as_deref().unwrap_or_default(), "Title")?;
        let content = required(input.content.as_deref().unwrap_or_default(), "Content")?;
        let slug = match input.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => slugify(&title),
        };
        validate_slug(&slug)?;

        let trim = |value: Option<String>| value.map(|v| v.trim().to_string());
        let update = PostUpdate {
            title,
            slug,
            content,
            image_url: input.image_url.map(|url| optional(Some(url))),
            excerpt: trim(input.excerpt),
            meta_title: trim(input.meta_title),
            meta_description: trim(input.meta_description),
            keywords: input.keywords.map(clean_keywords),
            focus_keyword: trim(input.focus_keyword),
            writer: match trim(input.writer) {
                Some(writer) => Some(required(&writer, "Writer")?),
                None => None,
            },
            linkedin_url: trim(input.linkedin_url),
            seo_score: 0,
        };
        validate_lengths(&[
            ("Title", Some(update.title.as_str()), MAX_TITLE_CHARS),
            ("Slug", Some(update.slug.as_str()), MAX_SLUG_CHARS),
            ("Excerpt", update.excerpt.as_deref(), MAX_EXCERPT_CHARS),
            ("Meta title", update.meta_title.as_deref(), MAX_META_TITLE_CHARS),
            ("Meta description", update.meta_description.as_deref(), MAX_META_DESCRIPTION_CHARS),
            ("Focus keyword", update.focus_keyword.as_deref(), MAX_FOCUS_KEYWORD_CHARS),
            ("Writer", update.writer.as_deref(), MAX_WRITER_CHARS),
        ])?;

        if update.slug != existing.slug && self.posts.find_by_slug(&update.slug).await?.is_some() {
            return Err(slug_taken());
        }

        let mut preview = existing.clone();
        preview.apply(&update);
        let evaluation = self.evaluate(&preview.draft_snapshot());
        if existing.is_published() && !evaluation.can_publish() {
            return Err(AppError::PublishBlocked(evaluation.publish_blockers));
        }

        let update = PostUpdate {
            seo_score: score_as_i32(&evaluation),
            ..update
        };
        let post = self.posts.update(id, &update).await?;
        tracing::info!(post_id = %post.id, seo_score = post.seo_score, "Post updated");

        Ok(post)
    }

    /// Publish a post if it passes the publish gate
    pub async fn publish(&self, id: &PostId) -> Result<Post, AppError> {
        let post = self.get(id).await?;
        let evaluation = self.evaluate(&post.draft_snapshot());
        if !evaluation.can_publish() {
            tracing::debug!(
                post_id = %id,
                blockers = evaluation.publish_blockers.len(),
                "Publish blocked"
            );
            return Err(AppError::PublishBlocked(evaluation.publish_blockers));
        }

        let post = self.posts.set_status(id, PostStatus::Published).await?;
        tracing::info!(post_id = %post.id, slug = %post.slug, "Post published");
        Ok(post)
    }

    /// Return a post to draft
    pub async fn unpublish(&self, id: &PostId) -> Result<Post, AppError> {
        let post = self.posts.set_status(id, PostStatus::Draft).await?;
        tracing::info!(post_id = %post.id, "Post unpublished");
        Ok(post)
    }

    /// Delete a post, returning it
    pub async fn delete(&self, id: &PostId) -> Result<Post, AppError> {
        let post = self.posts.delete(id).await?;
        tracing::info!(post_id = %post.id, slug = %post.slug, "Post deleted");
        Ok(post)
    }

    /// Sitemap locations of every published post
    pub async fn sitemap_locations(&self) -> Result<Vec<PostLocation>, AppError> {
        Ok(self.posts.list_published_locations().await?)
    }
}

fn score_as_i32(evaluation: &Evaluation) -> i32 {
    i32::try_from(evaluation.score()).unwrap_or(i32::MAX)
}

fn slug_taken() -> AppError {
    AppError::Domain(DomainError::AlreadyExists(
        "A post with this slug already exists".to_string(),
    ))
}

fn required(value: &str, field: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Domain(DomainError::Validation(format!(
            "{} is required",
            field
        ))));
    }
    Ok(value.to_string())
}

/// Trimmed value, `None` when blank
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_slug(slug: &str) -> Result<(), AppError> {
    if !SLUG_RE.is_match(slug) {
        return Err(AppError::Domain(DomainError::Validation(
            "Slug can only contain lowercase letters, numbers, and hyphens".to_string(),
        )));
    }
    Ok(())
}

/// Reject the first present value longer than its limit in characters
fn validate_lengths(fields: &[(&str, Option<&str>, usize)]) -> Result<(), AppError> {
    for &(field, value, max) in fields {
        if value.is_some_and(|v| v.chars().count() > max) {
            return Err(AppError::Domain(DomainError::Validation(format!(
                "{} must be at most {} characters",
                field, max
            ))));
        }
    }
    Ok(())
}

/// Trim keywords and drop empty ones
pub fn clean_keywords(keywords: Vec<String>) -> Vec<String> {
    keywords
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Lowercase, join words with '-', drop anything a slug may not contain
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .map(|word| {
            word.to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

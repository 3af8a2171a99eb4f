//! Response bodies shared by the public and admin post handlers

use serde::{Deserialize, Serialize};

use crate::app::{ListOptions, Page, PageRequest};
use crate::domain::entities::{Post, PostSort, PostStatus};
use crate::error::AppError;

/// Query parameters for post listings
#[derive(Debug, Default, Deserialize)]
pub struct ListPostsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    /// Admin listings only
    pub status: Option<String>,
}

impl ListPostsQuery {
    /// Listing options; `status` is ignored unless `allow_status` is set
    pub fn into_options(self, allow_status: bool) -> Result<ListOptions, AppError> {
        let sort = match self.sort_by.as_deref() {
            Some(field) => field.parse::<PostSort>().map_err(AppError::BadRequest)?,
            None => PostSort::default(),
        };
        let status = match self.status.as_deref() {
            Some(status) if allow_status => {
                Some(status.parse::<PostStatus>().map_err(AppError::BadRequest)?)
            }
            _ => None,
        };

        Ok(ListOptions {
            page: PageRequest::new(self.page, self.limit),
            status,
            sort,
            ascending: self.sort_order.as_deref() == Some("asc"),
        })
    }
}

/// Pagination envelope fields
#[derive(Debug, Serialize)]
pub struct PaginationResponse {
    pub page: u64,
    pub limit: u64,
    pub total_posts: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Paged list of posts
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: PaginationResponse,
}

impl<T> ListResponse<T> {
    pub fn from_page<P>(page: Page<P>, f: impl FnMut(P) -> T) -> Self {
        let pagination = PaginationResponse {
            page: page.page,
            limit: page.limit,
            total_posts: page.total,
            total_pages: page.total_pages(),
            has_next_page: page.has_next_page(),
            has_prev_page: page.has_prev_page(),
        };
        Self {
            success: true,
            data: page.map(f).items,
            pagination,
        }
    }
}

/// Post card for listings
#[derive(Debug, Serialize)]
pub struct PostSummaryResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub writer: String,
    pub status: String,
    pub seo_score: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Post> for PostSummaryResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            image_url: post.image_url,
            writer: post.writer,
            status: post.status.to_string(),
            seo_score: post.seo_score,
            created_at: post.created_at.to_rfc3339(),
            updated_at: post.updated_at.to_rfc3339(),
        }
    }
}

/// Full post
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: String,
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
    pub status: String,
    pub seo_score: i32,
    pub created_at: String,
    pub updated_at: String,
    pub published_at: Option<String>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            slug: post.slug,
            content: post.content,
            image_url: post.image_url,
            excerpt: post.excerpt,
            meta_title: post.meta_title,
            meta_description: post.meta_description,
            keywords: post.keywords,
            focus_keyword: post.focus_keyword,
            writer: post.writer,
            linkedin_url: post.linkedin_url,
            status: post.status.to_string(),
            seo_score: post.seo_score,
            created_at: post.created_at.to_rfc3339(),
            updated_at: post.updated_at.to_rfc3339(),
            published_at: post.published_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// Single-post envelope
#[derive(Debug, Serialize)]
pub struct PostEnvelope {
    pub success: bool,
    pub data: PostResponse,
}

impl From<Post> for PostEnvelope {
    fn from(post: Post) -> Self {
        Self {
            success: true,
            data: post.into(),
        }
    }
}

//! Public blog handlers
//!
//! Published posts only; drafts are never visible here.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::domain::entities::PostStatus;
use crate::error::AppError;
use crate::handlers::responses::{ListPostsQuery, ListResponse, PostEnvelope, PostSummaryResponse};
use crate::AppState;

/// List published posts
///
/// GET /blogs
pub async fn list_blogs(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> Result<Json<ListResponse<PostSummaryResponse>>, AppError> {
    let mut options = query.into_options(false)?;
    options.status = Some(PostStatus::Published);

    let page = state.post_service.list(options).await?;

    Ok(Json(ListResponse::from_page(page, PostSummaryResponse::from)))
}

/// Get a published post by slug
///
/// GET /blogs/:slug
pub async fn get_blog(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PostEnvelope>, AppError> {
    let post = state.post_service.get_published(&slug).await?;
    Ok(Json(post.into()))
}

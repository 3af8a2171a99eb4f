//! Admin post handlers
//!
//! Post management for authenticated admins. Every save is scored; publishing
//! goes through the publish gate.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Redirect,
    Extension, Json,
};
use uuid::Uuid;

use crate::app::{CreatePost, EditPost};
use crate::domain::entities::{Admin, PostId};
use crate::error::AppError;
use crate::handlers::responses::{ListPostsQuery, ListResponse, PostEnvelope, PostSummaryResponse};
use crate::AppState;

fn parse_post_id(id: &str) -> Result<PostId, AppError> {
    Uuid::parse_str(id)
        .map(PostId)
        .map_err(|_| AppError::BadRequest("Invalid post ID".to_string()))
}

/// List all posts including drafts
///
/// GET /admin/posts
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> Result<Json<ListResponse<PostSummaryResponse>>, AppError> {
    let options = query.into_options(true)?;
    let page = state.post_service.list(options).await?;
    Ok(Json(ListResponse::from_page(page, PostSummaryResponse::from)))
}

/// GET /admin/posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostEnvelope>, AppError> {
    let post = state.post_service.get(&parse_post_id(&id)?).await?;
    Ok(Json(post.into()))
}

/// POST /admin/posts
pub async fn create_post(
    State(state): State<AppState>,
    Extension(admin): Extension<Admin>,
    Json(req): Json<CreatePost>,
) -> Result<(StatusCode, Json<PostEnvelope>), AppError> {
    let post = state.post_service.create(req).await?;
    tracing::debug!(admin = %admin.username, post_id = %post.id, "Admin created post");
    Ok((StatusCode::CREATED, Json(post.into())))
}

/// PUT /admin/posts/:id
pub async fn update_post(
    State(state): State<AppState>,
    Extension(admin): Extension<Admin>,
    Path(id): Path<String>,
    Json(req): Json<EditPost>,
) -> Result<Json<PostEnvelope>, AppError> {
    let post = state
        .post_service
        .update(&parse_post_id(&id)?, req)
        .await?;
    tracing::debug!(admin = %admin.username, post_id = %post.id, "Admin updated post");
    Ok(Json(post.into()))
}

/// DELETE /admin/posts/:id
pub async fn delete_post(
    State(state): State<AppState>,
    Extension(admin): Extension<Admin>,
    Path(id): Path<String>,
) -> Result<Json<PostEnvelope>, AppError> {
    let post = state.post_service.delete(&parse_post_id(&id)?).await?;
    tracing::debug!(admin = %admin.username, post_id = %post.id, "Admin deleted post");
    Ok(Json(post.into()))
}

/// POST /admin/posts/:id/publish
pub async fn publish_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostEnvelope>, AppError> {
    let post = state.post_service.publish(&parse_post_id(&id)?).await?;
    Ok(Json(post.into()))
}

/// POST /admin/posts/:id/unpublish
pub async fn unpublish_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostEnvelope>, AppError> {
    let post = state.post_service.unpublish(&parse_post_id(&id)?).await?;
    Ok(Json(post.into()))
}

/// Redirect to the editor page of a post
///
/// GET /admin/posts/:id/edit
pub async fn edit_redirect(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let post = state.post_service.get(&parse_post_id(&id)?).await?;
    Ok(Redirect::permanent(&editor_path(&post.slug)))
}

fn editor_path(slug: &str) -> String {
    format!("/admin/blog/edit/{}", urlencoding::encode(slug))
}

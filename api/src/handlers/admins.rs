//! Admin account handlers

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Admin;
use crate::error::AppError;
use crate::AppState;

/// Request to create another admin
#[derive(Debug, Deserialize)]
pub struct CreateAdminRequest {
    pub username: String,
}

/// Response after creating an admin
#[derive(Debug, Serialize)]
pub struct CreateAdminResponse {
    pub id: String,
    pub username: String,
    pub api_key: String,
    pub message: String,
}

/// Current admin
#[derive(Debug, Serialize)]
pub struct AdminResponse {
    pub id: String,
    pub username: String,
    pub created_at: String,
    pub last_seen_at: Option<String>,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id.to_string(),
            username: admin.username,
            created_at: admin.created_at.to_rfc3339(),
            last_seen_at: admin.last_seen_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// POST /admin/admins
pub async fn create_admin(
    State(state): State<AppState>,
    Extension(creator): Extension<Admin>,
    Json(req): Json<CreateAdminRequest>,
) -> Result<(StatusCode, Json<CreateAdminResponse>), AppError> {
    let (admin, api_key) = state.admin_service.create_admin(req.username.trim()).await?;
    tracing::info!(created_by = %creator.username, username = %admin.username, "New admin");

    Ok((
        StatusCode::CREATED,
        Json(CreateAdminResponse {
            id: admin.id.to_string(),
            username: admin.username,
            api_key,
            message: "Store this API key securely. It will not be shown again.".to_string(),
        }),
    ))
}

/// GET /admin/me
///
/// Reads the admin back from storage so `last_seen_at` is current.
pub async fn me(
    State(state): State<AppState>,
    Extension(admin): Extension<Admin>,
) -> Result<Json<AdminResponse>, AppError> {
    let admin = state.admin_service.get(&admin.id).await?;
    Ok(Json(admin.into()))
}

//! API key authentication middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::app::hash_api_key;
use crate::error::AppError;
use crate::AppState;

/// Extract the API key from the Authorization header
fn extract_api_key(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|key| !key.is_empty())
}

/// Authentication middleware
///
/// Validates the API key and injects the Admin into request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let api_key = extract_api_key(&request).ok_or(AppError::Unauthorized)?;
    let key_hash = hash_api_key(api_key);

    let admin = state
        .admin_service
        .find_by_api_key(&key_hash)
        .await?
        .ok_or_else(|| {
            tracing::debug!("Rejected unknown API key");
            AppError::Unauthorized
        })?;

    // Update last seen (fire and forget, log errors)
    let admin_id = admin.id;
    let admin_service = state.admin_service.clone();
    tokio::spawn(async move {
        if let Err(e) = admin_service.touch(&admin_id).await {
            tracing::warn!(error = %e, admin_id = %admin_id, "Failed to update last_seen");
        }
    });

    request.extensions_mut().insert(admin);

    Ok(next.run(request).await)
}

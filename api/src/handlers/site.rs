//! Sitemap and robots.txt handlers

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::render::{render_robots, render_sitemap};
use crate::AppState;

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> Result<Response, AppError> {
    let locations = state.post_service.sitemap_locations().await?;
    let xml = render_sitemap(&state.config.site_url, &locations);

    Ok((
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    )
        .into_response())
}

/// GET /robots.txt
pub async fn robots(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&state.config.site_url),
    )
        .into_response()
}

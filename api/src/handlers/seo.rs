//! SEO scoring handler
//!
//! Scores an unsaved draft for the editor. Responds with JSON by default or
//! a markdown report when the client asks for `text/markdown`.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use maxwritings_seo::{html_to_text, DraftSnapshot};
use serde::Deserialize;

use crate::error::AppError;
use crate::render::render_seo_report;
use crate::AppState;

/// Draft to score; `body_text` is derived from `body_html` when absent
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScoreRequest {
    pub title: String,
    pub slug: String,
    pub body_html: String,
    pub body_text: Option<String>,
    pub excerpt: String,
    pub meta_description: String,
    pub focus_keyword: String,
    pub featured_image_url: String,
    pub writer_name: String,
}

impl From<ScoreRequest> for DraftSnapshot {
    fn from(req: ScoreRequest) -> Self {
        let body_text = req
            .body_text
            .unwrap_or_else(|| html_to_text(&req.body_html));
        DraftSnapshot {
            title: req.title,
            slug: req.slug,
            body_html: req.body_html,
            body_text,
            excerpt: req.excerpt,
            meta_description: req.meta_description,
            focus_keyword: req.focus_keyword,
            featured_image_url: req.featured_image_url,
            writer_name: req.writer_name,
        }
    }
}

fn wants_markdown(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/markdown"))
        .unwrap_or(false)
}

/// POST /admin/seo/score
pub async fn score_draft(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ScoreRequest>,
) -> Result<Response, AppError> {
    let draft = DraftSnapshot::from(req);
    let evaluation = state.post_service.evaluate(&draft);
    tracing::debug!(
        score = evaluation.score(),
        issues = evaluation.issues.len(),
        "Scored draft"
    );

    if wants_markdown(&headers) {
        Ok((
            [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
            render_seo_report(&evaluation),
        )
            .into_response())
    } else {
        Ok(Json(evaluation).into_response())
    }
}

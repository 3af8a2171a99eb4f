//! MaxWritings API Server
//!
//! Blog backend: public post pages, sitemap and robots for crawlers, and an
//! authenticated admin area where every save is scored for SEO.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod render;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresAdminRepository, PostgresPostRepository};
use app::{AdminService, PostService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub post_service: Arc<PostService<PostgresPostRepository>>,
    pub admin_service: Arc<AdminService<PostgresAdminRepository>>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origin = match config.cors_allow_origin.as_deref() {
        Some(origin) => match HeaderValue::from_str(origin) {
            Ok(value) => AllowOrigin::exact(value),
            Err(e) => {
                tracing::warn!(error = %e, origin = %origin, "Invalid CORS_ALLOW_ORIGIN, allowing any origin");
                AllowOrigin::from(Any)
            }
        },
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the HTTP router
fn router(state: AppState, config: &Config) -> anyhow::Result<Router> {
    // Rate limiting config: 5 req/sec sustained, burst of 20
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(5)
            .burst_size(20)
            .finish()
            .context("Failed to build governor config")?,
    );

    // Admin routes (API key auth, rate limited)
    let admin_routes = Router::new()
        .route(
            "/posts",
            get(handlers::list_posts).post(handlers::create_post),
        )
        .route(
            "/posts/:id",
            get(handlers::get_post)
                .put(handlers::update_post)
                .delete(handlers::delete_post),
        )
        .route("/posts/:id/publish", post(handlers::publish_post))
        .route("/posts/:id/unpublish", post(handlers::unpublish_post))
        .route("/posts/:id/edit", get(handlers::edit_redirect))
        .route("/seo/score", post(handlers::score_draft))
        .route("/admins", post(handlers::create_admin))
        .route("/me", get(handlers::me))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ))
        .layer(GovernorLayer {
            config: governor_config,
        });

    Ok(Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        // Public blog
        .route("/blogs", get(handlers::list_blogs))
        .route("/blogs/:slug", get(handlers::get_blog))
        // Crawlers
        .route("/sitemap.xml", get(handlers::sitemap))
        .route("/robots.txt", get(handlers::robots))
        // Protected routes
        .nest("/admin", admin_routes)
        // Middleware
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,maxwritings_api=debug,maxwritings_seo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MaxWritings API...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        site_url = %config.site_url,
        track_tables = config.scoring_profile.track_tables,
        track_transitions = config.scoring_profile.track_transitions,
        "Configuration loaded"
    );

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let post_repo = Arc::new(PostgresPostRepository::new(db.clone()));
    let admin_repo = Arc::new(PostgresAdminRepository::new(db.clone()));

    // Create application services
    let post_service = Arc::new(PostService::new(post_repo, config.scoring_profile));
    let admin_service = Arc::new(AdminService::new(admin_repo));

    if let Some((username, api_key)) = config.bootstrap_admin() {
        admin_service
            .ensure_admin(username, api_key)
            .await
            .context("Failed to bootstrap admin")?;
    } else {
        tracing::warn!("ADMIN_USERNAME/ADMIN_API_KEY not set, no bootstrap admin");
    }

    // Create app state
    let state = AppState {
        post_service,
        admin_service,
        config: config.clone(),
    };

    let app = router(state, &config)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}

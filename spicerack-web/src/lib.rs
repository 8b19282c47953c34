//! spicerack-web library - Condiment tracker HTTP service
//!
//! Serves the registration/listing/recipe UI, the JSON API, and uploaded
//! condiment images.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use sqlx::SqlitePool;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use spicerack_common::config::AppConfig;

use crate::services::RecipeClient;

pub mod api;
pub mod services;

/// Maximum accepted request body size (uploaded images included)
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Resolved configuration, built once at startup
    pub config: Arc<AppConfig>,
    /// Outbound recipe search client
    pub recipes: RecipeClient,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, config: AppConfig) -> anyhow::Result<Self> {
        let config = Arc::new(config);
        let recipes = RecipeClient::new(&config)?;
        Ok(Self { db, config, recipes })
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    // Uploaded images are served straight from the upload directory;
    // filenames are always server-generated.
    let uploads = ServeDir::new(state.config.upload_dir());

    Router::new()
        .route("/", get(api::serve_index))
        .route("/list", get(api::serve_list))
        .route("/recipes", get(api::serve_recipes))
        .route("/static/recipe.png", get(api::serve_recipe_placeholder))
        .route("/upload", post(api::upload_condiment))
        .route("/delete/:id", post(api::delete_condiment))
        .route("/api/list", get(api::list_condiments))
        .route("/api/recipes", get(api::recipe_search))
        .merge(api::health_routes())
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

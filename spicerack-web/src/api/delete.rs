//! Condiment deletion handler

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde_json::json;
use tracing::{info, warn};

use spicerack_common::db;

use crate::AppState;

/// POST /delete/:id
///
/// Deletes the row, then removes the associated image file once the row
/// deletion has succeeded. Deleting an unknown id is a no-op; either way
/// the caller is redirected 303 to `/list`.
pub async fn delete_condiment(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<i64>,
) -> Result<Redirect, DeleteError> {
    // Capture the image path before the row disappears
    let image_path = db::image_path_for(&state.db, id)
        .await
        .map_err(|e| DeleteError::Database(e.to_string()))?;

    let affected = db::delete_condiment(&state.db, id)
        .await
        .map_err(|e| DeleteError::Database(e.to_string()))?;

    if affected == 0 {
        info!(id, "Delete requested for unknown condiment (no-op)");
        return Ok(Redirect::to("/list"));
    }

    info!(id, "Deleted condiment");

    // File removal only after the row is gone; a leftover file is logged,
    // not surfaced to the user.
    if let Some(path) = image_path {
        remove_image_file(&state, &path).await;
    }

    Ok(Redirect::to("/list"))
}

async fn remove_image_file(state: &AppState, image_path: &str) {
    // Only paths under the public uploads prefix refer to files we own
    let Some(filename) = image_path.strip_prefix("/uploads/") else {
        warn!(image_path, "Refusing to delete image outside the uploads prefix");
        return;
    };
    // Filenames are server-generated; anything path-like is suspect
    if filename.contains('/') || filename.contains("..") {
        warn!(image_path, "Refusing to delete suspicious image path");
        return;
    }

    let file_path = state.config.upload_dir().join(filename);
    if !file_path.exists() {
        return;
    }
    match tokio::fs::remove_file(&file_path).await {
        Ok(()) => info!(file = %file_path.display(), "Removed condiment image"),
        Err(e) => warn!(file = %file_path.display(), "Failed to remove image: {}", e),
    }
}

/// Deletion errors
#[derive(Debug)]
pub enum DeleteError {
    Database(String),
}

impl IntoResponse for DeleteError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            DeleteError::Database(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

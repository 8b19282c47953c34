//! Condiment registration handler
//!
//! Accepts the multipart registration form (name, optional expiry date,
//! optional image), stores the image under a server-generated filename,
//! inserts the row and redirects to the listing.
//!
//! The image write happens before the insert: a failed write aborts the
//! request with 500 and no row, and a failed insert removes the freshly
//! written file so no row ever references a missing image (and no orphan
//! file survives a failed insert).

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;
use std::path::Path;
use tracing::{info, warn};

use spicerack_common::db::{insert_condiment, NewCondiment};

use crate::AppState;

/// POST /upload
///
/// Multipart fields: `name` (required), `expiry` (optional `YYYY-MM-DD`),
/// `image` (optional file). Redirects 303 to `/list` on success.
pub async fn upload_condiment(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect, UploadError> {
    let mut name: Option<String> = None;
    let mut expiry: Option<String> = None;
    let mut image: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Malformed(e.to_string()))?
    {
        // Copy the field name out; reading the field consumes it
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("name") => {
                name = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| UploadError::Malformed(e.to_string()))?,
                );
            }
            Some("expiry") => {
                expiry = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| UploadError::Malformed(e.to_string()))?,
                );
            }
            Some("image") => {
                let file_name = field.file_name().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| UploadError::Malformed(e.to_string()))?;
                // Browsers send an empty image part when no file was picked
                if let Some(file_name) = file_name {
                    if !file_name.is_empty() && !data.is_empty() {
                        image = Some((file_name, data.to_vec()));
                    }
                }
            }
            _ => {}
        }
    }

    let name = name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or(UploadError::MissingName)?;
    // Blank expiry from the form is stored as NULL
    let expiry = expiry.map(|e| e.trim().to_string()).filter(|e| !e.is_empty());

    let image_path = match &image {
        Some((original_name, data)) => {
            Some(store_image(&state.config.upload_dir(), original_name, data).await?)
        }
        None => None,
    };

    let new = NewCondiment {
        name: &name,
        expiry: expiry.as_deref(),
        image_path: image_path.as_deref(),
    };
    match insert_condiment(&state.db, &new).await {
        Ok(id) => {
            info!(id, name = %name, "Registered condiment");
            Ok(Redirect::to("/list"))
        }
        Err(e) => {
            // Remove the orphaned image so the upload directory only holds
            // files referenced by rows.
            if let Some(path) = &image_path {
                remove_stored_image(&state, path).await;
            }
            Err(UploadError::Database(e.to_string()))
        }
    }
}

/// Write the image under a generated unique filename and return its public
/// URL path. Filenames combine a timestamp with a random suffix, so
/// concurrent uploads cannot collide.
async fn store_image(
    upload_dir: &Path,
    original_name: &str,
    data: &[u8],
) -> Result<String, UploadError> {
    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| UploadError::Io(e.to_string()))?;

    let extension = Path::new(original_name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let suffix: u16 = rand::random();
    let filename = format!(
        "{}_{:04x}{}",
        Utc::now().format("%Y%m%d_%H%M%S"),
        suffix,
        extension
    );

    let file_path = upload_dir.join(&filename);
    tokio::fs::write(&file_path, data)
        .await
        .map_err(|e| UploadError::Io(e.to_string()))?;

    info!(file = %file_path.display(), bytes = data.len(), "Stored uploaded image");
    Ok(format!("/uploads/{}", filename))
}

async fn remove_stored_image(state: &AppState, image_path: &str) {
    let Some(filename) = image_path.strip_prefix("/uploads/") else {
        return;
    };
    let file_path = state.config.upload_dir().join(filename);
    if let Err(e) = tokio::fs::remove_file(&file_path).await {
        warn!(file = %file_path.display(), "Failed to remove orphaned image: {}", e);
    }
}

/// Upload errors
#[derive(Debug)]
pub enum UploadError {
    MissingName,
    Malformed(String),
    Io(String),
    Database(String),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            UploadError::MissingName => (
                StatusCode::BAD_REQUEST,
                "Condiment name is required".to_string(),
            ),
            UploadError::Malformed(msg) => {
                (StatusCode::BAD_REQUEST, format!("Malformed form data: {}", msg))
            }
            UploadError::Io(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to store image: {}", msg),
            ),
            UploadError::Database(msg) => (
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

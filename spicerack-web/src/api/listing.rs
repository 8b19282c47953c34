//! Annotated condiment listing

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use spicerack_common::db;
use spicerack_common::expiry::evaluate_expiry;

use crate::AppState;

/// One condiment with derived expiry flags
#[derive(Debug, Serialize)]
pub struct CondimentView {
    pub id: i64,
    pub name: String,
    pub expiry: Option<String>,
    pub image_path: Option<String>,
    pub created_at: String,
    /// Date part of `created_at`, for display
    pub registered_date: String,
    pub is_expired: bool,
    pub near_expiry: bool,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub condiments: Vec<CondimentView>,
}

/// GET /api/list
///
/// All condiments, most recently registered first, annotated with expiry
/// status computed against today's date.
pub async fn list_condiments(
    State(state): State<AppState>,
) -> Result<Json<ListResponse>, ListError> {
    let rows = db::list_condiments(&state.db)
        .await
        .map_err(|e| ListError::Database(e.to_string()))?;

    let today = Utc::now().date_naive();
    let threshold = state.config.expiry_threshold_days;

    let condiments = rows
        .into_iter()
        .map(|row| {
            let status = evaluate_expiry(row.expiry.as_deref(), today, threshold);
            let registered_date = row
                .created_at
                .split(' ')
                .next()
                .unwrap_or_default()
                .to_string();
            CondimentView {
                id: row.id,
                name: row.name,
                expiry: row.expiry,
                image_path: row.image_path,
                created_at: row.created_at,
                registered_date,
                is_expired: status.is_expired,
                near_expiry: status.near_expiry,
            }
        })
        .collect();

    Ok(Json(ListResponse { condiments }))
}

/// Listing errors
#[derive(Debug)]
pub enum ListError {
    Database(String),
}

impl IntoResponse for ListError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ListError::Database(msg) => (
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

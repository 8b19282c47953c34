//! Recipe search over near-expiry condiments
//!
//! Selects condiments expiring within the threshold window, derives one
//! cleaned search term per distinct ingredient, queries the recipe API per
//! term and merges the results. Outbound failures degrade to an empty
//! result set; they are logged, never surfaced as errors.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use spicerack_common::db;
use spicerack_common::query::derive_queries;

use crate::AppState;

/// One recipe result, tagged with the ingredient that found it
#[derive(Debug, Serialize)]
pub struct TaggedRecipe {
    pub title: String,
    pub url: String,
    pub image: String,
    pub used_ingredient: String,
}

#[derive(Debug, Serialize)]
pub struct RecipesResponse {
    /// Comma-joined raw names of the selected condiments, or a message when
    /// nothing is near expiry / nothing was found
    pub query: String,
    pub recipes: Vec<TaggedRecipe>,
}

/// GET /api/recipes
pub async fn recipe_search(
    State(state): State<AppState>,
) -> Result<Json<RecipesResponse>, RecipeSearchError> {
    let today = Utc::now().date_naive();
    let threshold = state.config.expiry_threshold_days;

    let names = db::near_expiry_names(&state.db, today, threshold)
        .await
        .map_err(|e| RecipeSearchError::Database(e.to_string()))?;

    let queries = derive_queries(&names, &state.config.noise_keywords);

    let mut recipes = Vec::new();
    for ingredient in &queries {
        match state.recipes.search(ingredient).await {
            Ok(found) => {
                recipes.extend(found.into_iter().map(|recipe| TaggedRecipe {
                    title: recipe.title,
                    url: recipe.url,
                    image: recipe.image,
                    used_ingredient: ingredient.clone(),
                }));
            }
            Err(e) => {
                warn!(ingredient = %ingredient, "Recipe search failed, skipping ingredient: {}", e);
            }
        }
    }

    if recipes.is_empty() {
        return Ok(Json(RecipesResponse {
            query: format!(
                "No condiments expiring within {} days, or no recipes were found.",
                threshold
            ),
            recipes: Vec::new(),
        }));
    }

    Ok(Json(RecipesResponse {
        query: names.join(", "),
        recipes,
    }))
}

/// Recipe search errors (only storage failures surface; API failures are
/// swallowed above)
#[derive(Debug)]
pub enum RecipeSearchError {
    Database(String),
}

impl IntoResponse for RecipeSearchError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RecipeSearchError::Database(msg) => (
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

//! Recipe search API client
//!
//! Queries the Google Custom Search JSON API for recipes using one
//! ingredient per call. Bounded timeout, no retries; callers treat any
//! error as "no recipes for this ingredient".

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use spicerack_common::config::AppConfig;

const USER_AGENT: &str = concat!("spicerack/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Results requested per query
const RESULTS_PER_QUERY: &str = "5";
/// Image extraction from search results is skipped; every recipe points at
/// the bundled placeholder.
const PLACEHOLDER_IMAGE: &str = "/static/recipe.png";

/// Recipe client errors
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Recipe API credentials not configured")]
    MissingCredentials,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// A normalized recipe search result
#[derive(Debug, Clone)]
pub struct Recipe {
    pub title: String,
    pub url: String,
    pub image: String,
}

/// Google Custom Search response (only the fields we read)
#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Option<Vec<SearchItem>>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    title: Option<String>,
    link: Option<String>,
}

impl From<SearchItem> for Recipe {
    fn from(item: SearchItem) -> Self {
        Self {
            title: item.title.unwrap_or_else(|| "Untitled".to_string()),
            url: item.link.unwrap_or_else(|| "#".to_string()),
            image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

/// Recipe search API client
#[derive(Clone)]
pub struct RecipeClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    cse_id: Option<String>,
}

impl RecipeClient {
    pub fn new(config: &AppConfig) -> Result<Self, RecipeError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RecipeError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: config.recipe_endpoint.clone(),
            api_key: config.google_api_key.clone(),
            cse_id: config.google_cse_id.clone(),
        })
    }

    /// Search recipes for one ingredient
    ///
    /// Returns an empty list when the provider has no `items` field for the
    /// query. Missing credentials fail before any network traffic.
    pub async fn search(&self, ingredient: &str) -> Result<Vec<Recipe>, RecipeError> {
        let (Some(api_key), Some(cse_id)) = (&self.api_key, &self.cse_id) else {
            return Err(RecipeError::MissingCredentials);
        };

        let query = format!("{} recipe", ingredient);
        tracing::debug!(ingredient = %ingredient, "Querying recipe API");

        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&[
                ("key", api_key.as_str()),
                ("cx", cse_id.as_str()),
                ("q", query.as_str()),
                ("num", RESULTS_PER_QUERY),
            ])
            .send()
            .await
            .map_err(|e| RecipeError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let truncated = error_text.chars().take(200).collect::<String>();
            return Err(RecipeError::Api(status.as_u16(), truncated));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| RecipeError::Parse(e.to_string()))?;

        let recipes: Vec<Recipe> = body
            .items
            .unwrap_or_default()
            .into_iter()
            .map(Recipe::from)
            .collect();

        tracing::info!(
            ingredient = %ingredient,
            results = recipes.len(),
            "Recipe lookup complete"
        );

        Ok(recipes)
    }
}

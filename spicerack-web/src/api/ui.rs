//! UI serving routes
//!
//! Serves the embedded HTML pages; data is fetched by inline scripts from
//! the JSON endpoints.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../ui/index.html");
const LIST_HTML: &str = include_str!("../ui/list.html");
const RECIPES_HTML: &str = include_str!("../ui/recipes.html");
const RECIPE_PLACEHOLDER_PNG: &[u8] = include_bytes!("../ui/recipe.png");

/// GET /
///
/// Serves the condiment registration form
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /list
///
/// Serves the condiment listing page
pub async fn serve_list() -> Html<&'static str> {
    Html(LIST_HTML)
}

/// GET /recipes
///
/// Serves the recipe search page
pub async fn serve_recipes() -> Html<&'static str> {
    Html(RECIPES_HTML)
}

/// GET /static/recipe.png
///
/// Placeholder image referenced by recipe results
pub async fn serve_recipe_placeholder() -> Response {
    (
        StatusCode::OK,
        [("content-type", "image/png")],
        RECIPE_PLACEHOLDER_PNG,
    )
        .into_response()
}

//! HTTP API handlers for spicerack-web

pub mod delete;
pub mod health;
pub mod listing;
pub mod recipes;
pub mod ui;
pub mod upload;

pub use delete::delete_condiment;
pub use health::health_routes;
pub use listing::list_condiments;
pub use recipes::recipe_search;
pub use ui::{serve_index, serve_list, serve_recipe_placeholder, serve_recipes};
pub use upload::upload_condiment;

//! Outbound service clients

pub mod recipe_client;

pub use recipe_client::{Recipe, RecipeClient, RecipeError};

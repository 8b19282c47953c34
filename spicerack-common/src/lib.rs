//! # Spicerack Common Library
//!
//! Shared code for the spicerack condiment tracker:
//! - Database schema, model and queries
//! - Configuration resolution
//! - Expiry status evaluation
//! - Recipe query derivation

pub mod config;
pub mod db;
pub mod error;
pub mod expiry;
pub mod query;

pub use error::{Error, Result};

//! Database schema, model and queries

pub mod condiments;
pub mod init;

pub use condiments::*;
pub use init::*;

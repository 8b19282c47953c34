//! Common error types for spicerack

use thiserror::Error;

/// Common result type for spicerack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the library and the web service.
///
/// HTTP handlers translate these into their own response-shaped error
/// enums; only the failures the library itself produces live here.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = Error::Config("expiry threshold must be non-negative".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: expiry threshold must be non-negative"
        );
    }

    #[test]
    fn test_io_error_wraps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = Error::from(io);
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().starts_with("IO error:"));
    }

    #[test]
    fn test_database_error_wraps_source() {
        let error = Error::from(sqlx::Error::RowNotFound);
        assert!(matches!(error, Error::Database(_)));
        assert!(error.to_string().starts_with("Database error:"));
    }
}

//! Error types for Folio.

use thiserror::Error;

/// The main error type for Folio operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Generic error with custom message.
    #[error("{0}")]
    Generic(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A value failed validation.
    #[error("Invalid {field}: {message}")]
    Validation {
        /// Name of the offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error wrapped with additional context.
    #[error("{message}")]
    Context {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Create a new generic error.
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic(msg.into())
    }

    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error for a named field.
    pub fn validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: msg.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias using Folio's Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = Error::validation("max_rows_per_page", "must be greater than 0");
        assert_eq!(
            err.to_string(),
            "Invalid max_rows_per_page: must be greater than 0"
        );
    }

    #[test]
    fn test_io_conversion() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}

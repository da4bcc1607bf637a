//! CLI error handling.

use std::io;
use std::path::PathBuf;

use folio_common_config::{ConfigError, EnvError};
use thiserror::Error;

use crate::Exit;

/// CLI error type with exit-code mapping
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        hint: Option<String>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
        path: Option<PathBuf>,
    },

    #[error("{message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> Exit {
        match self {
            Self::Config { .. } => Exit::ConfigError,
            Self::Io { .. } => Exit::IoError,
            Self::Validation { .. } => Exit::ValidationError,
            Self::Other(_) => Exit::GeneralError,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
            hint: None,
        }
    }

    /// Create a config error with hint
    pub fn config_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
            hint: Some(hint.into()),
        }
    }

    /// Create a validation error for a named argument
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
            path: None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        let hint = match &err {
            ConfigError::NotFound { .. } => Some("run `folio config init` to create one".to_string()),
            ConfigError::EnvVarNotFound { var } => {
                Some(format!("set {var} or use ${{{var}:-default}} in the config file"))
            }
            _ => None,
        };
        Self::Config {
            message: err.to_string(),
            source: Some(Box::new(err)),
            hint,
        }
    }
}

impl From<EnvError> for CliError {
    fn from(err: EnvError) -> Self {
        Self::Config {
            message: err.to_string(),
            source: Some(Box::new(err)),
            hint: None,
        }
    }
}

impl From<folio_common_core::Error> for CliError {
    fn from(err: folio_common_core::Error) -> Self {
        use folio_common_core::Error;

        match err {
            Error::Config(message) => Self::config(message),
            Error::Validation { field, message } => Self::Validation {
                message: format!("invalid {field}: {message}"),
                field: Some(field),
            },
            Error::Io(source) => source.into(),
            Error::Context { message, source } => match source.downcast::<io::Error>() {
                Ok(source) => Self::Io {
                    message: format!("{message}: {source}"),
                    source: *source,
                    path: None,
                },
                Err(source) => Self::Other(anyhow::anyhow!("{message}: {source}")),
            },
            other => Self::Other(other.into()),
        }
    }
}

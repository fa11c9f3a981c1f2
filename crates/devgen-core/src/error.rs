//! Centralized error types for devgen.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for devgen operations.
#[derive(Error, Debug)]
pub enum DevgenError {
    #[error("Missing required flag: --{0}")]
    MissingRequiredFlag(String),

    #[error("Invalid value for --{flag}: '{value}' ({reason})")]
    InvalidToken {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create file {}: {source}", .path.display())]
    FileCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template load error: {0}")]
    TemplateLoad(String),

    #[error("Failed to render template '{name}': {source}")]
    TemplateRender {
        name: String,
        #[source]
        source: tera::Error,
    },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for devgen operations.
pub type DevgenResult<T> = Result<T, DevgenError>;

impl DevgenError {
    /// Create a missing required flag error.
    pub fn missing_flag(flag: impl Into<String>) -> Self {
        Self::MissingRequiredFlag(flag.into())
    }

    /// Create an invalid token error.
    pub fn invalid_token(
        flag: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidToken {
            flag: flag.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Whether this is a file creation failure caused by an existing file.
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            Self::FileCreation { source, .. } if source.kind() == std::io::ErrorKind::AlreadyExists
        )
    }
}

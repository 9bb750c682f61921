use std::io;

use thiserror::Error;

use super::request::ResolveError;

/// Library-wide error type for rpidsm operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file could not be found at an explicitly requested path.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// Request resolution failed validation or could not read its template.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Screen catalog document could not be read or parsed.
    #[error("Failed to load screen catalog from {source_name}: {reason}")]
    CatalogLoad { source_name: String, reason: String },

    /// Screen catalog entry violates a catalog invariant.
    #[error("Invalid screen catalog entry '{screen}': {reason}")]
    InvalidScreen { screen: String, reason: String },

    /// Human-readable summary rendering failed.
    #[error("Failed to render summary: {0}")]
    Render(String),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Resolve(ResolveError::UnknownScreenId(_)) | AppError::ConfigMissing(_) => {
                io::ErrorKind::NotFound
            }
            AppError::Resolve(ResolveError::TemplateUnavailable { .. }) => io::ErrorKind::Other,
            AppError::Resolve(_)
            | AppError::Configuration(_)
            | AppError::CatalogLoad { .. }
            | AppError::InvalidScreen { .. }
            | AppError::TomlParseError(_)
            | AppError::Json(_) => io::ErrorKind::InvalidInput,
            AppError::Render(_) | AppError::Prompt(_) => io::ErrorKind::Other,
        }
    }
}

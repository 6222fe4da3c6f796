//! Error types for configuration validation and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors (for CLI use)
    #[error("entry path not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    // Config parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error("config file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("unsupported {0}")]
    UnsupportedFormat(String),

    #[error("missing required field '{field}'")]
    MissingField { field: String, hint: String },

    #[error("invalid value for '{field}'{}", suffix(.hint))]
    InvalidValue { field: String, hint: Option<String> },

    #[error("failed to parse {source_kind}: {message}")]
    Parse {
        source_kind: &'static str,
        message: String,
    },

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn suffix(hint: &Option<String>) -> String {
    hint.as_deref().map(|h| format!(": {h}")).unwrap_or_default()
}

impl ConfigError {
    /// Actionable follow-up for the user, when one exists.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::MissingField { hint, .. } => Some(hint.as_str()),
            Self::InvalidValue { hint, .. } | Self::SchemaValidation { hint, .. } => {
                hint.as_deref()
            }
            Self::NotFound => {
                Some("Create skein.toml, skein.config.json, or add a 'skein' field to package.json")
            }
            _ => None,
        }
    }
}

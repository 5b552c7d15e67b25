//! Error types for Volley

use thiserror::Error;

/// The main error type for Volley operations
#[derive(Debug, Error)]
pub enum VolleyError {
    #[error("State catalog is empty")]
    EmptyStateCatalog,

    #[error("Duplicate state in catalog: {0}")]
    DuplicateState(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

/// Result type alias for Volley operations
pub type Result<T> = std::result::Result<T, VolleyError>;

impl From<toml::de::Error> for VolleyError {
    fn from(err: toml::de::Error) -> Self {
        VolleyError::TomlParseError(err.to_string())
    }
}

//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chat session error
    #[error(transparent)]
    Session(#[from] loresmith_extractor::SessionError),

    /// Generation service error
    #[error(transparent)]
    Generation(#[from] loresmith_llm::GenerationError),

    /// Storage error
    #[error("Storage error: {0}")]
    Store(#[from] loresmith_store::StoreError),

    /// Export layout error
    #[error("Export error: {0}")]
    Export(#[from] loresmith_domain::ExportError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation not permitted
    #[error("Operation not permitted: {0}")]
    NotPermitted(String),

    /// No stored character with that id
    #[error("Character not found: {0}")]
    NotFound(String),
}

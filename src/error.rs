//! Error types for levython-highlight

use thiserror::Error;

/// Result type alias for highlighting operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighter error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Cannot update element: {0}")]
    Element(String),
}

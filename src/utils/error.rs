use thiserror::Error;

/// Failures outside the validators themselves. Untrusted input never ends up
/// here; it produces a failing `ValidationResult` instead.
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

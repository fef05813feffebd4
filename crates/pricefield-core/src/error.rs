//! Error types for pricefield
//!
//! Normalizing and formatting never fail; empty output means "no value".
//! Only the surrounding plumbing (configuration, I/O) returns `Result<T, Error>`.

use thiserror::Error;

/// Pricefield error types
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration document could not be decoded
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration decoded but holds an unusable value
    #[error("Invalid config: {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    /// Reading configuration or input failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pricefield operations
pub type Result<T> = std::result::Result<T, Error>;

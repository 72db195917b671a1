use thiserror::Error;

/// Errors raised at the boundaries of the shared recipe contract.
///
/// The normalization helpers never return these; they fall back to
/// sentinel values instead.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Recipe document could not be (de)serialized
    #[error("Invalid recipe JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Timestamp string is not a recognised ISO-8601 instant
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

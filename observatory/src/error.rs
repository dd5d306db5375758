//! Error types for angle construction, parsing and configuration.

use std::num::ParseFloatError;

/// Result type for angle operations
pub type AngleResult<T> = Result<T, AngleError>;

/// Error type for angle operations
#[derive(Debug, thiserror::Error)]
pub enum AngleError {
    #[error("Non-finite angle input: {value}")]
    NonFinite { value: f64 },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseFloatError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AngleError {
    /// Returns `Ok(value)` when `value` is finite, `NonFinite` otherwise.
    pub fn check_finite(value: f64) -> AngleResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(AngleError::NonFinite { value })
        }
    }
}

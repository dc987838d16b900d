//! Error types for KavachField

use thiserror::Error;

/// KavachField error type
#[derive(Error, Debug)]
pub enum FieldError {
    /// Malformed obstacle registration input.
    #[error("Invalid obstacle: {0}")]
    InvalidObstacle(String),

    /// Query position contains a non-finite component.
    #[error("Invalid query position: {0}")]
    InvalidQuery(String),

    /// Direction vector too short to normalize.
    #[error("Degenerate direction: norm {norm:.3e} below epsilon {epsilon:.3e}")]
    DegenerateDirection {
        /// Norm of the rejected direction vector
        norm: f64,
        /// Configured minimum norm
        epsilon: f64,
    },

    /// Configuration loading or validation failure.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for FieldError {
    fn from(e: toml::de::Error) -> Self {
        FieldError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FieldError>;

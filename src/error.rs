//! Error types for the scoring crate.
//!
//! The engine itself never fails: plays delivered to complete nodes are
//! ignored. Errors only come from converting untyped input and from
//! validating game configurations.

use thiserror::Error;

/// Main error type for the scoring crate.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoringError {
    #[error("invalid side {side} (expected 0 or 1)")]
    InvalidSide { side: u8 },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ScoringError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's error type.
pub type Result<T> = std::result::Result<T, ScoringError>;

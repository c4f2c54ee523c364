//! Error types for the analytics engine.
//!
//! The pure numeric functions in this crate never fail; every degenerate
//! input degrades to a defined zero/`None` output. The only fallible
//! surface is the raw-row conveniences that construct core types first.

use aidstat_core::CoreError;
use thiserror::Error;

/// Error type for analytics operations.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Invalid input parameter
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Core type construction failed
    #[error("core error: {0}")]
    CoreError(String),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl From<CoreError> for AnalyticsError {
    fn from(err: CoreError) -> Self {
        AnalyticsError::CoreError(err.to_string())
    }
}

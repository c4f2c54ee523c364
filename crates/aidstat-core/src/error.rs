//! Error types for core data construction.
//!
//! The analytics engines downstream are deliberately no-throw; the only
//! fallible operations in the library are construction-time checks on the
//! core value types, collected here.

use thiserror::Error;

/// Error type for core type construction.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Parallel series arrays have different lengths
    #[error("series length mismatch: {values} values vs {years} years")]
    SeriesLengthMismatch {
        /// Number of value entries provided.
        values: usize,
        /// Number of year entries provided.
        years: usize,
    },

    /// Invalid input parameter
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

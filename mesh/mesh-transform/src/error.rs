//! Error types for mesh transformation operations.

use thiserror::Error;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors that can occur when building a transform.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Matrix contains NaN or infinite entries.
    #[error("matrix has non-finite entries")]
    NonFinite,

    /// Bottom row is not `[0, 0, 0, 1]`.
    #[error("matrix is not affine: bottom row is {row:?}")]
    NotAffine {
        /// The offending bottom row.
        row: [f64; 4],
    },

    /// Matrix is not invertible.
    #[error("matrix is not invertible (determinant {determinant})")]
    NotInvertible {
        /// Determinant of the linear part.
        determinant: f64,
    },
}

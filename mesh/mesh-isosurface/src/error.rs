//! Error types for iso-surface extraction.

use thiserror::Error;

/// Errors that can occur during extraction.
#[derive(Debug, Error)]
pub enum IsosurfaceError {
    /// The iso level is NaN or infinite.
    #[error("iso level must be finite, got {0}")]
    NonFiniteLevel(f64),

    /// The surface needs more vertices than `u32` face indices can address.
    #[error("surface exceeds {limit} vertices")]
    TooManyVertices {
        /// Largest addressable vertex count.
        limit: usize,
    },
}

/// Result type for extraction.
pub type IsosurfaceResult<T> = Result<T, IsosurfaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IsosurfaceError::NonFiniteLevel(f64::NAN);
        assert!(err.to_string().contains("NaN"));

        let err = IsosurfaceError::TooManyVertices { limit: 10 };
        assert_eq!(err.to_string(), "surface exceeds 10 vertices");
    }
}

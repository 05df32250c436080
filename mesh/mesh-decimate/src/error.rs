//! Error types for mesh decimation operations.

use thiserror::Error;

/// Errors that can occur during decimation operations.
#[derive(Debug, Error)]
pub enum DecimateError {
    /// Target ratio outside `[0.0, 1.0]`.
    #[error("Invalid target ratio: {0} (must be between 0.0 and 1.0)")]
    InvalidRatio(f64),

    /// Feature angle outside `[0, pi]` radians.
    #[error("Invalid feature angle: {0} rad (must be between 0 and pi)")]
    InvalidFeatureAngle(f64),

    /// Negative or non-finite error bound.
    #[error("Invalid maximum error: {0} (must be finite and non-negative)")]
    InvalidMaxError(f64),

    /// A face references a vertex that does not exist.
    #[error("Face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    InvalidIndex {
        /// Offending face.
        face: usize,
        /// Out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}

/// Result type for decimation operations.
pub type DecimateResult<T> = std::result::Result<T, DecimateError>;

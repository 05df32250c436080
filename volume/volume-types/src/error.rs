//! Error types for image construction and access.

use crate::VoxelIndex;

/// Result type for image operations.
pub type ImageResult<T> = Result<T, ImageError>;

/// Errors that can occur when building or accessing an image.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ImageError {
    /// Buffer length does not match the extent.
    #[error("buffer holds {actual} voxels but the extent needs {expected}")]
    BufferLengthMismatch {
        /// Voxel count implied by the extent.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// An index lies outside the extent.
    #[error("voxel index {index:?} is outside the image extent")]
    OutOfBounds {
        /// The rejected index.
        index: VoxelIndex,
    },

    /// An extent would leave the `i32` index range.
    #[error("index extent overflows the i32 index range")]
    IndexOverflow,

    /// The image-to-world matrix has non-finite entries.
    #[error("image-to-world matrix has non-finite entries")]
    NonFiniteGeometry,

    /// The image-to-world matrix is not affine.
    #[error("image-to-world matrix is not affine")]
    NotAffine,

    /// The image-to-world matrix cannot be inverted.
    #[error("image-to-world matrix is singular (determinant {determinant})")]
    SingularGeometry {
        /// Determinant of the linear part.
        determinant: f64,
    },
}

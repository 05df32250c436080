//! Error types for representation conversion.

use thiserror::Error;
use volume_types::{ImageError, ScalarType};

use crate::RepresentationKind;

/// Errors that can occur while converting between representations.
///
/// A failed conversion leaves the target representation unusable for the
/// caller's purposes; whether to retry with other parameters is the
/// caller's decision.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source voxels use an encoding the rule cannot read.
    #[error("Unsupported voxel scalar type: {0}")]
    UnsupportedScalarType(ScalarType),

    /// Iso-surface extraction failed or produced nothing.
    #[error("Surface extraction failed: {reason}")]
    Extraction {
        /// What went wrong.
        reason: String,
    },

    /// Mesh simplification failed.
    #[error("Decimation failed: {reason}")]
    Decimation {
        /// What went wrong.
        reason: String,
    },

    /// Applying the image-to-world transform failed.
    #[error("World transform failed: {reason}")]
    Frame {
        /// What went wrong.
        reason: String,
    },

    /// Source or target is not the representation the rule works on.
    #[error("Representation type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Kind the rule requires.
        expected: RepresentationKind,
        /// Kind that was supplied.
        found: RepresentationKind,
    },

    /// A conversion parameter could not be used.
    #[error("Invalid value {value:?} for conversion parameter {name:?}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Rejected value string.
        value: String,
    },

    /// Voxel access or geometry error.
    #[error("Image error: {0}")]
    Image(#[from] ImageError),
}

/// Result type for conversions.
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConvertError::UnsupportedScalarType(ScalarType::F32);
        assert_eq!(err.to_string(), "Unsupported voxel scalar type: f32");

        let err = ConvertError::Extraction {
            reason: "No polygons can be created".to_string(),
        };
        assert!(err.to_string().contains("No polygons"));

        let err = ConvertError::InvalidParameter {
            name: "Decimation factor".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value \"abc\" for conversion parameter \"Decimation factor\""
        );
    }

    #[test]
    fn image_errors_convert() {
        let err: ConvertError = ImageError::NotAffine.into();
        assert!(matches!(err, ConvertError::Image(ImageError::NotAffine)));
    }
}

//! Parameters for mesh decimation.

// Triangle counts stay far below 2^52
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::f64::consts::{FRAC_PI_3, PI};

use crate::error::{DecimateError, DecimateResult};

/// Slack applied before rounding the ratio target up, so `1.0 - 0.7` keeps
/// 3 of 10 triangles rather than 4.
const RATIO_SLACK: f64 = 1e-9;

/// Parameters for mesh decimation.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimateParams {
    /// Target number of triangles. If None, uses `target_ratio` instead.
    pub target_triangles: Option<usize>,

    /// Fraction of triangles to keep (0.0 to 1.0). Default: 0.5
    pub target_ratio: f64,

    /// Refuse collapses that change the genus, pinch the surface or create
    /// non-manifold edges. Default: true
    pub preserve_topology: bool,

    /// Never move vertices on open boundaries. Default: true
    pub preserve_boundary: bool,

    /// Never move vertices on feature edges. Default: false
    pub preserve_sharp_features: bool,

    /// Dihedral angle in radians above which an edge is a feature edge.
    /// Default: pi/3 (60 degrees)
    pub feature_angle: f64,

    /// Bound on the collapse error, as a fraction of the bounding box
    /// diagonal. If None, no limit.
    pub max_error: Option<f64>,
}

impl Default for DecimateParams {
    fn default() -> Self {
        Self {
            target_triangles: None,
            target_ratio: 0.5,
            preserve_topology: true,
            preserve_boundary: true,
            preserve_sharp_features: false,
            feature_angle: FRAC_PI_3,
            max_error: None,
        }
    }
}

impl DecimateParams {
    /// Create params targeting a specific triangle count.
    #[must_use]
    pub fn with_target_triangles(count: usize) -> Self {
        Self {
            target_triangles: Some(count),
            ..Default::default()
        }
    }

    /// Create params targeting a ratio of original triangles.
    #[must_use]
    pub fn with_target_ratio(ratio: f64) -> Self {
        Self {
            target_ratio: ratio,
            ..Default::default()
        }
    }

    /// Topology-preserving simplification for extracted surfaces.
    ///
    /// Feature angle 60 degrees, feature and boundary vertices stay in
    /// place, and no collapse may move the surface by more than the whole
    /// bounding box diagonal.
    #[must_use]
    pub fn topology_preserving() -> Self {
        Self {
            preserve_topology: true,
            preserve_boundary: true,
            preserve_sharp_features: true,
            feature_angle: FRAC_PI_3,
            max_error: Some(1.0),
            ..Default::default()
        }
    }

    /// Set the fraction of triangles to remove; `0.9` keeps 10%.
    #[must_use]
    pub fn with_target_reduction(mut self, reduction: f64) -> Self {
        self.target_triangles = None;
        self.target_ratio = 1.0 - reduction;
        self
    }

    /// Set preserve topology option.
    #[must_use]
    pub const fn with_preserve_topology(mut self, preserve: bool) -> Self {
        self.preserve_topology = preserve;
        self
    }

    /// Set preserve boundary option.
    #[must_use]
    pub const fn with_preserve_boundary(mut self, preserve: bool) -> Self {
        self.preserve_boundary = preserve;
        self
    }

    /// Set preserve sharp features option.
    #[must_use]
    pub const fn with_preserve_sharp_features(mut self, preserve: bool) -> Self {
        self.preserve_sharp_features = preserve;
        self
    }

    /// Set the feature angle in radians.
    #[must_use]
    pub const fn with_feature_angle(mut self, radians: f64) -> Self {
        self.feature_angle = radians;
        self
    }

    /// Set maximum error threshold.
    #[must_use]
    pub const fn with_max_error(mut self, max_error: f64) -> Self {
        self.max_error = Some(max_error);
        self
    }

    /// Number of triangles to stop at for a mesh of `original` triangles.
    #[must_use]
    pub fn target_triangle_count(&self, original: usize) -> usize {
        self.target_triangles.unwrap_or_else(|| {
            let kept = (original as f64).mul_add(self.target_ratio, -RATIO_SLACK);
            kept.ceil().max(0.0) as usize
        })
    }

    /// Check that every setting is in range.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range setting.
    pub fn validate(&self) -> DecimateResult<()> {
        if !(0.0..=1.0).contains(&self.target_ratio) {
            return Err(DecimateError::InvalidRatio(self.target_ratio));
        }
        if !(0.0..=PI).contains(&self.feature_angle) {
            return Err(DecimateError::InvalidFeatureAngle(self.feature_angle));
        }
        match self.max_error {
            Some(max_error) if !(max_error.is_finite() && max_error >= 0.0) => {
                Err(DecimateError::InvalidMaxError(max_error))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = DecimateParams::default();
        assert!((params.target_ratio - 0.5).abs() < 0.001);
        assert!(params.preserve_topology);
        assert!(params.preserve_boundary);
        assert!(!params.preserve_sharp_features);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_target_triangles() {
        let params = DecimateParams::with_target_triangles(1000);
        assert_eq!(params.target_triangles, Some(1000));
        assert_eq!(params.target_triangle_count(5000), 1000);
    }

    #[test]
    fn test_target_reduction() {
        let params = DecimateParams::topology_preserving().with_target_reduction(0.9);
        assert!((params.target_ratio - 0.1).abs() < 1e-12);
        assert_eq!(params.target_triangle_count(100), 10);

        let params = DecimateParams::default().with_target_reduction(0.7);
        assert_eq!(params.target_triangle_count(10), 3);

        let params = DecimateParams::default().with_target_reduction(0.0);
        assert_eq!(params.target_triangle_count(24), 24);
    }

    #[test]
    fn test_target_rounds_up() {
        let params = DecimateParams::with_target_ratio(0.5);
        assert_eq!(params.target_triangle_count(25), 13);
        assert_eq!(params.target_triangle_count(0), 0);
    }

    #[test]
    fn test_topology_preserving() {
        let params = DecimateParams::topology_preserving();
        assert!(params.preserve_topology);
        assert!(params.preserve_sharp_features);
        assert!((params.feature_angle - FRAC_PI_3).abs() < 1e-12);
        assert_eq!(params.max_error, Some(1.0));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(matches!(
            DecimateParams::with_target_ratio(1.5).validate(),
            Err(DecimateError::InvalidRatio(_))
        ));
        assert!(matches!(
            DecimateParams::with_target_ratio(f64::NAN).validate(),
            Err(DecimateError::InvalidRatio(_))
        ));
        assert!(matches!(
            DecimateParams::default().with_feature_angle(4.0).validate(),
            Err(DecimateError::InvalidFeatureAngle(_))
        ));
        assert!(matches!(
            DecimateParams::default().with_max_error(-1.0).validate(),
            Err(DecimateError::InvalidMaxError(_))
        ));
    }

    #[test]
    fn test_builder() {
        let params = DecimateParams::default()
            .with_preserve_topology(false)
            .with_preserve_boundary(false)
            .with_preserve_sharp_features(true)
            .with_max_error(0.01);

        assert!(!params.preserve_topology);
        assert!(!params.preserve_boundary);
        assert!(params.preserve_sharp_features);
        assert_eq!(params.max_error, Some(0.01));
    }
}

//! The binary labelmap to closed surface rule.

use std::borrow::Cow;
use std::time::Duration;

use mesh_validate::validate_surface;
use segmentation_core::{
    ConversionParameters, ConversionRule, ConvertResult, Representation, RepresentationKind,
};
use tracing::{debug, error, info};
use volume_types::OrientedImage;

use crate::border::try_requires_padding;
use crate::config::{PaddingMode, SurfaceConversionConfig};
use crate::extract::extract_surface;
use crate::padding::pad_image;
use crate::result::SurfaceConversion;
use crate::stages::{decimate_surface, to_world};

/// Registry name of the rule.
pub const RULE_NAME: &str = "Binary labelmap to closed surface";

/// Input-independent time estimate for one conversion.
pub const CONVERSION_COST: Duration = Duration::from_millis(500);

/// Converts a binary labelmap into a closed surface in world coordinates.
///
/// The pipeline runs border scan, padding (if needed), extraction at level
/// 0.5 in index space, optional decimation, and finally the labelmap's
/// image-to-world transform.
///
/// # Example
///
/// ```
/// use labelmap_to_surface::LabelmapToClosedSurface;
/// use segmentation_core::{ConversionRule, Representation, RepresentationKind};
/// use volume_types::{IndexExtent, OrientedImage, ScalarType, VoxelIndex};
///
/// let extent = IndexExtent::new(VoxelIndex::new(0, 0, 0), VoxelIndex::new(2, 2, 2));
/// let mut image = OrientedImage::zeros(extent, ScalarType::U8);
/// image.set_value(VoxelIndex::new(0, 1, 1), 1.0).unwrap();
///
/// let rule = LabelmapToClosedSurface::new();
/// let source = Representation::from(image);
/// let mut target = Representation::empty(RepresentationKind::ClosedSurface);
///
/// rule.convert(&source, &mut target).unwrap();
/// assert!(!target.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct LabelmapToClosedSurface {
    parameters: ConversionParameters,
    padding: PaddingMode,
}

impl Default for LabelmapToClosedSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelmapToClosedSurface {
    /// Rule with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parameters: SurfaceConversionConfig::default_parameters(),
            padding: PaddingMode::Auto,
        }
    }

    /// Set the padding policy.
    #[must_use]
    pub const fn with_padding_mode(mut self, padding: PaddingMode) -> Self {
        self.padding = padding;
        self
    }

    /// Settings from the current parameters and padding policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidParameter`](segmentation_core::ConvertError::InvalidParameter)
    /// for an unusable decimation factor.
    pub fn config(&self) -> ConvertResult<SurfaceConversionConfig> {
        Ok(SurfaceConversionConfig::from_parameters(&self.parameters)?.with_padding(self.padding))
    }

    /// Convert a labelmap into a world-space surface.
    ///
    /// The padded copy, if one is made, lives only inside this call.
    ///
    /// # Errors
    ///
    /// Returns the error of the first stage that fails; each failure is
    /// logged with its stage name.
    pub fn convert_labelmap(&self, image: &OrientedImage) -> ConvertResult<SurfaceConversion> {
        let config = logged("parameters", self.config())?;
        let touches_border = logged("border scan", try_requires_padding(image))?;
        let padded = touches_border || config.padding == PaddingMode::Always;

        info!(
            dimensions = ?image.dimensions(),
            scalar_type = %image.scalar_type(),
            padded = padded,
            decimation_factor = config.decimation_factor,
            "Converting binary labelmap to closed surface"
        );

        let image_to_world = *image.image_to_world();
        let mut mesh = {
            let labelmap: Cow<'_, OrientedImage> = if padded {
                Cow::Owned(logged("padding", pad_image(image))?)
            } else {
                Cow::Borrowed(image)
            };
            logged("extraction", extract_surface(&labelmap))?
        };
        let extracted_triangles = mesh.faces.len();

        if config.decimates() {
            mesh = logged("decimation", decimate_surface(mesh, config.decimation_factor))?;
        }
        logged("world transform", to_world(&mut mesh, &image_to_world))?;

        let report = validate_surface(&mesh);
        debug!(report = %report, "Checked converted surface");

        let conversion = SurfaceConversion {
            final_triangles: mesh.faces.len(),
            mesh,
            padded,
            extracted_triangles,
        };
        info!(summary = %conversion, "Conversion complete");
        Ok(conversion)
    }
}

/// Log a failed stage before handing the error on.
fn logged<T>(stage: &'static str, result: ConvertResult<T>) -> ConvertResult<T> {
    result.inspect_err(|err| error!(stage = stage, error = %err, "Conversion stage failed"))
}

impl ConversionRule for LabelmapToClosedSurface {
    fn name(&self) -> &'static str {
        RULE_NAME
    }

    fn source_representation(&self) -> RepresentationKind {
        RepresentationKind::BinaryLabelmap
    }

    fn target_representation(&self) -> RepresentationKind {
        RepresentationKind::ClosedSurface
    }

    fn conversion_cost(
        &self,
        _source: Option<&Representation>,
        _target: Option<&Representation>,
    ) -> Duration {
        CONVERSION_COST
    }

    fn parameters(&self) -> &ConversionParameters {
        &self.parameters
    }

    fn parameters_mut(&mut self) -> &mut ConversionParameters {
        &mut self.parameters
    }

    fn convert(&self, source: &Representation, target: &mut Representation) -> ConvertResult<()> {
        let image = logged("source check", source.require_labelmap())?;
        let mesh = logged("target check", target.require_surface_mut())?;
        *mesh = self.convert_labelmap(image)?.mesh;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DECIMATION_FACTOR_PARAMETER;
    use mesh_types::unit_cube;
    use segmentation_core::ConvertError;
    use volume_types::{IndexExtent, ScalarType, VoxelIndex};

    fn labelmap(n: i32, voxels: &[[i32; 3]]) -> OrientedImage {
        let extent = IndexExtent::new(VoxelIndex::new(0, 0, 0), VoxelIndex::new(n - 1, n - 1, n - 1));
        let mut image = OrientedImage::zeros(extent, ScalarType::U8);
        for &index in voxels {
            image.set_value(VoxelIndex::from(index), 1.0).unwrap();
        }
        image
    }

    #[test]
    fn metadata() {
        let rule = LabelmapToClosedSurface::new();
        assert_eq!(rule.name(), "Binary labelmap to closed surface");
        assert_eq!(rule.source_representation(), RepresentationKind::BinaryLabelmap);
        assert_eq!(rule.target_representation(), RepresentationKind::ClosedSurface);
        assert_eq!(rule.conversion_cost(None, None), Duration::from_millis(500));

        let source = Representation::from(labelmap(2, &[]));
        assert_eq!(
            rule.conversion_cost(Some(&source), None),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn publishes_decimation_parameter() {
        let rule = LabelmapToClosedSurface::new();
        assert_eq!(rule.parameters().value(DECIMATION_FACTOR_PARAMETER), Some("0.0"));
        assert_eq!(rule.parameters().len(), 1);
    }

    #[test]
    fn constructs_own_representations() {
        let rule = LabelmapToClosedSurface::new();
        for kind in RepresentationKind::ALL {
            let by_name = rule.construct_representation_by_name(kind.name());
            assert_eq!(by_name.map(|r| r.kind()), Some(kind));
            let by_class = rule.construct_representation_by_class(kind.class_name());
            assert_eq!(by_class.map(|r| r.kind()), Some(kind));
        }
        assert!(rule.construct_representation_by_name("Fractional labelmap").is_none());
        assert!(rule.construct_representation_by_class("vtkPolyData").is_none());
    }

    #[test]
    fn convert_replaces_target() {
        let rule = LabelmapToClosedSurface::new();
        let source = Representation::from(labelmap(3, &[[1, 1, 1]]));
        let mut target = Representation::from(unit_cube());

        rule.convert(&source, &mut target).unwrap();
        let mesh = target.as_surface().unwrap();
        assert_eq!(mesh.faces.len(), 24);
    }

    #[test]
    fn swapped_representations_are_rejected() {
        let rule = LabelmapToClosedSurface::new();
        let surface = Representation::from(unit_cube());
        let mut image = Representation::from(labelmap(3, &[[1, 1, 1]]));

        let err = rule.convert(&surface, &mut image).unwrap_err();
        assert!(matches!(err, ConvertError::TypeMismatch { .. }));

        let source = image.clone();
        let mut target = image;
        let err = rule.convert(&source, &mut target).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::TypeMismatch {
                expected: RepresentationKind::ClosedSurface,
                ..
            }
        ));
        assert_eq!(target, source);
    }

    #[test]
    fn invalid_parameter_fails_before_extraction() {
        let mut rule = LabelmapToClosedSurface::new();
        rule.parameters_mut()
            .set_value(DECIMATION_FACTOR_PARAMETER, "lots");
        let err = rule.convert_labelmap(&labelmap(3, &[[1, 1, 1]])).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidParameter { .. }));
    }

    #[test]
    fn border_foreground_is_padded() {
        let rule = LabelmapToClosedSurface::new();
        let conversion = rule.convert_labelmap(&labelmap(2, &[[0, 0, 0]])).unwrap();
        assert!(conversion.padded);
        assert!(validate_surface(&conversion.mesh).is_closed());
    }
}

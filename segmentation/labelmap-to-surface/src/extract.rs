//! Surface extraction in voxel index space.

// Image dimensions stay far below 2^52
#![allow(clippy::cast_precision_loss)]

use mesh_isosurface::{IsosurfaceConfig, ScalarField, extract_isosurface};
use mesh_types::{IndexedMesh, Point3};
use segmentation_core::{ConvertError, ConvertResult};
use tracing::debug;
use volume_types::OrientedImage;

/// Iso level between background 0 and the smallest foreground label 1.
pub const LABELMAP_ISO_LEVEL: f64 = 0.5;

/// An image read as a scalar field whose positions are voxel indices.
///
/// The image-to-world matrix is ignored, so the surface comes out in index
/// space and only the final frame step places it in the world.
struct IndexSpaceField<'a> {
    image: &'a OrientedImage,
    dimensions: [usize; 3],
    origin: Point3<f64>,
}

impl<'a> IndexSpaceField<'a> {
    fn new(image: &'a OrientedImage) -> Self {
        let [i, j, k] = image.extent().min.to_array();
        Self {
            image,
            dimensions: image.dimensions(),
            origin: Point3::new(f64::from(i), f64::from(j), f64::from(k)),
        }
    }
}

impl ScalarField for IndexSpaceField<'_> {
    fn dimensions(&self) -> [usize; 3] {
        self.dimensions
    }

    fn value(&self, x: usize, y: usize, z: usize) -> f64 {
        let [nx, ny, _] = self.dimensions;
        self.image
            .buffer()
            .value(x + nx * (y + ny * z))
            .unwrap_or(0.0)
    }

    fn position(&self, x: usize, y: usize, z: usize) -> Point3<f64> {
        Point3::new(
            self.origin.x + x as f64,
            self.origin.y + y as f64,
            self.origin.z + z as f64,
        )
    }
}

/// Extract the 0.5 iso-surface of a labelmap in index coordinates.
///
/// A vertex at index-space position `(i, j, k)` maps to the world through
/// the image's image-to-world matrix.
///
/// # Errors
///
/// Returns [`ConvertError::Extraction`] if extraction fails or produces no
/// faces.
pub fn extract_surface(image: &OrientedImage) -> ConvertResult<IndexedMesh> {
    let config = IsosurfaceConfig::default().with_iso_level(LABELMAP_ISO_LEVEL);
    let mesh = extract_isosurface(&IndexSpaceField::new(image), &config).map_err(|err| {
        ConvertError::Extraction {
            reason: err.to_string(),
        }
    })?;

    if mesh.faces.is_empty() {
        return Err(ConvertError::Extraction {
            reason: "No polygons can be created".to_string(),
        });
    }

    debug!(
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "Extracted labelmap surface in index space"
    );
    Ok(mesh)
}

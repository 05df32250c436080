//! Decimation and world placement of the extracted surface.

use mesh_decimate::{DecimateParams, decimate_mesh};
use mesh_transform::Transform3D;
use mesh_types::IndexedMesh;
use nalgebra::Matrix4;
use segmentation_core::{ConvertError, ConvertResult};
use tracing::debug;

/// Simplify an extracted surface, removing `factor` of its triangles.
///
/// Factors at or below zero return the mesh untouched. Otherwise the
/// decimation keeps topology and feature vertices (feature angle 60
/// degrees) and bounds every collapse by the bounding box diagonal.
///
/// # Errors
///
/// Returns [`ConvertError::Decimation`] if the decimator rejects the mesh
/// or the factor.
pub fn decimate_surface(mesh: IndexedMesh, factor: f64) -> ConvertResult<IndexedMesh> {
    if factor <= 0.0 {
        return Ok(mesh);
    }

    let params = DecimateParams::topology_preserving().with_target_reduction(factor);
    let result = decimate_mesh(&mesh, &params).map_err(|err| ConvertError::Decimation {
        reason: err.to_string(),
    })?;

    debug!(
        factor = factor,
        original = result.original_triangles,
        remaining = result.final_triangles,
        rejected = result.collapses_rejected,
        "Decimated surface"
    );
    Ok(result.mesh)
}

/// Move an index-space surface into world coordinates.
///
/// Mirroring matrices also reverse the face winding, so the surface keeps
/// facing outward.
///
/// # Errors
///
/// Returns [`ConvertError::Frame`] if `image_to_world` is not an invertible
/// affine matrix.
pub fn to_world(mesh: &mut IndexedMesh, image_to_world: &Matrix4<f64>) -> ConvertResult<()> {
    let transform = Transform3D::from_matrix(*image_to_world).map_err(|err| {
        ConvertError::Frame {
            reason: err.to_string(),
        }
    })?;
    transform.apply_to_mesh(mesh);
    debug!(
        determinant = transform.determinant(),
        "Applied image-to-world transform"
    );
    Ok(())
}

//! Border scan: does foreground touch the outer shell of the image?
//!
//! Extracting a surface from a mask whose foreground reaches the border
//! leaves the surface open there, so such masks are padded first.

use segmentation_core::{ConvertError, ConvertResult};
use tracing::{debug, error};
use volume_types::{OrientedImage, VoxelBuffer};

mod sealed {
    pub trait Sealed {}
}

/// Voxel encodings a binary labelmap may use.
///
/// Implemented for `u8`, `u16` and `i16` only.
pub trait LabelVoxel: Copy + sealed::Sealed {
    /// True for any non-zero label.
    fn is_foreground(self) -> bool;
}

macro_rules! impl_label_voxel {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl LabelVoxel for $t {
                #[inline]
                fn is_foreground(self) -> bool {
                    self != 0
                }
            }
        )*
    };
}

impl_label_voxel!(u8, u16, i16);

/// True if any voxel on the six faces of an `i`-fastest block is foreground.
///
/// Interior voxels are never read; the scan stops at the first hit.
///
/// # Example
///
/// ```
/// use labelmap_to_surface::boundary_has_foreground;
///
/// let mut voxels = vec![0_u8; 27];
/// voxels[13] = 1; // center of a 3x3x3 block
/// assert!(!boundary_has_foreground(&voxels, [3, 3, 3]));
///
/// voxels[0] = 1;
/// assert!(boundary_has_foreground(&voxels, [3, 3, 3]));
/// ```
#[must_use]
pub fn boundary_has_foreground<T: LabelVoxel>(values: &[T], dimensions: [usize; 3]) -> bool {
    let [nx, ny, nz] = dimensions;
    if nx == 0 || ny == 0 || nz == 0 {
        return false;
    }
    let is_set = |offset: usize| values.get(offset).is_some_and(|v| v.is_foreground());

    for k in 0..nz {
        for j in 0..ny {
            let row = nx * (j + ny * k);
            let whole_row = k == 0 || k == nz - 1 || j == 0 || j == ny - 1;
            let hit = if whole_row {
                (row..row + nx).any(&is_set)
            } else {
                is_set(row) || is_set(row + nx - 1)
            };
            if hit {
                return true;
            }
        }
    }
    false
}

/// Whether the labelmap must be padded before extraction.
///
/// # Errors
///
/// Returns [`ConvertError::UnsupportedScalarType`] unless the voxels are
/// `u8`, `u16` or `i16`.
pub fn try_requires_padding(image: &OrientedImage) -> ConvertResult<bool> {
    let dimensions = image.dimensions();
    let needed = match image.buffer() {
        VoxelBuffer::U8(values) => boundary_has_foreground(values, dimensions),
        VoxelBuffer::U16(values) => boundary_has_foreground(values, dimensions),
        VoxelBuffer::I16(values) => boundary_has_foreground(values, dimensions),
        other => return Err(ConvertError::UnsupportedScalarType(other.scalar_type())),
    };
    debug!(
        dimensions = ?dimensions,
        padding = needed,
        "Scanned labelmap border"
    );
    Ok(needed)
}

/// Whether the labelmap must be padded before extraction.
///
/// An unsupported voxel encoding is logged and answered with `false`;
/// that answer does not mean the border is empty. Use
/// [`try_requires_padding`] to tell the two apart.
#[must_use]
pub fn requires_padding(image: &OrientedImage) -> bool {
    try_requires_padding(image).unwrap_or_else(|err| {
        error!(error = %err, "Border scan failed, assuming no padding");
        false
    })
}

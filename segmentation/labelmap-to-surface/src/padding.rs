//! One-voxel background padding.

use segmentation_core::ConvertResult;
use tracing::debug;
use volume_types::{ImageError, OrientedImage, VoxelBuffer};

/// Copy of `image` grown by one background voxel on every side.
///
/// The extent grows in index space only: the image-to-world matrix is kept,
/// so every original voxel keeps its index and its world position. An
/// empty image is returned unchanged.
///
/// # Errors
///
/// Returns [`ImageError::IndexOverflow`] if the grown extent leaves the
/// `i32` index range.
pub fn pad_image(image: &OrientedImage) -> ConvertResult<OrientedImage> {
    if image.is_empty() {
        return Ok(image.clone());
    }

    let extent = image.extent().grown(1).ok_or(ImageError::IndexOverflow)?;
    let dimensions = image.dimensions();
    let buffer = match image.buffer() {
        VoxelBuffer::U8(values) => VoxelBuffer::from(padded_values(values, dimensions)),
        VoxelBuffer::U16(values) => VoxelBuffer::from(padded_values(values, dimensions)),
        VoxelBuffer::I16(values) => VoxelBuffer::from(padded_values(values, dimensions)),
        VoxelBuffer::I32(values) => VoxelBuffer::from(padded_values(values, dimensions)),
        VoxelBuffer::F32(values) => VoxelBuffer::from(padded_values(values, dimensions)),
        VoxelBuffer::F64(values) => VoxelBuffer::from(padded_values(values, dimensions)),
    };

    let padded = OrientedImage::new(extent, buffer)?.with_image_to_world(*image.image_to_world())?;
    debug!(
        from = ?dimensions,
        to = ?padded.dimensions(),
        "Padded labelmap"
    );
    Ok(padded)
}

/// Rows of an `i`-fastest block copied into the interior of a block two
/// voxels larger on each axis.
fn padded_values<T: Copy + Default>(values: &[T], dimensions: [usize; 3]) -> Vec<T> {
    let [nx, ny, nz] = dimensions;
    let (px, py) = (nx + 2, ny + 2);
    let mut padded = vec![T::default(); px * py * (nz + 2)];

    for (row, source) in values.chunks_exact(nx).enumerate() {
        let (j, k) = (row % ny, row / ny);
        let start = 1 + px * ((j + 1) + py * (k + 1));
        padded[start..start + nx].copy_from_slice(source);
    }
    padded
}

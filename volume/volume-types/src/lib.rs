//! Oriented volumetric images.
//!
//! An [`OrientedImage`] is a dense block of scalar voxels addressed by
//! integer [`VoxelIndex`] values inside an inclusive [`IndexExtent`], plus
//! a 4x4 affine image-to-world matrix that places voxel centers in
//! physical space.
//!
//! - [`IndexExtent`] - Inclusive integer bounding box of valid indices
//! - [`ScalarType`] / [`VoxelBuffer`] - Voxel encoding and storage
//! - [`OrientedImage`] - Extent, buffer and geometry together
//!
//! # Layer 0 Crate
//!
//! Depends only on `nalgebra` and `thiserror`.
//!
//! # Memory Layout
//!
//! Voxels are stored with `i` varying fastest, then `j`, then `k`.
//!
//! # Example
//!
//! ```
//! use volume_types::{IndexExtent, OrientedImage, ScalarType, VoxelIndex};
//!
//! let extent = IndexExtent::new(VoxelIndex::new(0, 0, 0), VoxelIndex::new(3, 3, 3));
//! let mut image = OrientedImage::zeros(extent, ScalarType::U8);
//! image.set_value(VoxelIndex::new(1, 2, 3), 1.0).unwrap();
//!
//! assert_eq!(image.dimensions(), [4, 4, 4]);
//! assert_eq!(image.value(VoxelIndex::new(1, 2, 3)), Some(1.0));
//! assert_eq!(image.value(VoxelIndex::new(4, 0, 0)), None);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod error;
mod image;
mod index;
mod scalar;

pub use error::{ImageError, ImageResult};
pub use image::OrientedImage;
pub use index::{IndexExtent, VoxelIndex};
pub use scalar::{ScalarType, VoxelBuffer};

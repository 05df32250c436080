//! Binary labelmap to closed surface conversion.
//!
//! Turns a voxel mask held in an [`OrientedImage`](volume_types::OrientedImage)
//! into a closed triangle surface in world coordinates, as a
//! [`ConversionRule`](segmentation_core::ConversionRule) a segmentation
//! registry can call.
//!
//! # Pipeline
//!
//! 1. **Border scan**: [`requires_padding`] checks the outer voxel shell for
//!    foreground (`u8`, `u16` and `i16` masks only)
//! 2. **Padding**: [`pad_image`] adds one background voxel on every side, so
//!    the surface closes where the mask touches the border
//! 3. **Extraction**: [`extract_surface`] builds the 0.5 iso-surface in voxel
//!    index coordinates
//! 4. **Decimation**: [`decimate_surface`] removes the requested fraction of
//!    triangles while keeping topology
//! 5. **World transform**: [`to_world`] applies the image-to-world matrix
//!
//! # Layer 0 Crate
//!
//! No engine dependencies. Logging goes through `tracing`; install a
//! subscriber to see it.
//!
//! # Example
//!
//! ```
//! use labelmap_to_surface::LabelmapToClosedSurface;
//! use volume_types::{IndexExtent, OrientedImage, ScalarType, VoxelIndex};
//!
//! let extent = IndexExtent::new(VoxelIndex::new(0, 0, 0), VoxelIndex::new(4, 4, 4));
//! let mut image = OrientedImage::zeros(extent, ScalarType::U8);
//! for k in 1..=3 {
//!     for j in 1..=3 {
//!         for i in 1..=3 {
//!             image.set_value(VoxelIndex::new(i, j, k), 1.0).unwrap();
//!         }
//!     }
//! }
//!
//! let conversion = LabelmapToClosedSurface::new().convert_labelmap(&image).unwrap();
//! assert!(!conversion.padded);
//! println!("{conversion}");
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod border;
mod config;
mod extract;
mod padding;
mod result;
mod rule;
mod stages;

pub use border::{LabelVoxel, boundary_has_foreground, requires_padding, try_requires_padding};
pub use config::{
    DECIMATION_FACTOR_DEFAULT, DECIMATION_FACTOR_DESCRIPTION, DECIMATION_FACTOR_PARAMETER,
    PaddingMode, SurfaceConversionConfig,
};
pub use extract::{LABELMAP_ISO_LEVEL, extract_surface};
pub use padding::pad_image;
pub use result::SurfaceConversion;
pub use rule::{CONVERSION_COST, LabelmapToClosedSurface, RULE_NAME};
pub use stages::{decimate_surface, to_world};

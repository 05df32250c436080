//! Affine transforms for indexed meshes.
//!
//! [`Transform3D`] wraps a homogeneous 4x4 matrix. It is how meshes built
//! in one coordinate frame (for example voxel index space) are moved into
//! another (physical space) in a single pass over the vertices.
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with no engine dependencies.
//!
//! # Example
//!
//! ```
//! use mesh_transform::Transform3D;
//! use mesh_types::{MeshBounds, unit_cube};
//!
//! let mut cube = unit_cube();
//! let transform = Transform3D::uniform_scale(2.0).then(&Transform3D::translation(10.0, 0.0, 0.0));
//! transform.apply_to_mesh(&mut cube);
//!
//! assert!((cube.bounds().min.x - 10.0).abs() < 1e-12);
//! assert!((cube.volume() - 8.0).abs() < 1e-12);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod error;
mod transform;

pub use error::{TransformError, TransformResult};
pub use transform::Transform3D;

//! Triangle mesh types for the labelmap surface pipeline.
//!
//! Every stage that produces or consumes surface geometry speaks in these
//! types:
//!
//! - [`Vertex`] - A position with an optional unit normal
//! - [`IndexedMesh`] - Shared vertex array plus `[u32; 3]` faces
//! - [`Triangle`] - A resolved face with concrete corner positions
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Layer 0 Crate
//!
//! Pure geometry with no rendering or engine dependencies. The only
//! required dependency is `nalgebra`; `serde` support is behind the
//! `serde` feature.
//!
//! # Coordinate Frames
//!
//! A mesh does not know which frame its vertices live in. The surface
//! pipeline builds meshes in voxel index space (IJK) and moves them into
//! physical space as its final step.
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**,
//! so a closed, correctly oriented mesh has positive signed volume.
//!
//! # Example
//!
//! ```
//! use mesh_types::{IndexedMesh, MeshTopology, Vertex};
//!
//! let mesh = IndexedMesh::from_parts(
//!     vec![
//!         Vertex::from_coords(0.0, 0.0, 0.0),
//!         Vertex::from_coords(1.0, 0.0, 0.0),
//!         Vertex::from_coords(0.0, 1.0, 0.0),
//!     ],
//!     vec![[0, 1, 2]],
//! );
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod bounds;
mod mesh;
mod traits;
mod triangle;
mod vertex;

pub use bounds::Aabb;
pub use mesh::{IndexedMesh, unit_cube};
pub use traits::{MeshBounds, MeshTopology};
pub use triangle::Triangle;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

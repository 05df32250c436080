//! Topology-preserving surface simplification.
//!
//! Shrinks a triangle surface by collapsing edges in order of quadric error
//! (Garland and Heckbert). Built for iso-surfaces extracted from voxel
//! masks: closed inputs stay closed and keep their genus.
//!
//! # Features
//!
//! - **Collapse order**: cheapest edge first, ties broken by vertex index
//! - **Topology guard**: link-condition and fold-over checks on every collapse
//! - **Pinned vertices**: boundary, non-manifold and sharp-edge vertices stay put
//! - **Error bound**: optional limit relative to the bounding box diagonal
//! - **Deterministic**: the collapse order depends only on the input mesh
//!
//! # Layer 0 Crate
//!
//! No engine dependencies. Progress is reported through `tracing`.
//!
//! # Example
//!
//! ```
//! use mesh_decimate::{DecimateParams, decimate_mesh};
//! use mesh_types::unit_cube;
//!
//! let params = DecimateParams::topology_preserving().with_target_reduction(0.5);
//! let result = decimate_mesh(&unit_cube(), &params).unwrap();
//! assert!(result.final_triangles <= result.original_triangles);
//! println!("{result}");
//! ```
//!
//! # Algorithm
//!
//! 1. Sum the plane quadrics of the faces around each vertex
//! 2. Pin vertices the parameters ask to keep
//! 3. Queue every edge with its best target position and error
//! 4. Pop edges until the face target is met, skipping stale or invalid
//!    candidates and re-queueing the edges around each merged vertex

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod decimate;
mod error;
mod params;
mod quadric;
mod result;

pub use decimate::decimate_mesh;
pub use error::{DecimateError, DecimateResult};
pub use params::DecimateParams;
pub use quadric::Quadric;
pub use result::DecimationResult;

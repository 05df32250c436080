//! Surface checks for triangle meshes.
//!
//! A converted surface is only useful downstream if it is closed: every
//! edge shared by exactly two faces, traversed once in each direction.
//! This crate measures that.
//!
//! - [`EdgeAdjacency`] - Edge to face incidence with per-direction counts
//! - [`validate_surface`] - Builds a [`SurfaceReport`] for a mesh
//!
//! # Example
//!
//! ```
//! use mesh_types::unit_cube;
//! use mesh_validate::validate_surface;
//!
//! let report = validate_surface(&unit_cube());
//! assert!(report.is_closed());
//! assert_eq!(report.euler_characteristic(), 2);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod adjacency;
mod report;

pub use adjacency::{EdgeAdjacency, EdgeUse};
pub use report::{SurfaceReport, validate_surface};

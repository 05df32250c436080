//! Segment representations and the conversion rule contract.
//!
//! A segment can be held as a voxel mask or as a closed surface. Converters
//! between the two implement [`ConversionRule`]; a registry outside this
//! crate chooses between rules by cost and passes parameter overrides.
//!
//! - [`RepresentationKind`] / [`Representation`] - What a segment is stored as
//! - [`ConversionParameters`] - Name to value/description map each rule publishes
//! - [`ConversionRule`] - Metadata, cost estimate and the conversion itself
//! - [`ConvertError`] - Failure kinds shared by all rules
//!
//! # Layer 0 Crate
//!
//! Depends only on the mesh and volume type crates, `thiserror` and
//! `tracing`.
//!
//! # Example
//!
//! ```
//! use segmentation_core::{Representation, RepresentationKind};
//!
//! let kind = RepresentationKind::from_name("Closed surface").unwrap();
//! let surface = Representation::empty(kind);
//!
//! assert_eq!(kind.class_name(), "IndexedMesh");
//! assert!(surface.is_empty());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod error;
mod parameters;
mod representation;
mod rule;

pub use error::{ConvertError, ConvertResult};
pub use parameters::{ConversionParameter, ConversionParameters, deserialize_floating_point_parameter};
pub use representation::{Representation, RepresentationKind};
pub use rule::ConversionRule;

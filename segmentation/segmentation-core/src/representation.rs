//! Segment representations and their names.

use mesh_types::IndexedMesh;
use volume_types::OrientedImage;

use crate::error::{ConvertError, ConvertResult};

/// The kinds of data a segment can be stored as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RepresentationKind {
    /// Voxel mask, stored as an [`OrientedImage`].
    BinaryLabelmap,
    /// Closed triangle surface, stored as an [`IndexedMesh`].
    ClosedSurface,
}

impl RepresentationKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 2] = [Self::BinaryLabelmap, Self::ClosedSurface];

    /// Registry name, e.g. `"Binary labelmap"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BinaryLabelmap => "Binary labelmap",
            Self::ClosedSurface => "Closed surface",
        }
    }

    /// Name of the concrete data type holding this representation.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::BinaryLabelmap => "OrientedImage",
            Self::ClosedSurface => "IndexedMesh",
        }
    }

    /// Look up a kind by registry name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Look up a kind by data type name.
    #[must_use]
    pub fn from_class_name(class_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.class_name() == class_name)
    }
}

impl std::fmt::Display for RepresentationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A segment's data in one representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Representation {
    /// Voxel mask; non-zero voxels are foreground.
    BinaryLabelmap(OrientedImage),
    /// Triangle surface in world coordinates.
    ClosedSurface(IndexedMesh),
}

impl Representation {
    /// Fresh empty representation of the given kind.
    #[must_use]
    pub fn empty(kind: RepresentationKind) -> Self {
        match kind {
            RepresentationKind::BinaryLabelmap => Self::BinaryLabelmap(OrientedImage::empty()),
            RepresentationKind::ClosedSurface => Self::ClosedSurface(IndexedMesh::new()),
        }
    }

    /// Kind of the held data.
    #[must_use]
    pub const fn kind(&self) -> RepresentationKind {
        match self {
            Self::BinaryLabelmap(_) => RepresentationKind::BinaryLabelmap,
            Self::ClosedSurface(_) => RepresentationKind::ClosedSurface,
        }
    }

    /// True if the held image has no voxels or the held mesh no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::BinaryLabelmap(image) => image.is_empty(),
            Self::ClosedSurface(mesh) => mesh.faces.is_empty(),
        }
    }

    /// The labelmap, if this is one.
    #[must_use]
    pub const fn as_labelmap(&self) -> Option<&OrientedImage> {
        match self {
            Self::BinaryLabelmap(image) => Some(image),
            Self::ClosedSurface(_) => None,
        }
    }

    /// The surface, if this is one.
    #[must_use]
    pub const fn as_surface(&self) -> Option<&IndexedMesh> {
        match self {
            Self::ClosedSurface(mesh) => Some(mesh),
            Self::BinaryLabelmap(_) => None,
        }
    }

    /// The labelmap, or a [`ConvertError::TypeMismatch`].
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::TypeMismatch`] for any other kind.
    pub fn require_labelmap(&self) -> ConvertResult<&OrientedImage> {
        self.as_labelmap().ok_or(ConvertError::TypeMismatch {
            expected: RepresentationKind::BinaryLabelmap,
            found: self.kind(),
        })
    }

    /// Mutable surface, or a [`ConvertError::TypeMismatch`].
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::TypeMismatch`] for any other kind.
    pub fn require_surface_mut(&mut self) -> ConvertResult<&mut IndexedMesh> {
        let found = self.kind();
        match self {
            Self::ClosedSurface(mesh) => Ok(mesh),
            Self::BinaryLabelmap(_) => Err(ConvertError::TypeMismatch {
                expected: RepresentationKind::ClosedSurface,
                found,
            }),
        }
    }
}

impl From<OrientedImage> for Representation {
    fn from(image: OrientedImage) -> Self {
        Self::BinaryLabelmap(image)
    }
}

impl From<IndexedMesh> for Representation {
    fn from(mesh: IndexedMesh) -> Self {
        Self::ClosedSurface(mesh)
    }
}

//! Summary of one labelmap conversion.

use mesh_types::IndexedMesh;

/// A converted surface and what happened on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConversion {
    /// Closed surface in world coordinates.
    pub mesh: IndexedMesh,

    /// True if the labelmap was padded before extraction.
    pub padded: bool,

    /// Triangles produced by extraction.
    pub extracted_triangles: usize,

    /// Triangles left after decimation.
    pub final_triangles: usize,
}

impl SurfaceConversion {
    /// True if decimation removed any triangles.
    #[must_use]
    pub const fn was_decimated(&self) -> bool {
        self.final_triangles < self.extracted_triangles
    }
}

impl std::fmt::Display for SurfaceConversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Closed surface: {} vertices, {} triangles ({} extracted{})",
            self.mesh.vertices.len(),
            self.final_triangles,
            self.extracted_triangles,
            if self.padded { ", padded" } else { "" }
        )
    }
}

//! Read-only mesh access traits.

use crate::{Aabb, Triangle, Vertex};

/// Topology queries shared by mesh representations.
pub trait MeshTopology {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of triangular faces.
    fn face_count(&self) -> usize;

    /// True if the mesh has no vertices or no faces.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.face_count() == 0
    }

    /// Vertex by index, `None` when out of bounds.
    fn vertex(&self, index: usize) -> Option<&Vertex>;

    /// Face by index, `None` when out of bounds.
    fn face(&self, index: usize) -> Option<[u32; 3]>;

    /// Face by index with resolved corner positions.
    ///
    /// Returns `None` if the face or any of its vertices is missing.
    fn triangle(&self, face_index: usize) -> Option<Triangle>;

    /// Iterate over faces as vertex index triples.
    fn faces(&self) -> impl Iterator<Item = [u32; 3]>;

    /// Iterate over resolved triangles, skipping faces with bad indices.
    fn triangles(&self) -> impl Iterator<Item = Triangle>;
}

/// Bounding box queries.
pub trait MeshBounds {
    /// Axis-aligned bounds; empty when there are no vertices.
    fn bounds(&self) -> Aabb;
}

//! Surface health report.

use mesh_types::{IndexedMesh, MeshTopology};

use crate::adjacency::EdgeAdjacency;

/// Areas at or below this are counted as degenerate.
const DEGENERATE_AREA: f64 = 1e-12;

/// Result of [`validate_surface`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceReport {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of faces.
    pub face_count: usize,
    /// Number of distinct undirected edges.
    pub edge_count: usize,
    /// Edges with one incident face.
    pub boundary_edge_count: usize,
    /// Edges with more than two incident faces.
    pub non_manifold_edge_count: usize,
    /// Two-face edges traversed twice in the same direction.
    pub misoriented_edge_count: usize,
    /// Faces with zero area or repeated indices.
    pub degenerate_face_count: usize,
    /// Faces referencing vertices that do not exist.
    pub invalid_index_count: usize,
}

impl SurfaceReport {
    /// Non-empty, with every edge shared by exactly two faces.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.face_count > 0 && self.boundary_edge_count == 0 && self.non_manifold_edge_count == 0
    }

    /// Closed with consistent winding on every edge.
    #[must_use]
    pub const fn is_oriented_closed(&self) -> bool {
        self.is_closed() && self.misoriented_edge_count == 0
    }

    /// `V - E + F`; 2 for a single closed sphere-like shell.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn euler_characteristic(&self) -> i64 {
        self.vertex_count as i64 - self.edge_count as i64 + self.face_count as i64
    }
}

impl std::fmt::Display for SurfaceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Surface: {} vertices, {} faces, {} edges ({})",
            self.vertex_count,
            self.face_count,
            self.edge_count,
            if self.is_oriented_closed() {
                "closed"
            } else {
                "open"
            }
        )?;
        if self.boundary_edge_count > 0 {
            write!(f, ", {} boundary edges", self.boundary_edge_count)?;
        }
        if self.non_manifold_edge_count > 0 {
            write!(f, ", {} non-manifold edges", self.non_manifold_edge_count)?;
        }
        if self.misoriented_edge_count > 0 {
            write!(f, ", {} misoriented edges", self.misoriented_edge_count)?;
        }
        if self.degenerate_face_count > 0 {
            write!(f, ", {} degenerate faces", self.degenerate_face_count)?;
        }
        Ok(())
    }
}

/// Inspect `mesh` for openings, non-manifold edges and winding conflicts.
///
/// Unreferenced vertices are counted in `vertex_count` but never reported
/// as an issue. They do shift the Euler characteristic.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
/// use mesh_validate::validate_surface;
///
/// let mut cube = unit_cube();
/// cube.faces.pop();
/// let report = validate_surface(&cube);
/// assert!(!report.is_closed());
/// assert_eq!(report.boundary_edge_count, 3);
/// ```
#[must_use]
pub fn validate_surface(mesh: &IndexedMesh) -> SurfaceReport {
    let adjacency = EdgeAdjacency::build(&mesh.faces);

    let mut degenerate_face_count = 0;
    let mut invalid_index_count = 0;
    for (index, face) in mesh.faces.iter().enumerate() {
        if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
            degenerate_face_count += 1;
            continue;
        }
        match mesh.triangle(index) {
            Some(tri) if tri.is_degenerate(DEGENERATE_AREA) => degenerate_face_count += 1,
            Some(_) => {}
            None => invalid_index_count += 1,
        }
    }

    SurfaceReport {
        vertex_count: mesh.vertex_count(),
        face_count: mesh.face_count(),
        edge_count: adjacency.edge_count(),
        boundary_edge_count: adjacency.boundary_edge_count(),
        non_manifold_edge_count: adjacency.non_manifold_edge_count(),
        misoriented_edge_count: adjacency.misoriented_edge_count(),
        degenerate_face_count,
        invalid_index_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{Vertex, unit_cube};

    #[test]
    fn cube_is_closed() {
        let report = validate_surface(&unit_cube());
        assert!(report.is_oriented_closed());
        assert_eq!(report.edge_count, 18);
        assert_eq!(report.euler_characteristic(), 2);
        assert!(report.to_string().contains("closed"));
    }

    #[test]
    fn empty_mesh_is_not_closed() {
        let report = validate_surface(&IndexedMesh::new());
        assert!(!report.is_closed());
    }

    #[test]
    fn flipped_face_is_misoriented() {
        let mut cube = unit_cube();
        cube.faces[0].swap(1, 2);
        let report = validate_surface(&cube);
        assert!(report.is_closed());
        assert!(!report.is_oriented_closed());
        assert_eq!(report.misoriented_edge_count, 3);
        assert!(report.to_string().contains("misoriented"));
    }

    #[test]
    fn degenerate_and_invalid_faces() {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(2.0, 0.0, 0.0));
        mesh.faces.push([0, 1, 2]);
        mesh.faces.push([0, 0, 1]);
        mesh.faces.push([0, 1, 7]);

        let report = validate_surface(&mesh);
        assert_eq!(report.degenerate_face_count, 2);
        assert_eq!(report.invalid_index_count, 1);
    }
}

//! Edge incidence.

use hashbrown::HashMap;

/// How the faces around one undirected edge use it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeUse {
    /// Faces traversing the edge from the lower to the higher vertex index.
    pub forward: u32,
    /// Faces traversing the edge from the higher to the lower vertex index.
    pub backward: u32,
}

impl EdgeUse {
    /// Total number of incident faces.
    #[must_use]
    pub const fn face_count(&self) -> u32 {
        self.forward + self.backward
    }

    /// Exactly one incident face.
    #[must_use]
    pub const fn is_boundary(&self) -> bool {
        self.face_count() == 1
    }

    /// More than two incident faces.
    #[must_use]
    pub const fn is_non_manifold(&self) -> bool {
        self.face_count() > 2
    }

    /// Two incident faces that traverse the edge in the same direction.
    #[must_use]
    pub const fn is_misoriented(&self) -> bool {
        self.face_count() == 2 && self.forward != 1
    }
}

/// Undirected edge to [`EdgeUse`] map for a face list.
///
/// Degenerate faces (repeated vertex index) still contribute their edges,
/// which makes them show up as non-manifold or misoriented.
///
/// # Example
///
/// ```
/// use mesh_validate::EdgeAdjacency;
///
/// let adj = EdgeAdjacency::build(&[[0, 1, 2], [1, 3, 2]]);
/// assert_eq!(adj.edge_count(), 5);
/// assert_eq!(adj.boundary_edge_count(), 4);
/// assert_eq!(adj.misoriented_edge_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeAdjacency {
    edges: HashMap<(u32, u32), EdgeUse>,
}

impl EdgeAdjacency {
    /// Build the incidence map for `faces`.
    #[must_use]
    pub fn build(faces: &[[u32; 3]]) -> Self {
        let mut edges: HashMap<(u32, u32), EdgeUse> = HashMap::with_capacity(faces.len() * 3 / 2);

        for face in faces {
            for i in 0..3 {
                let (a, b) = (face[i], face[(i + 1) % 3]);
                let entry = edges.entry((a.min(b), a.max(b))).or_default();
                if a < b {
                    entry.forward += 1;
                } else {
                    entry.backward += 1;
                }
            }
        }

        Self { edges }
    }

    /// Usage of the edge between `a` and `b`, in either order.
    #[must_use]
    pub fn edge(&self, a: u32, b: u32) -> Option<EdgeUse> {
        self.edges.get(&(a.min(b), a.max(b))).copied()
    }

    /// Number of distinct undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges with exactly one incident face.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.edges.values().filter(|e| e.is_boundary()).count()
    }

    /// Edges with more than two incident faces.
    #[must_use]
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edges.values().filter(|e| e.is_non_manifold()).count()
    }

    /// Two-face edges whose faces disagree on winding.
    #[must_use]
    pub fn misoriented_edge_count(&self) -> usize {
        self.edges.values().filter(|e| e.is_misoriented()).count()
    }

    /// Boundary edges as `(low, high)` vertex pairs, sorted.
    #[must_use]
    pub fn boundary_edges(&self) -> Vec<(u32, u32)> {
        let mut edges: Vec<_> = self
            .edges
            .iter()
            .filter(|(_, e)| e.is_boundary())
            .map(|(&edge, _)| edge)
            .collect();
        edges.sort_unstable();
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_triangle_is_all_boundary() {
        let adj = EdgeAdjacency::build(&[[0, 1, 2]]);
        assert_eq!(adj.edge_count(), 3);
        assert_eq!(adj.boundary_edge_count(), 3);
        assert_eq!(adj.boundary_edges(), vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn consistent_pair() {
        let adj = EdgeAdjacency::build(&[[0, 1, 2], [1, 3, 2]]);
        let shared = adj.edge(2, 1);
        assert_eq!(
            shared,
            Some(EdgeUse {
                forward: 1,
                backward: 1
            })
        );
        assert_eq!(adj.misoriented_edge_count(), 0);
    }

    #[test]
    fn inconsistent_pair() {
        let adj = EdgeAdjacency::build(&[[0, 1, 2], [1, 2, 3]]);
        assert_eq!(adj.misoriented_edge_count(), 1);
    }

    #[test]
    fn fan_of_three_is_non_manifold() {
        let adj = EdgeAdjacency::build(&[[0, 1, 2], [1, 0, 3], [0, 1, 4]]);
        assert_eq!(adj.non_manifold_edge_count(), 1);
        assert!(adj.edge(5, 6).is_none());
    }
}

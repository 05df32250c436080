//! Core mesh decimation algorithm.
//!
//! Implements edge collapse with quadric error metrics (QEM). Candidates are
//! ordered by cost and then by edge, so the sequence of collapses for a
//! given mesh does not depend on the target: a lower target only runs the
//! same sequence further.

// Mesh indices fit in u32 and counts stay far below 2^52
#![allow(clippy::cast_possible_truncation)]

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::{HashMap, HashSet};
use mesh_types::{Aabb, IndexedMesh, Point3, Triangle};
use tracing::{debug, info};

use crate::error::{DecimateError, DecimateResult};
use crate::params::DecimateParams;
use crate::quadric::Quadric;
use crate::result::DecimationResult;

/// An edge collapse candidate in the priority queue.
///
/// `remove` merges into `keep`, which moves to `target`.
#[derive(Debug, Clone)]
struct EdgeCollapse {
    keep: u32,
    remove: u32,
    target: Point3<f64>,
    cost: f64,
    /// Versions of `keep` and `remove` when the candidate was computed.
    stamps: [u32; 2],
}

impl EdgeCollapse {
    const fn edge(&self) -> (u32, u32) {
        normalize_edge(self.keep, self.remove)
    }
}

impl PartialEq for EdgeCollapse {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EdgeCollapse {}

impl PartialOrd for EdgeCollapse {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EdgeCollapse {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior; ties go to the smaller edge
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.edge().cmp(&self.edge()))
    }
}

/// Decimate a mesh using edge collapse with quadric error metrics.
///
/// Collapses run cheapest first until the face count reaches the target
/// of `params` or no acceptable collapse remains. With
/// `preserve_topology`, a collapse is refused if it would pinch the
/// surface, merge two boundary loops, or fold a face over.
///
/// # Errors
///
/// Returns an error if `params` is out of range or a face references a
/// missing vertex.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
/// use mesh_decimate::{decimate_mesh, DecimateParams};
///
/// let cube = unit_cube();
/// let result = decimate_mesh(&cube, &DecimateParams::with_target_ratio(0.5)).unwrap();
/// assert!(result.final_triangles <= cube.faces.len());
/// println!("{}", result);
/// ```
pub fn decimate_mesh(
    mesh: &IndexedMesh,
    params: &DecimateParams,
) -> DecimateResult<DecimationResult> {
    params.validate()?;
    check_indices(mesh)?;

    let original_triangles = mesh.faces.len();
    let target = params.target_triangle_count(original_triangles);

    if original_triangles <= target {
        debug!(
            original = original_triangles,
            target = target,
            "Mesh already at or below target"
        );
        return Ok(DecimationResult::unchanged(mesh));
    }

    info!(
        original = original_triangles,
        target = target,
        "Starting mesh decimation"
    );

    let mut state = CollapseState::new(mesh, params);
    state.seed_queue();

    let mut collapses_performed = 0;
    let mut collapses_rejected = 0;

    while state.active_faces > target {
        let Some(collapse) = state.heap.pop() else {
            break;
        };

        if !state.is_current(&collapse) {
            continue;
        }

        if !state.is_collapse_valid(&collapse) {
            collapses_rejected += 1;
            continue;
        }

        state.apply(&collapse);
        collapses_performed += 1;
    }

    let final_triangles = state.active_faces;
    let final_mesh = state.into_mesh(mesh);

    info!(
        final_triangles = final_triangles,
        collapses = collapses_performed,
        rejected = collapses_rejected,
        "Decimation complete"
    );

    Ok(DecimationResult {
        mesh: final_mesh,
        original_triangles,
        final_triangles,
        collapses_performed,
        collapses_rejected,
    })
}

// ============================================================================
// Collapse state
// ============================================================================

/// Working copy of the mesh while edges are collapsed.
struct CollapseState<'a> {
    params: &'a DecimateParams,
    positions: Vec<Point3<f64>>,
    quadrics: Vec<Quadric>,
    alive: Vec<bool>,
    moved: Vec<bool>,
    /// Vertices that may absorb neighbors but never move.
    pinned: Vec<bool>,
    boundary: Vec<bool>,
    stamps: Vec<u32>,
    faces: Vec<[u32; 3]>,
    face_alive: Vec<bool>,
    /// Faces around each vertex; may hold dead faces until the vertex moves.
    vertex_faces: Vec<Vec<usize>>,
    active_faces: usize,
    /// Squared bound on collapse cost.
    error_limit: Option<f64>,
    heap: BinaryHeap<EdgeCollapse>,
}

impl<'a> CollapseState<'a> {
    fn new(mesh: &IndexedMesh, params: &'a DecimateParams) -> Self {
        let vertex_count = mesh.vertices.len();
        let positions: Vec<Point3<f64>> = mesh.vertices.iter().map(|v| v.position).collect();

        let mut quadrics = vec![Quadric::default(); vertex_count];
        let mut vertex_faces = vec![Vec::new(); vertex_count];
        let mut face_alive = vec![true; mesh.faces.len()];

        for (face_idx, &face) in mesh.faces.iter().enumerate() {
            if has_repeated_vertex(face) {
                face_alive[face_idx] = false;
                continue;
            }
            if let Some(q) = Quadric::from_triangle(&triangle_at(&positions, face)) {
                for &v in &face {
                    quadrics[v as usize] += q;
                }
            }
            for &v in &face {
                vertex_faces[v as usize].push(face_idx);
            }
        }

        let mut pinned = vec![false; vertex_count];
        let mut boundary = vec![false; vertex_count];
        for (&(a, b), incident) in &build_edge_to_faces(&mesh.faces, &face_alive) {
            let locked = match incident.as_slice() {
                [_] => {
                    boundary[a as usize] = true;
                    boundary[b as usize] = true;
                    params.preserve_boundary
                }
                [f, g] => {
                    params.preserve_sharp_features
                        && dihedral_angle(&positions, mesh.faces[*f], mesh.faces[*g])
                            > params.feature_angle
                }
                _ => params.preserve_topology,
            };
            if locked {
                pinned[a as usize] = true;
                pinned[b as usize] = true;
            }
        }

        let error_limit = params.max_error.map(|fraction| {
            let bound = fraction * Aabb::from_points(positions.iter()).diagonal();
            bound * bound
        });

        let active_faces = face_alive.iter().filter(|&&alive| alive).count();

        debug!(
            vertices = vertex_count,
            faces = active_faces,
            pinned = pinned.iter().filter(|&&p| p).count(),
            "Prepared decimation state"
        );

        Self {
            params,
            positions,
            quadrics,
            alive: vec![true; vertex_count],
            moved: vec![false; vertex_count],
            pinned,
            boundary,
            stamps: vec![0; vertex_count],
            faces: mesh.faces.clone(),
            face_alive,
            vertex_faces,
            active_faces,
            error_limit,
            heap: BinaryHeap::new(),
        }
    }

    fn seed_queue(&mut self) {
        let mut seen_edges = HashSet::new();
        for face_idx in 0..self.faces.len() {
            if !self.face_alive[face_idx] {
                continue;
            }
            let face = self.faces[face_idx];
            for i in 0..3 {
                let (a, b) = normalize_edge(face[i], face[(i + 1) % 3]);
                if seen_edges.insert((a, b)) {
                    self.push_candidate(a, b);
                }
            }
        }
        debug!(candidates = self.heap.len(), "Seeded collapse queue");
    }

    fn push_candidate(&mut self, a: u32, b: u32) {
        if let Some(collapse) = self.candidate(a, b) {
            self.heap.push(collapse);
        }
    }

    /// Collapse of edge `(a, b)` with its placement and cost.
    fn candidate(&self, a: u32, b: u32) -> Option<EdgeCollapse> {
        let (keep, remove, fixed) = match (self.pinned[a as usize], self.pinned[b as usize]) {
            (true, true) => return None,
            (true, false) => (a, b, true),
            (false, true) => (b, a, true),
            (false, false) => (a.min(b), a.max(b), false),
        };

        let combined = self.quadrics[keep as usize] + self.quadrics[remove as usize];
        let keep_pos = self.positions[keep as usize];
        let target = if fixed {
            keep_pos
        } else {
            best_position(&combined, keep_pos, self.positions[remove as usize])
        };

        Some(EdgeCollapse {
            keep,
            remove,
            target,
            cost: combined.error(&target),
            stamps: [self.stamps[keep as usize], self.stamps[remove as usize]],
        })
    }

    /// False if either endpoint was removed or moved after queueing.
    fn is_current(&self, collapse: &EdgeCollapse) -> bool {
        let (k, r) = (collapse.keep as usize, collapse.remove as usize);
        self.alive[k]
            && self.alive[r]
            && self.stamps[k] == collapse.stamps[0]
            && self.stamps[r] == collapse.stamps[1]
    }

    fn live_faces(&self, v: u32) -> impl Iterator<Item = usize> + '_ {
        self.vertex_faces[v as usize]
            .iter()
            .copied()
            .filter(|&f| self.face_alive[f])
    }

    /// Sorted one-ring of `v`.
    fn neighbors(&self, v: u32) -> Vec<u32> {
        let mut ring: Vec<u32> = self
            .live_faces(v)
            .flat_map(|f| self.faces[f])
            .filter(|&u| u != v)
            .collect();
        ring.sort_unstable();
        ring.dedup();
        ring
    }

    fn is_collapse_valid(&self, collapse: &EdgeCollapse) -> bool {
        let (keep, remove) = (collapse.keep, collapse.remove);
        let shared: Vec<usize> = self
            .live_faces(remove)
            .filter(|&f| self.faces[f].contains(&keep))
            .collect();

        if shared.is_empty() {
            return false;
        }

        let topology_ok = if self.params.preserve_topology {
            self.preserves_topology(keep, remove, &shared)
        } else {
            self.shared_neighbor_count(keep, remove) <= 2
        };
        if !topology_ok {
            return false;
        }

        if self.error_limit.is_some_and(|limit| collapse.cost > limit) {
            return false;
        }

        !self.folds_faces(keep, remove, &collapse.target)
    }

    fn preserves_topology(&self, keep: u32, remove: u32, shared: &[usize]) -> bool {
        if shared.len() > 2 {
            return false;
        }

        // An interior edge between two boundary vertices pinches the surface
        if shared.len() == 2 && self.boundary[keep as usize] && self.boundary[remove as usize] {
            return false;
        }

        // Link condition: the common neighbors are exactly the apexes of the
        // faces on the edge
        let mut apexes: Vec<u32> = shared
            .iter()
            .flat_map(|&f| self.faces[f])
            .filter(|&v| v != keep && v != remove)
            .collect();
        apexes.sort_unstable();
        apexes.dedup();

        let keep_ring = self.neighbors(keep);
        let common: Vec<u32> = self
            .neighbors(remove)
            .into_iter()
            .filter(|v| *v != keep && keep_ring.binary_search(v).is_ok())
            .collect();
        if common != apexes {
            return false;
        }

        // A face of `remove` must not turn into a copy of a face of `keep`,
        // which is what collapsing any edge of a tetrahedron does
        !self
            .live_faces(remove)
            .filter(|f| !shared.contains(f))
            .any(|f| {
                let [a, b] = opposite_pair(self.faces[f], remove);
                self.live_faces(keep).any(|g| {
                    let other = self.faces[g];
                    other.contains(&a) && other.contains(&b)
                })
            })
    }

    fn shared_neighbor_count(&self, keep: u32, remove: u32) -> usize {
        let keep_ring = self.neighbors(keep);
        self.neighbors(remove)
            .iter()
            .filter(|v| keep_ring.binary_search(v).is_ok())
            .count()
    }

    /// True if moving the surviving faces to `target` flips or flattens one.
    fn folds_faces(&self, keep: u32, remove: u32, target: &Point3<f64>) -> bool {
        self.live_faces(keep)
            .chain(self.live_faces(remove))
            .any(|f| {
                let face = self.faces[f];
                if face.contains(&keep) && face.contains(&remove) {
                    return false;
                }
                let before = triangle_at(&self.positions, face);
                let corners = face.map(|v| {
                    if v == keep || v == remove {
                        *target
                    } else {
                        self.positions[v as usize]
                    }
                });
                let after = Triangle::new(corners[0], corners[1], corners[2]);
                match (before.normal(), after.normal()) {
                    (_, None) => true,
                    (Some(n0), Some(n1)) => n0.dot(&n1) <= 0.0,
                    (None, Some(_)) => false,
                }
            })
    }

    fn apply(&mut self, collapse: &EdgeCollapse) {
        let (keep, remove) = (collapse.keep, collapse.remove);
        let (k, r) = (keep as usize, remove as usize);

        if self.positions[k] != collapse.target {
            self.positions[k] = collapse.target;
            self.moved[k] = true;
        }
        let absorbed = self.quadrics[r];
        self.quadrics[k] += absorbed;
        self.boundary[k] |= self.boundary[r];
        self.alive[r] = false;

        for face_idx in std::mem::take(&mut self.vertex_faces[r]) {
            if !self.face_alive[face_idx] {
                continue;
            }
            let face = &mut self.faces[face_idx];
            if face.contains(&keep) {
                self.face_alive[face_idx] = false;
                self.active_faces -= 1;
                continue;
            }
            for v in face.iter_mut() {
                if *v == remove {
                    *v = keep;
                }
            }
            self.vertex_faces[k].push(face_idx);
        }

        let face_alive = &self.face_alive;
        self.vertex_faces[k].retain(|&f| face_alive[f]);
        self.stamps[k] = self.stamps[k].wrapping_add(1);

        for neighbor in self.neighbors(keep) {
            self.push_candidate(keep, neighbor);
        }
    }

    fn into_mesh(self, original: &IndexedMesh) -> IndexedMesh {
        let mut remap = vec![u32::MAX; original.vertices.len()];
        let mut vertices = Vec::with_capacity(original.vertices.len());

        for (idx, vertex) in original.vertices.iter().enumerate() {
            if !self.alive[idx] {
                continue;
            }
            remap[idx] = vertices.len() as u32;
            let mut vertex = vertex.clone();
            if self.moved[idx] {
                vertex.position = self.positions[idx];
                vertex.normal = None;
            }
            vertices.push(vertex);
        }

        let faces: Vec<[u32; 3]> = self
            .faces
            .iter()
            .zip(&self.face_alive)
            .filter(|(_, alive)| **alive)
            .map(|(face, _)| face.map(|v| remap[v as usize]))
            .collect();

        debug!(
            vertices = vertices.len(),
            faces = faces.len(),
            "Built final decimated mesh"
        );

        IndexedMesh::from_parts(vertices, faces)
    }
}

// ============================================================================
// Internal helper functions
// ============================================================================

const fn normalize_edge(v1: u32, v2: u32) -> (u32, u32) {
    if v1 < v2 { (v1, v2) } else { (v2, v1) }
}

const fn has_repeated_vertex(face: [u32; 3]) -> bool {
    face[0] == face[1] || face[1] == face[2] || face[0] == face[2]
}

/// The two corners of `face` other than `v`.
fn opposite_pair(face: [u32; 3], v: u32) -> [u32; 2] {
    let i = face.iter().position(|&u| u == v).unwrap_or(0);
    [face[(i + 1) % 3], face[(i + 2) % 3]]
}

fn triangle_at(positions: &[Point3<f64>], face: [u32; 3]) -> Triangle {
    Triangle::new(
        positions[face[0] as usize],
        positions[face[1] as usize],
        positions[face[2] as usize],
    )
}

fn check_indices(mesh: &IndexedMesh) -> DecimateResult<()> {
    let vertex_count = mesh.vertices.len();
    for (face, indices) in mesh.faces.iter().enumerate() {
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(DecimateError::InvalidIndex {
                face,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}

fn build_edge_to_faces(
    faces: &[[u32; 3]],
    face_alive: &[bool],
) -> HashMap<(u32, u32), Vec<usize>> {
    let mut edge_to_faces: HashMap<(u32, u32), Vec<usize>> = HashMap::new();

    for (face_idx, face) in faces.iter().enumerate() {
        if !face_alive[face_idx] {
            continue;
        }
        for i in 0..3 {
            let edge = normalize_edge(face[i], face[(i + 1) % 3]);
            edge_to_faces.entry(edge).or_default().push(face_idx);
        }
    }

    edge_to_faces
}

/// Angle between the normals of two faces; 0 if either is degenerate.
fn dihedral_angle(positions: &[Point3<f64>], f1: [u32; 3], f2: [u32; 3]) -> f64 {
    match (
        triangle_at(positions, f1).normal(),
        triangle_at(positions, f2).normal(),
    ) {
        (Some(n1), Some(n2)) => n1.dot(&n2).clamp(-1.0, 1.0).acos(),
        _ => 0.0,
    }
}

/// Lowest-cost placement among the quadric optimum, both endpoints and the
/// midpoint. An optimum farther from the midpoint than the edge is long
/// comes from a nearly singular quadric and is ignored.
fn best_position(q: &Quadric, a: Point3<f64>, b: Point3<f64>) -> Point3<f64> {
    let midpoint = nalgebra::center(&a, &b);
    let reach = (b - a).norm();
    let optimal = q
        .optimal_point()
        .filter(|p| (p - midpoint).norm() <= reach);

    optimal
        .into_iter()
        .chain([a, b, midpoint])
        .min_by(|p, r| q.error(p).total_cmp(&q.error(r)))
        .unwrap_or(midpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{Vertex, unit_cube};
    use mesh_validate::validate_surface;

    /// Octahedron subdivided `levels` times and projected onto the unit sphere.
    fn octasphere(levels: u32) -> IndexedMesh {
        let mut mesh = IndexedMesh::new();
        for p in [
            [1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
        ] {
            mesh.vertices.push(Vertex::from(p));
        }
        mesh.faces = vec![
            [0, 2, 4],
            [2, 1, 4],
            [1, 3, 4],
            [3, 0, 4],
            [2, 0, 5],
            [1, 2, 5],
            [3, 1, 5],
            [0, 3, 5],
        ];

        for _ in 0..levels {
            let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
            let mut faces = Vec::with_capacity(mesh.faces.len() * 4);
            for [a, b, c] in std::mem::take(&mut mesh.faces) {
                let mut mid = |u: u32, v: u32| {
                    *midpoints.entry(normalize_edge(u, v)).or_insert_with(|| {
                        let p = nalgebra::center(
                            &mesh.vertices[u as usize].position,
                            &mesh.vertices[v as usize].position,
                        );
                        mesh.vertices
                            .push(Vertex::new(Point3::from(p.coords.normalize())));
                        (mesh.vertices.len() - 1) as u32
                    })
                };
                let (ab, bc, ca) = (mid(a, b), mid(b, c), mid(c, a));
                faces.extend([[a, ab, ca], [b, bc, ab], [c, ca, bc], [ab, bc, ca]]);
            }
            mesh.faces = faces;
        }
        mesh
    }

    /// Flat `n x n` quad grid in the z = 0 plane, two triangles per quad.
    fn flat_grid(n: u32) -> IndexedMesh {
        let mut mesh = IndexedMesh::new();
        for y in 0..=n {
            for x in 0..=n {
                mesh.vertices
                    .push(Vertex::from_coords(f64::from(x), f64::from(y), 0.0));
            }
        }
        let at = |x: u32, y: u32| y * (n + 1) + x;
        for y in 0..n {
            for x in 0..n {
                let (v00, v10, v11, v01) = (at(x, y), at(x + 1, y), at(x + 1, y + 1), at(x, y + 1));
                mesh.faces.push([v00, v10, v11]);
                mesh.faces.push([v00, v11, v01]);
            }
        }
        mesh
    }

    fn tetrahedron() -> IndexedMesh {
        IndexedMesh::from_parts(
            vec![
                Vertex::from_coords(0.0, 0.0, 0.0),
                Vertex::from_coords(1.0, 0.0, 0.0),
                Vertex::from_coords(0.0, 1.0, 0.0),
                Vertex::from_coords(0.0, 0.0, 1.0),
            ],
            vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
        )
    }

    #[test]
    fn test_decimate_empty_mesh() {
        let mesh = IndexedMesh::new();
        let result = decimate_mesh(&mesh, &DecimateParams::default()).unwrap();

        assert_eq!(result.original_triangles, 0);
        assert_eq!(result.final_triangles, 0);
        assert_eq!(result.collapses_performed, 0);
    }

    #[test]
    fn test_invalid_params_are_reported() {
        let cube = unit_cube();
        let err = decimate_mesh(&cube, &DecimateParams::with_target_ratio(2.0)).unwrap_err();
        assert!(matches!(err, DecimateError::InvalidRatio(_)));
    }

    #[test]
    fn test_invalid_index_is_reported() {
        let mut mesh = tetrahedron();
        mesh.faces.push([0, 1, 7]);
        let err = decimate_mesh(&mesh, &DecimateParams::default()).unwrap_err();
        assert!(matches!(
            err,
            DecimateError::InvalidIndex {
                face: 4,
                index: 7,
                vertex_count: 4
            }
        ));
    }

    #[test]
    fn test_full_ratio_leaves_mesh_untouched() {
        let sphere = octasphere(2);
        let result = decimate_mesh(&sphere, &DecimateParams::with_target_ratio(1.0)).unwrap();
        assert_eq!(result.mesh, sphere);
        assert!(!result.was_decimated());
    }

    #[test]
    fn test_tetrahedron_cannot_collapse() {
        let tet = tetrahedron();
        let result = decimate_mesh(&tet, &DecimateParams::with_target_ratio(0.0)).unwrap();

        assert_eq!(result.final_triangles, 4);
        assert_eq!(result.collapses_performed, 0);
        assert_eq!(result.collapses_rejected, 6);
    }

    #[test]
    fn test_sphere_keeps_topology() {
        let sphere = octasphere(3);
        let params = DecimateParams::topology_preserving().with_target_reduction(0.5);
        let result = decimate_mesh(&sphere, &params).unwrap();

        assert!(result.was_decimated());
        assert!(result.final_triangles * 10 <= sphere.faces.len() * 6);
        assert_eq!(result.mesh.faces.len(), result.final_triangles);

        let report = validate_surface(&result.mesh);
        assert!(report.is_oriented_closed(), "{report}");
        assert_eq!(report.euler_characteristic(), 2);
        assert!(!result.mesh.is_inside_out());
    }

    #[test]
    fn test_more_reduction_never_adds_triangles() {
        let sphere = octasphere(3);
        let counts: Vec<usize> = [0.0, 0.3, 0.6, 0.9]
            .iter()
            .map(|&r| {
                let params = DecimateParams::topology_preserving().with_target_reduction(r);
                decimate_mesh(&sphere, &params).unwrap().final_triangles
            })
            .collect();

        assert_eq!(counts[0], sphere.faces.len());
        assert!(counts.windows(2).all(|w| w[1] <= w[0]), "{counts:?}");
    }

    #[test]
    fn test_decimation_is_deterministic() {
        let sphere = octasphere(3);
        let params = DecimateParams::topology_preserving().with_target_reduction(0.7);
        let first = decimate_mesh(&sphere, &params).unwrap();
        let second = decimate_mesh(&sphere, &params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tiny_error_bound_blocks_collapses() {
        let sphere = octasphere(3);
        let params = DecimateParams::with_target_ratio(0.5).with_max_error(1e-9);
        let result = decimate_mesh(&sphere, &params).unwrap();

        assert_eq!(result.collapses_performed, 0);
        assert_eq!(result.final_triangles, sphere.faces.len());
    }

    #[test]
    fn test_cube_corners_are_features() {
        let cube = unit_cube();
        let params = DecimateParams::with_target_ratio(0.5).with_preserve_sharp_features(true);
        let result = decimate_mesh(&cube, &params).unwrap();

        assert_eq!(result.final_triangles, 12);
        assert_eq!(result.mesh, cube);
    }

    #[test]
    fn test_flat_grid_keeps_boundary() {
        let grid = flat_grid(4);
        let before = validate_surface(&grid);
        let result = decimate_mesh(&grid, &DecimateParams::with_target_ratio(0.25)).unwrap();

        assert!(result.final_triangles < grid.faces.len());
        let after = validate_surface(&result.mesh);
        assert_eq!(after.boundary_edge_count, before.boundary_edge_count);
        assert_eq!(after.euler_characteristic(), 1);
        assert_eq!(after.misoriented_edge_count, 0);

        // Boundary vertices never move
        for vertex in grid.vertices.iter().filter(|v| {
            let p = v.position;
            p.x == 0.0 || p.y == 0.0 || p.x == 4.0 || p.y == 4.0
        }) {
            assert!(result.mesh.vertices.contains(vertex));
        }
    }

    #[test]
    fn test_normalize_edge() {
        assert_eq!(normalize_edge(5, 3), (3, 5));
        assert_eq!(normalize_edge(3, 5), (3, 5));
        assert_eq!(normalize_edge(1, 1), (1, 1));
    }

    #[test]
    fn test_opposite_pair_keeps_winding() {
        assert_eq!(opposite_pair([4, 7, 9], 7), [9, 4]);
        assert_eq!(opposite_pair([4, 7, 9], 4), [7, 9]);
    }
}

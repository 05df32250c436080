//! Marching tetrahedra surface extraction.

use hashbrown::HashMap;
use mesh_types::{IndexedMesh, Point3, Vertex};
use tracing::debug;

use crate::config::IsosurfaceConfig;
use crate::error::{IsosurfaceError, IsosurfaceResult};
use crate::field::ScalarField;

/// Six tetrahedra sharing the cell diagonal from corner 0 to corner 7.
///
/// Corner `c` sits at offset `(c & 1, (c >> 1) & 1, (c >> 2) & 1)`. Each
/// tetrahedron walks from corner 0 to corner 7 one axis at a time.
const CUBE_TETRAHEDRA: [[usize; 4]; 6] = [
    [0, 1, 3, 7],
    [0, 1, 5, 7],
    [0, 2, 3, 7],
    [0, 2, 6, 7],
    [0, 4, 5, 7],
    [0, 4, 6, 7],
];

/// Extract the iso-surface of `field` at `config.iso_level`.
///
/// Samples with `value > iso_level` are inside. The result is empty if
/// the field has fewer than two samples along any axis or if no lattice
/// edge crosses the level; callers decide whether that is an error.
///
/// # Errors
///
/// Returns [`IsosurfaceError::NonFiniteLevel`] for a NaN or infinite level
/// and [`IsosurfaceError::TooManyVertices`] if the surface cannot be
/// indexed with `u32`.
///
/// # Example
///
/// ```
/// use mesh_isosurface::{IsosurfaceConfig, ScalarGrid, extract_isosurface};
/// use nalgebra::Point3;
///
/// let grid = ScalarGrid::from_fn([12, 12, 12], Point3::new(-5.5, -5.5, -5.5), 1.0, |p| {
///     4.0 - p.coords.norm()
/// });
/// let config = IsosurfaceConfig::default().with_iso_level(0.0);
/// let sphere = extract_isosurface(&grid, &config).unwrap();
/// assert!(sphere.signed_volume() > 0.0);
/// ```
pub fn extract_isosurface<F: ScalarField + ?Sized>(
    field: &F,
    config: &IsosurfaceConfig,
) -> IsosurfaceResult<IndexedMesh> {
    let level = config.iso_level;
    if !level.is_finite() {
        return Err(IsosurfaceError::NonFiniteLevel(level));
    }

    let [nx, ny, nz] = field.dimensions();
    if nx < 2 || ny < 2 || nz < 2 {
        debug!(nx, ny, nz, "Field too small to contain cells");
        return Ok(IndexedMesh::new());
    }

    let mut builder = SurfaceBuilder::new(field, level);
    for z in 0..nz - 1 {
        for y in 0..ny - 1 {
            for x in 0..nx - 1 {
                builder.polygonize_cell([x, y, z])?;
            }
        }
    }

    let mesh = builder.mesh;
    debug!(
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        level,
        "Extracted iso-surface"
    );
    Ok(mesh)
}

/// One lattice corner of the cell being polygonized.
#[derive(Debug, Clone, Copy)]
struct Corner {
    /// Linear lattice index, x fastest.
    key: usize,
    value: f64,
    position: Point3<f64>,
}

struct SurfaceBuilder<'a, F: ?Sized> {
    field: &'a F,
    level: f64,
    dimensions: [usize; 3],
    /// Lattice edge `(low key, high key)` to output vertex.
    edge_vertices: HashMap<(usize, usize), u32>,
    mesh: IndexedMesh,
}

impl<'a, F: ScalarField + ?Sized> SurfaceBuilder<'a, F> {
    fn new(field: &'a F, level: f64) -> Self {
        Self {
            field,
            level,
            dimensions: field.dimensions(),
            edge_vertices: HashMap::new(),
            mesh: IndexedMesh::new(),
        }
    }

    fn polygonize_cell(&mut self, [x, y, z]: [usize; 3]) -> IsosurfaceResult<()> {
        let [nx, ny, _] = self.dimensions;
        let corners: [Corner; 8] = std::array::from_fn(|c| {
            let (cx, cy, cz) = (x + (c & 1), y + ((c >> 1) & 1), z + ((c >> 2) & 1));
            Corner {
                key: cx + nx * (cy + ny * cz),
                value: self.field.value(cx, cy, cz),
                position: self.field.position(cx, cy, cz),
            }
        });

        let inside_count = corners.iter().filter(|c| c.value > self.level).count();
        if inside_count == 0 || inside_count == 8 {
            return Ok(());
        }

        for tet in CUBE_TETRAHEDRA {
            self.polygonize_tetrahedron(tet.map(|c| corners[c]))?;
        }
        Ok(())
    }

    fn polygonize_tetrahedron(&mut self, tet: [Corner; 4]) -> IsosurfaceResult<()> {
        let mut inner = [tet[0]; 4];
        let mut outer = [tet[0]; 4];
        let (mut n_in, mut n_out) = (0, 0);
        for corner in tet {
            if corner.value > self.level {
                inner[n_in] = corner;
                n_in += 1;
            } else {
                outer[n_out] = corner;
                n_out += 1;
            }
        }

        match n_in {
            1 => {
                let a = inner[0];
                let tri = [
                    self.edge_vertex(a, outer[0])?,
                    self.edge_vertex(a, outer[1])?,
                    self.edge_vertex(a, outer[2])?,
                ];
                self.emit(tri, orientation(a, outer[0], outer[1], outer[2]) < 0.0);
            }
            3 => {
                let q = outer[0];
                let tri = [
                    self.edge_vertex(q, inner[0])?,
                    self.edge_vertex(q, inner[1])?,
                    self.edge_vertex(q, inner[2])?,
                ];
                self.emit(tri, orientation(q, inner[0], inner[1], inner[2]) > 0.0);
            }
            2 => {
                let (a, b) = (inner[0], inner[1]);
                let (c, d) = (outer[0], outer[1]);
                // cyclic: consecutive crossings share a tetrahedron face
                let quad = [
                    self.edge_vertex(a, c)?,
                    self.edge_vertex(a, d)?,
                    self.edge_vertex(b, d)?,
                    self.edge_vertex(b, c)?,
                ];
                let flip = orientation(a, b, c, d) < 0.0;
                self.emit([quad[0], quad[1], quad[2]], flip);
                self.emit([quad[0], quad[2], quad[3]], flip);
            }
            _ => {}
        }
        Ok(())
    }

    /// Vertex where the level crosses the edge between two corners.
    ///
    /// Corners are ordered by lattice key before interpolating, so the
    /// position does not depend on which cell reaches the edge first.
    fn edge_vertex(&mut self, a: Corner, b: Corner) -> IsosurfaceResult<u32> {
        let (lo, hi) = if a.key < b.key { (a, b) } else { (b, a) };
        if let Some(&index) = self.edge_vertices.get(&(lo.key, hi.key)) {
            return Ok(index);
        }

        let index = u32::try_from(self.mesh.vertices.len()).map_err(|_| {
            IsosurfaceError::TooManyVertices {
                limit: u32::MAX as usize,
            }
        })?;

        // one corner is inside and one outside, so the values differ
        let t = (self.level - lo.value) / (hi.value - lo.value);
        let position = lo.position + (hi.position - lo.position) * t;

        self.mesh.vertices.push(Vertex::new(position));
        self.edge_vertices.insert((lo.key, hi.key), index);
        Ok(index)
    }

    fn emit(&mut self, [i0, i1, i2]: [u32; 3], flip: bool) {
        if flip {
            self.mesh.faces.push([i0, i2, i1]);
        } else {
            self.mesh.faces.push([i0, i1, i2]);
        }
    }
}

/// Signed volume (times six) of the lattice tetrahedron `(o, a, b, c)`.
///
/// Winding is taken from this sign, never from face normals: a crossing
/// that lands exactly on a sample produces a zero-area face.
fn orientation(o: Corner, a: Corner, b: Corner, c: Corner) -> f64 {
    let (u, v, w) = (
        a.position - o.position,
        b.position - o.position,
        c.position - o.position,
    );
    u.dot(&v.cross(&w))
}

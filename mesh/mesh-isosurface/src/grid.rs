//! Dense scalar grid.

// Grid sizes stay far below 2^52
#![allow(clippy::cast_precision_loss)]

use nalgebra::Point3;

use crate::ScalarField;

/// A dense grid of `f64` samples with uniform spacing.
///
/// Values are stored with `x` varying fastest.
///
/// # Example
///
/// ```
/// use mesh_isosurface::{ScalarField, ScalarGrid};
/// use nalgebra::Point3;
///
/// let mut grid = ScalarGrid::new([4, 4, 4], Point3::new(-1.0, -1.0, -1.0), 0.5);
/// grid.set(1, 2, 3, 7.0);
///
/// assert_eq!(grid.dimensions(), [4, 4, 4]);
/// assert!((grid.value(1, 2, 3) - 7.0).abs() < f64::EPSILON);
/// assert!((grid.position(2, 0, 0).x - 0.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    values: Vec<f64>,
    dimensions: [usize; 3],
    origin: Point3<f64>,
    cell_size: f64,
}

impl ScalarGrid {
    /// Zero-filled grid with its first sample at `origin`.
    #[must_use]
    pub fn new(dimensions: [usize; 3], origin: Point3<f64>, cell_size: f64) -> Self {
        let [nx, ny, nz] = dimensions;
        Self {
            values: vec![0.0; nx * ny * nz],
            dimensions,
            origin,
            cell_size,
        }
    }

    /// Grid filled by evaluating `f` at every sample position.
    #[must_use]
    pub fn from_fn(
        dimensions: [usize; 3],
        origin: Point3<f64>,
        cell_size: f64,
        mut f: impl FnMut(Point3<f64>) -> f64,
    ) -> Self {
        let mut grid = Self::new(dimensions, origin, cell_size);
        let [nx, ny, nz] = dimensions;
        for z in 0..nz {
            for y in 0..ny {
                for x in 0..nx {
                    let value = f(grid.position(x, y, z));
                    grid.set(x, y, z, value);
                }
            }
        }
        grid
    }

    /// Position of sample `(0, 0, 0)`.
    #[must_use]
    pub const fn origin(&self) -> Point3<f64> {
        self.origin
    }

    /// Distance between neighboring samples.
    #[must_use]
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the grid has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample at `(x, y, z)`, `None` out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<f64> {
        self.offset(x, y, z).map(|i| self.values[i])
    }

    /// Overwrite a sample; out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: f64) {
        if let Some(i) = self.offset(x, y, z) {
            self.values[i] = value;
        }
    }

    fn offset(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        let [nx, ny, nz] = self.dimensions;
        (x < nx && y < ny && z < nz).then(|| x + nx * (y + ny * z))
    }
}

impl ScalarField for ScalarGrid {
    fn dimensions(&self) -> [usize; 3] {
        self.dimensions
    }

    fn value(&self, x: usize, y: usize, z: usize) -> f64 {
        self.get(x, y, z).unwrap_or(f64::NEG_INFINITY)
    }

    fn position(&self, x: usize, y: usize, z: usize) -> Point3<f64> {
        Point3::new(
            (x as f64).mul_add(self.cell_size, self.origin.x),
            (y as f64).mul_add(self.cell_size, self.origin.y),
            (z as f64).mul_add(self.cell_size, self.origin.z),
        )
    }
}

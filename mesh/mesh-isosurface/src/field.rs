//! Sampled scalar field abstraction.

use nalgebra::Point3;

/// A scalar field sampled on a regular `nx * ny * nz` lattice.
///
/// Lattice coordinates run from `0` to `dimension - 1` on each axis.
/// Callers only ask for in-range coordinates.
pub trait ScalarField {
    /// Sample counts `[nx, ny, nz]`.
    fn dimensions(&self) -> [usize; 3];

    /// Sample value at a lattice point.
    fn value(&self, x: usize, y: usize, z: usize) -> f64;

    /// Position of a lattice point in the output frame.
    ///
    /// Must be affine in `(x, y, z)` so interpolated vertices stay on the
    /// lattice edges.
    fn position(&self, x: usize, y: usize, z: usize) -> Point3<f64>;
}

impl<F: ScalarField + ?Sized> ScalarField for &F {
    fn dimensions(&self) -> [usize; 3] {
        (**self).dimensions()
    }

    fn value(&self, x: usize, y: usize, z: usize) -> f64 {
        (**self).value(x, y, z)
    }

    fn position(&self, x: usize, y: usize, z: usize) -> Point3<f64> {
        (**self).position(x, y, z)
    }
}

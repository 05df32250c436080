//! Quadric error metric.
//!
//! A quadric accumulates the squared distances to a set of planes, so the
//! cost of placing a merged vertex is one matrix evaluation.

use std::ops::{Add, AddAssign};

use mesh_types::Triangle;
use nalgebra::{Matrix3, Point3, Vector3};

/// Below this determinant the planes do not pin down a single point.
const SINGULAR_DETERMINANT: f64 = 1e-10;

/// Sum of squared plane distances, stored as `p^T A p + 2 b^T p + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadric {
    a: Matrix3<f64>,
    b: Vector3<f64>,
    c: f64,
}

impl Default for Quadric {
    fn default() -> Self {
        Self {
            a: Matrix3::zeros(),
            b: Vector3::zeros(),
            c: 0.0,
        }
    }
}

impl Quadric {
    /// Quadric of the plane `normal . p + offset = 0`.
    ///
    /// `normal` must be unit length.
    #[must_use]
    pub fn from_plane(normal: &Vector3<f64>, offset: f64) -> Self {
        Self {
            a: normal * normal.transpose(),
            b: normal * offset,
            c: offset * offset,
        }
    }

    /// Quadric of the plane through a triangle, `None` if it is degenerate.
    #[must_use]
    pub fn from_triangle(triangle: &Triangle) -> Option<Self> {
        let normal = triangle.normal()?;
        Some(Self::from_plane(&normal, -normal.dot(&triangle.v0.coords)))
    }

    /// Summed squared distance from `point` to the accumulated planes.
    #[must_use]
    pub fn error(&self, point: &Point3<f64>) -> f64 {
        let p = point.coords;
        let value = p.dot(&(self.a * p)) + 2.0 * self.b.dot(&p) + self.c;
        // Rounding can push an exact zero slightly negative
        value.max(0.0)
    }

    /// Point of least error, `None` when the planes leave it ambiguous.
    #[must_use]
    pub fn optimal_point(&self) -> Option<Point3<f64>> {
        if self.a.determinant().abs() < SINGULAR_DETERMINANT {
            return None;
        }
        let inverse = self.a.try_inverse()?;
        Some(Point3::from(-(inverse * self.b)))
    }
}

impl AddAssign for Quadric {
    fn add_assign(&mut self, other: Self) {
        self.a += other.a;
        self.b += other.b;
        self.c += other.c;
    }
}

impl Add for Quadric {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_quadric_has_no_error() {
        let q = Quadric::default();
        assert_relative_eq!(q.error(&Point3::new(1.0, 2.0, 3.0)), 0.0);
        assert!(q.optimal_point().is_none());
    }

    #[test]
    fn plane_error_is_squared_distance() {
        // z = 1
        let q = Quadric::from_plane(&Vector3::z(), -1.0);
        assert_relative_eq!(q.error(&Point3::new(4.0, -2.0, 1.0)), 0.0);
        assert_relative_eq!(q.error(&Point3::new(0.0, 0.0, 3.0)), 4.0);
    }

    #[test]
    fn three_planes_meet_at_optimal_point() {
        let q = Quadric::from_plane(&Vector3::x(), -1.0)
            + Quadric::from_plane(&Vector3::y(), -2.0)
            + Quadric::from_plane(&Vector3::z(), -3.0);

        let optimal = q.optimal_point();
        assert!(optimal.is_some());
        if let Some(p) = optimal {
            assert_relative_eq!(p, Point3::new(1.0, 2.0, 3.0), epsilon = 1e-10);
            assert_relative_eq!(q.error(&p), 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn coplanar_faces_leave_point_ambiguous() {
        let t1 = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        let t2 = Triangle::new(
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        let q = Quadric::from_triangle(&t1).unwrap_or_default()
            + Quadric::from_triangle(&t2).unwrap_or_default();

        assert!(q.optimal_point().is_none());
        assert_relative_eq!(q.error(&Point3::new(5.0, 5.0, 0.0)), 0.0);
        assert_relative_eq!(q.error(&Point3::new(0.0, 0.0, 0.5)), 0.5);
    }

    #[test]
    fn degenerate_triangle_has_no_quadric() {
        let p = Point3::new(1.0, 1.0, 1.0);
        assert!(Quadric::from_triangle(&Triangle::new(p, p, p)).is_none());
    }
}

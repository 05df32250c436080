//! 3D affine transformation.

use mesh_types::IndexedMesh;
use nalgebra::{Matrix3, Matrix4, Point3, RowVector4, Vector3};

use crate::error::{TransformError, TransformResult};

/// Determinants below this magnitude are treated as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

/// An affine transformation stored as a 4x4 homogeneous matrix.
///
/// # Example
///
/// ```
/// use mesh_transform::Transform3D;
/// use nalgebra::Point3;
///
/// let t = Transform3D::translation(1.0, 2.0, 3.0).then(&Transform3D::uniform_scale(2.0));
/// let p = t.transform_point(&Point3::origin());
/// assert!((p.z - 6.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    matrix: Matrix4<f64>,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Wrap an existing matrix.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NonFinite`] for NaN or infinite entries,
    /// [`TransformError::NotAffine`] if the bottom row is not `[0, 0, 0, 1]`
    /// and [`TransformError::NotInvertible`] if the linear part is singular.
    pub fn from_matrix(matrix: Matrix4<f64>) -> TransformResult<Self> {
        if matrix.iter().any(|v| !v.is_finite()) {
            return Err(TransformError::NonFinite);
        }

        let bottom = matrix.row(3).into_owned();
        if bottom != RowVector4::new(0.0, 0.0, 0.0, 1.0) {
            return Err(TransformError::NotAffine {
                row: [bottom[0], bottom[1], bottom[2], bottom[3]],
            });
        }

        let transform = Self { matrix };
        let determinant = transform.determinant();
        if determinant.abs() < SINGULAR_EPSILON {
            return Err(TransformError::NotInvertible { determinant });
        }

        Ok(transform)
    }

    /// The identity transformation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(tx, ty, tz)`.
    #[must_use]
    pub fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            matrix: Matrix4::new_translation(&Vector3::new(tx, ty, tz)),
        }
    }

    /// Uniform scaling about the origin.
    #[must_use]
    pub fn uniform_scale(factor: f64) -> Self {
        Self::scale(factor, factor, factor)
    }

    /// Per-axis scaling about the origin.
    #[must_use]
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz)),
        }
    }

    /// Rotation about the Z axis by `angle` radians.
    #[must_use]
    pub fn rotation_z(angle: f64) -> Self {
        Self {
            matrix: Matrix4::new_rotation(Vector3::z() * angle),
        }
    }

    /// The underlying matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Upper-left 3x3 block.
    #[must_use]
    pub fn linear(&self) -> Matrix3<f64> {
        self.matrix.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// Compose: apply `self` first, then `other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Inverse transformation, `None` if singular.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    /// Determinant of the linear part.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.linear().determinant()
    }

    /// True if the transform mirrors space (negative determinant).
    #[must_use]
    pub fn reverses_orientation(&self) -> bool {
        self.determinant() < 0.0
    }

    /// Transform a point (translation applies).
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.matrix.transform_point(point)
    }

    /// Transform a direction (translation ignored).
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.linear() * vector
    }

    /// Transform a surface normal with the inverse transpose.
    ///
    /// Returns the input unchanged if the linear part is singular.
    #[must_use]
    pub fn transform_normal(&self, normal: &Vector3<f64>) -> Vector3<f64> {
        self.linear()
            .try_inverse()
            .map_or(*normal, |inv| inv.transpose() * normal)
    }

    /// Apply the transform to every vertex of `mesh` in place.
    ///
    /// Normals are carried through the inverse transpose and renormalized.
    /// A mirroring transform also reverses face winding, so a mesh that
    /// was outward-facing stays outward-facing.
    pub fn apply_to_mesh(&self, mesh: &mut IndexedMesh) {
        let normal_matrix = self.linear().try_inverse().map(|inv| inv.transpose());

        for vertex in &mut mesh.vertices {
            vertex.position = self.transform_point(&vertex.position);
            if let (Some(normal), Some(m)) = (vertex.normal.as_mut(), normal_matrix.as_ref()) {
                if let Some(unit) = (m * *normal).try_normalize(f64::EPSILON) {
                    *normal = unit;
                }
            }
        }

        if self.reverses_orientation() {
            for face in &mut mesh.faces {
                face.swap(1, 2);
            }
        }
    }

    /// Transformed copy of `mesh`.
    #[must_use]
    pub fn transformed(&self, mesh: &IndexedMesh) -> IndexedMesh {
        let mut result = mesh.clone();
        self.apply_to_mesh(&mut result);
        result
    }
}

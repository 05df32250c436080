//! Oriented image: voxels plus image-to-world geometry.

use nalgebra::{Matrix3, Matrix4, Point3, RowVector4, Vector3};

use crate::{ImageError, ImageResult, IndexExtent, ScalarType, VoxelBuffer, VoxelIndex};

/// Linear parts with a smaller determinant magnitude are rejected.
const SINGULAR_EPSILON: f64 = 1e-12;

/// A dense voxel image with an affine image-to-world mapping.
///
/// The matrix maps homogeneous voxel index coordinates `(i, j, k, 1)` to
/// physical coordinates, so a voxel center lands at
/// `image_to_world * (i, j, k, 1)`. The matrix is always affine and
/// invertible.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientedImage {
    extent: IndexExtent,
    buffer: VoxelBuffer,
    image_to_world: Matrix4<f64>,
}

impl OrientedImage {
    /// Create an image with identity geometry.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::BufferLengthMismatch`] if the buffer length is
    /// not the extent's voxel count.
    pub fn new(extent: IndexExtent, buffer: impl Into<VoxelBuffer>) -> ImageResult<Self> {
        let buffer = buffer.into();
        let expected = extent.voxel_count();
        if buffer.len() != expected {
            return Err(ImageError::BufferLengthMismatch {
                expected,
                actual: buffer.len(),
            });
        }
        Ok(Self {
            extent,
            buffer,
            image_to_world: Matrix4::identity(),
        })
    }

    /// Zero-filled image with identity geometry.
    #[must_use]
    pub fn zeros(extent: IndexExtent, scalar_type: ScalarType) -> Self {
        Self {
            extent,
            buffer: VoxelBuffer::zeros(scalar_type, extent.voxel_count()),
            image_to_world: Matrix4::identity(),
        }
    }

    /// An image with no voxels.
    #[must_use]
    pub fn empty() -> Self {
        Self::zeros(IndexExtent::empty(), ScalarType::U8)
    }

    /// Builder form of [`set_image_to_world`](Self::set_image_to_world).
    ///
    /// # Errors
    ///
    /// See [`set_image_to_world`](Self::set_image_to_world).
    pub fn with_image_to_world(mut self, matrix: Matrix4<f64>) -> ImageResult<Self> {
        self.set_image_to_world(matrix)?;
        Ok(self)
    }

    /// Valid index range.
    #[must_use]
    pub const fn extent(&self) -> IndexExtent {
        self.extent
    }

    /// Voxel counts along `i`, `j` and `k`.
    #[must_use]
    pub fn dimensions(&self) -> [usize; 3] {
        self.extent.dimensions()
    }

    /// True if the image holds no voxels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Voxel storage.
    #[must_use]
    pub const fn buffer(&self) -> &VoxelBuffer {
        &self.buffer
    }

    /// Voxel encoding.
    #[must_use]
    pub const fn scalar_type(&self) -> ScalarType {
        self.buffer.scalar_type()
    }

    /// Current image-to-world matrix.
    #[must_use]
    pub const fn image_to_world(&self) -> &Matrix4<f64> {
        &self.image_to_world
    }

    /// Replace the image-to-world matrix.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::NonFiniteGeometry`], [`ImageError::NotAffine`]
    /// or [`ImageError::SingularGeometry`] for matrices that cannot place
    /// voxels; the current matrix is kept in that case.
    pub fn set_image_to_world(&mut self, matrix: Matrix4<f64>) -> ImageResult<()> {
        if matrix.iter().any(|v| !v.is_finite()) {
            return Err(ImageError::NonFiniteGeometry);
        }
        if matrix.row(3).into_owned() != RowVector4::new(0.0, 0.0, 0.0, 1.0) {
            return Err(ImageError::NotAffine);
        }
        let determinant = matrix.fixed_view::<3, 3>(0, 0).determinant();
        if determinant.abs() < SINGULAR_EPSILON {
            return Err(ImageError::SingularGeometry { determinant });
        }
        self.image_to_world = matrix;
        Ok(())
    }

    /// Set geometry from origin, per-axis spacing and axis directions.
    ///
    /// Column `n` of `directions` is the world direction of index axis `n`.
    ///
    /// # Errors
    ///
    /// Same as [`set_image_to_world`](Self::set_image_to_world).
    pub fn set_geometry(
        &mut self,
        origin: Point3<f64>,
        spacing: Vector3<f64>,
        directions: &Matrix3<f64>,
    ) -> ImageResult<()> {
        let linear = directions * Matrix3::from_diagonal(&spacing);
        let mut matrix = linear.to_homogeneous();
        matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(&origin.coords);
        self.set_image_to_world(matrix)
    }

    /// World position of index `(0, 0, 0)`.
    #[must_use]
    pub fn origin(&self) -> Point3<f64> {
        Point3::from(self.image_to_world.fixed_view::<3, 1>(0, 3).into_owned())
    }

    /// Voxel size along each index axis.
    #[must_use]
    pub fn spacing(&self) -> Vector3<f64> {
        let linear = self.image_to_world.fixed_view::<3, 3>(0, 0);
        Vector3::new(
            linear.column(0).norm(),
            linear.column(1).norm(),
            linear.column(2).norm(),
        )
    }

    /// Inverse of the image-to-world matrix.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::SingularGeometry`] if inversion fails
    /// numerically.
    pub fn world_to_image(&self) -> ImageResult<Matrix4<f64>> {
        self.image_to_world
            .try_inverse()
            .ok_or_else(|| ImageError::SingularGeometry {
                determinant: self.image_to_world.fixed_view::<3, 3>(0, 0).determinant(),
            })
    }

    /// World position of a voxel center. The index need not be inside the
    /// extent.
    #[must_use]
    pub fn index_to_world(&self, index: VoxelIndex) -> Point3<f64> {
        let p = Point3::new(
            f64::from(index.i),
            f64::from(index.j),
            f64::from(index.k),
        );
        self.image_to_world.transform_point(&p)
    }

    /// Voxel value widened to `f64`, `None` outside the extent.
    #[must_use]
    pub fn value(&self, index: VoxelIndex) -> Option<f64> {
        self.extent
            .linear_index(index)
            .and_then(|offset| self.buffer.value(offset))
    }

    /// Store a voxel value, converting to the image's encoding.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::OutOfBounds`] if `index` is outside the extent.
    pub fn set_value(&mut self, index: VoxelIndex, value: f64) -> ImageResult<()> {
        let stored = self
            .extent
            .linear_index(index)
            .is_some_and(|offset| self.buffer.set(offset, value));
        if stored {
            Ok(())
        } else {
            Err(ImageError::OutOfBounds { index })
        }
    }
}

impl Default for OrientedImage {
    fn default() -> Self {
        Self::empty()
    }
}

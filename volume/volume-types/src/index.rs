//! Voxel indices and index extents.

/// A voxel index `(i, j, k)`.
///
/// Indices are signed so that padded extents may start below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelIndex {
    /// Column index (fastest varying).
    pub i: i32,
    /// Row index.
    pub j: i32,
    /// Slice index (slowest varying).
    pub k: i32,
}

impl VoxelIndex {
    /// Create an index.
    #[must_use]
    pub const fn new(i: i32, j: i32, k: i32) -> Self {
        Self { i, j, k }
    }

    /// As an array `[i, j, k]`.
    #[must_use]
    pub const fn to_array(self) -> [i32; 3] {
        [self.i, self.j, self.k]
    }
}

impl From<[i32; 3]> for VoxelIndex {
    fn from([i, j, k]: [i32; 3]) -> Self {
        Self::new(i, j, k)
    }
}

/// Inclusive integer bounding box of valid voxel indices.
///
/// The extent is empty when `max < min` on any axis.
///
/// # Example
///
/// ```
/// use volume_types::{IndexExtent, VoxelIndex};
///
/// let extent = IndexExtent::new(VoxelIndex::new(0, 0, 0), VoxelIndex::new(9, 4, 1));
/// assert_eq!(extent.dimensions(), [10, 5, 2]);
/// assert_eq!(extent.voxel_count(), 100);
///
/// let padded = extent.grown(1).unwrap();
/// assert_eq!(padded.min, VoxelIndex::new(-1, -1, -1));
/// assert_eq!(padded.dimensions(), [12, 7, 4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexExtent {
    /// Lowest valid index on each axis.
    pub min: VoxelIndex,
    /// Highest valid index on each axis.
    pub max: VoxelIndex,
}

impl IndexExtent {
    /// Create an extent from inclusive corners.
    #[must_use]
    pub const fn new(min: VoxelIndex, max: VoxelIndex) -> Self {
        Self { min, max }
    }

    /// An extent with no voxels.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min: VoxelIndex::new(0, 0, 0),
            max: VoxelIndex::new(-1, -1, -1),
        }
    }

    /// Extent starting at the origin with the given voxel counts.
    ///
    /// Returns `None` if a count does not fit the `i32` index range.
    /// A zero count yields an empty extent.
    #[must_use]
    pub fn from_dimensions(dimensions: [usize; 3]) -> Option<Self> {
        if dimensions.contains(&0) {
            return Some(Self::empty());
        }
        let [nx, ny, nz] = dimensions.map(|n| i32::try_from(n - 1).ok());
        Some(Self::new(VoxelIndex::new(0, 0, 0), VoxelIndex::new(nx?, ny?, nz?)))
    }

    /// True if no index lies inside the extent.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.max.i < self.min.i || self.max.j < self.min.j || self.max.k < self.min.k
    }

    /// Voxel counts along `i`, `j` and `k`; all zero when empty.
    #[must_use]
    pub fn dimensions(&self) -> [usize; 3] {
        if self.is_empty() {
            return [0; 3];
        }
        let span = |lo: i32, hi: i32| usize::try_from(i64::from(hi) - i64::from(lo) + 1).unwrap_or(0);
        [
            span(self.min.i, self.max.i),
            span(self.min.j, self.max.j),
            span(self.min.k, self.max.k),
        ]
    }

    /// Total number of voxels.
    #[must_use]
    pub fn voxel_count(&self) -> usize {
        self.dimensions().iter().product()
    }

    /// True if `index` lies inside the extent.
    #[must_use]
    pub const fn contains(&self, index: VoxelIndex) -> bool {
        index.i >= self.min.i
            && index.i <= self.max.i
            && index.j >= self.min.j
            && index.j <= self.max.j
            && index.k >= self.min.k
            && index.k <= self.max.k
    }

    /// Offset of `index` into an `i`-fastest buffer, `None` outside the extent.
    #[must_use]
    pub fn linear_index(&self, index: VoxelIndex) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        let [nx, ny, _] = self.dimensions();
        let offset = |v: i32, lo: i32| usize::try_from(i64::from(v) - i64::from(lo)).ok();
        let (di, dj, dk) = (
            offset(index.i, self.min.i)?,
            offset(index.j, self.min.j)?,
            offset(index.k, self.min.k)?,
        );
        Some(di + nx * (dj + ny * dk))
    }

    /// Copy grown by `margin` voxels on every side.
    ///
    /// Returns `None` for an empty extent or if the result would leave the
    /// `i32` range.
    #[must_use]
    pub fn grown(&self, margin: i32) -> Option<Self> {
        if self.is_empty() {
            return None;
        }
        let lo = |v: i32| v.checked_sub(margin);
        let hi = |v: i32| v.checked_add(margin);
        let grown = Self::new(
            VoxelIndex::new(lo(self.min.i)?, lo(self.min.j)?, lo(self.min.k)?),
            VoxelIndex::new(hi(self.max.i)?, hi(self.max.j)?, hi(self.max.k)?),
        );
        (!grown.is_empty()).then_some(grown)
    }

    /// True if `index` is inside the extent and on one of its six faces.
    #[must_use]
    pub const fn is_on_boundary(&self, index: VoxelIndex) -> bool {
        self.contains(index)
            && (index.i == self.min.i
                || index.i == self.max.i
                || index.j == self.min.j
                || index.j == self.max.j
                || index.k == self.min.k
                || index.k == self.max.k)
    }
}

impl Default for IndexExtent {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(n: i32) -> IndexExtent {
        IndexExtent::new(VoxelIndex::new(0, 0, 0), VoxelIndex::new(n - 1, n - 1, n - 1))
    }

    #[test]
    fn index_array_conversion() {
        let index = VoxelIndex::from([-3, 0, 7]);
        assert_eq!(index, VoxelIndex::new(-3, 0, 7));
        assert_eq!(index.to_array(), [-3, 0, 7]);
    }

    #[test]
    fn empty_extent() {
        let extent = IndexExtent::empty();
        assert!(extent.is_empty());
        assert_eq!(extent.dimensions(), [0, 0, 0]);
        assert_eq!(extent.voxel_count(), 0);
        assert!(extent.grown(1).is_none());
        assert!(!extent.contains(VoxelIndex::new(0, 0, 0)));
    }

    #[test]
    fn from_dimensions() {
        let extent = IndexExtent::from_dimensions([3, 4, 5]);
        assert_eq!(
            extent,
            Some(IndexExtent::new(
                VoxelIndex::new(0, 0, 0),
                VoxelIndex::new(2, 3, 4)
            ))
        );
        assert_eq!(
            IndexExtent::from_dimensions([3, 0, 5]).map(|e| e.is_empty()),
            Some(true)
        );
        assert!(IndexExtent::from_dimensions([usize::MAX, 1, 1]).is_none());
    }

    #[test]
    fn linear_index_is_i_fastest() {
        let extent = IndexExtent::new(VoxelIndex::new(-1, -1, -1), VoxelIndex::new(1, 2, 3));
        assert_eq!(extent.dimensions(), [3, 4, 5]);
        assert_eq!(extent.linear_index(VoxelIndex::new(-1, -1, -1)), Some(0));
        assert_eq!(extent.linear_index(VoxelIndex::new(0, -1, -1)), Some(1));
        assert_eq!(extent.linear_index(VoxelIndex::new(-1, 0, -1)), Some(3));
        assert_eq!(extent.linear_index(VoxelIndex::new(-1, -1, 0)), Some(12));
        assert_eq!(extent.linear_index(VoxelIndex::new(1, 2, 3)), Some(59));
        assert_eq!(extent.linear_index(VoxelIndex::new(2, 0, 0)), None);
    }

    #[test]
    fn grown_overflow() {
        let extent = IndexExtent::new(VoxelIndex::new(i32::MIN, 0, 0), VoxelIndex::new(0, 0, 0));
        assert!(extent.grown(1).is_none());
    }

    #[test]
    fn boundary_classification() {
        let extent = cube(3);
        assert!(extent.is_on_boundary(VoxelIndex::new(0, 1, 1)));
        assert!(extent.is_on_boundary(VoxelIndex::new(1, 1, 2)));
        assert!(!extent.is_on_boundary(VoxelIndex::new(1, 1, 1)));
        assert!(!extent.is_on_boundary(VoxelIndex::new(3, 1, 1)));
    }
}

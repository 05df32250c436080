//! Voxel scalar encodings and typed storage.

/// Voxel scalar encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarType {
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit unsigned integer.
    U16,
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
}

impl ScalarType {
    /// Short lowercase name, e.g. `"u16"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    /// Bytes per voxel.
    #[must_use]
    pub const fn size_bytes(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::I32 | Self::F32 => 4,
            Self::F64 => 8,
        }
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed voxel storage, one variant per [`ScalarType`].
#[derive(Debug, Clone, PartialEq)]
pub enum VoxelBuffer {
    /// 8-bit unsigned voxels.
    U8(Vec<u8>),
    /// 16-bit unsigned voxels.
    U16(Vec<u16>),
    /// 16-bit signed voxels.
    I16(Vec<i16>),
    /// 32-bit signed voxels.
    I32(Vec<i32>),
    /// 32-bit float voxels.
    F32(Vec<f32>),
    /// 64-bit float voxels.
    F64(Vec<f64>),
}

/// Run `$body` with `$values` bound to the inner `Vec` of any variant.
macro_rules! with_values {
    ($buffer:expr, $values:ident => $body:expr) => {
        match $buffer {
            VoxelBuffer::U8($values) => $body,
            VoxelBuffer::U16($values) => $body,
            VoxelBuffer::I16($values) => $body,
            VoxelBuffer::I32($values) => $body,
            VoxelBuffer::F32($values) => $body,
            VoxelBuffer::F64($values) => $body,
        }
    };
}

impl VoxelBuffer {
    /// Zero-filled buffer of `len` voxels.
    #[must_use]
    pub fn zeros(scalar_type: ScalarType, len: usize) -> Self {
        match scalar_type {
            ScalarType::U8 => Self::U8(vec![0; len]),
            ScalarType::U16 => Self::U16(vec![0; len]),
            ScalarType::I16 => Self::I16(vec![0; len]),
            ScalarType::I32 => Self::I32(vec![0; len]),
            ScalarType::F32 => Self::F32(vec![0.0; len]),
            ScalarType::F64 => Self::F64(vec![0.0; len]),
        }
    }

    /// Encoding of the stored voxels.
    #[must_use]
    pub const fn scalar_type(&self) -> ScalarType {
        match self {
            Self::U8(_) => ScalarType::U8,
            Self::U16(_) => ScalarType::U16,
            Self::I16(_) => ScalarType::I16,
            Self::I32(_) => ScalarType::I32,
            Self::F32(_) => ScalarType::F32,
            Self::F64(_) => ScalarType::F64,
        }
    }

    /// Number of voxels.
    #[must_use]
    pub fn len(&self) -> usize {
        with_values!(self, values => values.len())
    }

    /// True if the buffer holds no voxels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Voxel at `offset` widened to `f64`.
    #[must_use]
    pub fn value(&self, offset: usize) -> Option<f64> {
        match self {
            Self::U8(v) => v.get(offset).copied().map(f64::from),
            Self::U16(v) => v.get(offset).copied().map(f64::from),
            Self::I16(v) => v.get(offset).copied().map(f64::from),
            Self::I32(v) => v.get(offset).copied().map(f64::from),
            Self::F32(v) => v.get(offset).copied().map(f64::from),
            Self::F64(v) => v.get(offset).copied(),
        }
    }

    /// Store `value` at `offset`, converting with saturation.
    ///
    /// Returns `false` if `offset` is out of range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set(&mut self, offset: usize, value: f64) -> bool {
        let stored = match self {
            Self::U8(v) => v.get_mut(offset).map(|s| *s = value as u8),
            Self::U16(v) => v.get_mut(offset).map(|s| *s = value as u16),
            Self::I16(v) => v.get_mut(offset).map(|s| *s = value as i16),
            Self::I32(v) => v.get_mut(offset).map(|s| *s = value as i32),
            Self::F32(v) => v.get_mut(offset).map(|s| *s = value as f32),
            Self::F64(v) => v.get_mut(offset).map(|s| *s = value),
        };
        stored.is_some()
    }
}

macro_rules! impl_from_vec {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$ty>> for VoxelBuffer {
                fn from(values: Vec<$ty>) -> Self {
                    Self::$variant(values)
                }
            }
        )*
    };
}

impl_from_vec!(u8 => U8, u16 => U16, i16 => I16, i32 => I32, f32 => F32, f64 => F64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_matches_type() {
        for ty in [
            ScalarType::U8,
            ScalarType::U16,
            ScalarType::I16,
            ScalarType::I32,
            ScalarType::F32,
            ScalarType::F64,
        ] {
            let buffer = VoxelBuffer::zeros(ty, 7);
            assert_eq!(buffer.scalar_type(), ty);
            assert_eq!(buffer.len(), 7);
            assert_eq!(buffer.value(6), Some(0.0));
            assert_eq!(buffer.value(7), None);
        }
    }

    #[test]
    fn set_saturates() {
        let mut buffer = VoxelBuffer::zeros(ScalarType::U8, 2);
        assert!(buffer.set(0, 300.0));
        assert!(buffer.set(1, -4.0));
        assert!(!buffer.set(2, 1.0));
        assert_eq!(buffer, VoxelBuffer::U8(vec![255, 0]));
    }

    #[test]
    fn signed_values_widen() {
        let buffer = VoxelBuffer::from(vec![-3_i16, 7]);
        assert_eq!(buffer.value(0), Some(-3.0));
        assert_eq!(buffer.scalar_type(), ScalarType::I16);
        assert_eq!(ScalarType::I16.size_bytes(), 2);
        assert_eq!(ScalarType::F32.to_string(), "f32");
    }
}

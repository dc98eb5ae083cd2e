//! Shape metadata

use super::DataType;
use crate::error::{MixArrayError, Result};

/// Largest rank a shape may have
pub const MAX_RANK: usize = 32;

/// Dimensions plus element data type of an array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    dims: Vec<usize>,
    dtype: DataType,
}

impl Shape {
    /// Build a shape, rejecting negative dimensions.
    ///
    /// An empty `dims` is a rank-0 (scalar) shape holding one element.
    pub fn new(dims: &[i64], dtype: DataType) -> Result<Self> {
        let mut checked = Vec::with_capacity(dims.len());
        for &d in dims {
            let d = usize::try_from(d).map_err(|_| MixArrayError::InvalidShape {
                dims: dims.to_vec(),
                reason: "negative dimension",
            })?;
            checked.push(d);
        }
        Self::from_dims(checked, dtype)
    }

    /// Build a shape from already non-negative dimensions
    pub fn from_dims(dims: Vec<usize>, dtype: DataType) -> Result<Self> {
        if dims.len() > MAX_RANK {
            return Err(MixArrayError::InvalidShape {
                dims: dims.iter().map(|&d| d as i64).collect(),
                reason: "rank exceeds MAX_RANK",
            });
        }
        let shape = Self { dims, dtype };
        shape.byte_len()?;
        Ok(shape)
    }

    /// Rank-0 shape
    pub fn scalar(dtype: DataType) -> Self {
        Self {
            dims: Vec::new(),
            dtype,
        }
    }

    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    #[inline]
    pub fn dtype(&self) -> DataType {
        self.dtype
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }

    /// Total number of elements (1 for a scalar)
    #[inline]
    pub fn len(&self) -> usize {
        self.dims.iter().product()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Storage size in bytes
    pub fn byte_len(&self) -> Result<usize> {
        let elements = self
            .dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| MixArrayError::allocation("element count overflows usize"))?;
        elements
            .checked_mul(self.dtype.byte_width())
            .ok_or_else(|| {
                MixArrayError::allocation(format!(
                    "{} elements of {} bytes overflows usize",
                    elements,
                    self.dtype.byte_width()
                ))
            })
    }

    /// Row-major strides in elements
    pub fn strides(&self) -> Vec<usize> {
        let mut strides = vec![1usize; self.dims.len()];
        for i in (0..self.dims.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * self.dims[i + 1];
        }
        strides
    }
}

//! Contiguous typed storage

use super::dtype::dispatch;
use super::{DataType, Element, Literal};
use crate::error::{MixArrayError, Result};
use tracing::{debug, trace};

/// Little-endian storage for `len` elements of a single data type
#[derive(Debug, Clone, PartialEq)]
pub struct TypedBuffer {
    dtype: DataType,
    data: Vec<u8>,
}

impl TypedBuffer {
    /// Allocate zero-filled storage
    pub fn allocate(len: usize, dtype: DataType) -> Result<Self> {
        let bytes = len.checked_mul(dtype.byte_width()).ok_or_else(|| {
            MixArrayError::allocation(format!(
                "{} elements of {} bytes overflows usize",
                len,
                dtype.byte_width()
            ))
        })?;
        trace!(len, %dtype, bytes, "allocating buffer");
        Ok(Self {
            dtype,
            data: vec![0u8; bytes],
        })
    }

    /// Adopt raw little-endian bytes
    pub fn from_bytes(dtype: DataType, data: Vec<u8>) -> Result<Self> {
        let width = dtype.byte_width();
        if data.len() % width != 0 {
            let expected = (data.len() / width + 1) * width;
            return Err(MixArrayError::DataSizeMismatch {
                expected: expected as u64,
                actual: data.len() as u64,
            });
        }
        Ok(Self { dtype, data })
    }

    /// Build from typed values, one element per value
    pub fn from_elements<T: Element>(values: &[T]) -> Self {
        let width = T::DTYPE.byte_width();
        let mut data = vec![0u8; values.len() * width];
        for (chunk, &v) in data.chunks_exact_mut(width).zip(values) {
            v.write_le(chunk);
        }
        Self {
            dtype: T::DTYPE,
            data,
        }
    }

    #[inline]
    pub fn dtype(&self) -> DataType {
        self.dtype
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.dtype.byte_width()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn slot(&self, index: usize) -> Result<&[u8]> {
        let width = self.dtype.byte_width();
        if index >= self.len() {
            return Err(MixArrayError::IndexOutOfRange {
                index,
                length: self.len(),
            });
        }
        Ok(&self.data[index * width..(index + 1) * width])
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut [u8]> {
        let width = self.dtype.byte_width();
        let length = self.len();
        if index >= length {
            return Err(MixArrayError::IndexOutOfRange { index, length });
        }
        Ok(&mut self.data[index * width..(index + 1) * width])
    }

    /// Stored value at `index` in its native type
    pub fn read(&self, index: usize) -> Result<Literal> {
        let bytes = self.slot(index)?;
        Ok(decode(self.dtype, bytes))
    }

    /// Stored value at `index` converted to `T`
    pub fn get<T: Element>(&self, index: usize) -> Result<T> {
        self.read(index).map(T::from_literal)
    }

    /// Convert `value` to the buffer's type and store it at `index`
    pub fn put(&mut self, index: usize, value: Literal) -> Result<()> {
        let dtype = self.dtype;
        let slot = self.slot_mut(index)?;
        note_narrowing(dtype, value);
        encode(dtype, value, slot);
        Ok(())
    }

    /// Convert `value` once and write it into every slot
    pub fn assign_uniform(&mut self, value: Literal) {
        note_narrowing(self.dtype, value);
        let width = self.dtype.byte_width();
        let mut scratch = [0u8; 8];
        encode(self.dtype, value, &mut scratch[..width]);
        for chunk in self.data.chunks_exact_mut(width) {
            chunk.copy_from_slice(&scratch[..width]);
        }
    }

    /// Snapshot of every element converted to `T`, in index order
    pub fn to_vec<T: Element>(&self) -> Vec<T> {
        let dtype = self.dtype;
        self.data
            .chunks_exact(dtype.byte_width())
            .map(|chunk| T::from_literal(decode(dtype, chunk)))
            .collect()
    }

    /// Copy of this buffer with every element converted to `dtype`
    pub fn cast(&self, dtype: DataType) -> Self {
        if dtype == self.dtype {
            return self.clone();
        }
        let src_width = self.dtype.byte_width();
        let dst_width = dtype.byte_width();
        let mut data = vec![0u8; self.len() * dst_width];
        for (src, dst) in self
            .data
            .chunks_exact(src_width)
            .zip(data.chunks_exact_mut(dst_width))
        {
            encode(dtype, decode(self.dtype, src), dst);
        }
        Self { dtype, data }
    }
}

fn decode(dtype: DataType, bytes: &[u8]) -> Literal {
    dispatch!(dtype, T => T::read_le(bytes).into_literal())
}

fn encode(dtype: DataType, value: Literal, out: &mut [u8]) {
    dispatch!(dtype, T => T::from_literal(value).write_le(out))
}

fn note_narrowing(dtype: DataType, value: Literal) {
    if !dtype.can_represent(value) {
        debug!(?value, %dtype, "value does not fit, storing converted value");
    }
}

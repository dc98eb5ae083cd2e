//! Typed N-dimensional array

use super::{DataType, Element, Literal, Shape, TypedBuffer};
use crate::error::{MixArrayError, Result};
use crate::writer::shape::shape_info_bytes;
use half::f16;

/// An N-dimensional array owning its shape and storage.
///
/// Shape and data type are fixed at construction; only element values
/// change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    shape: Shape,
    buffer: TypedBuffer,
}

impl Array {
    /// Zero-filled array of the given shape
    pub fn zeros(shape: Shape) -> Result<Self> {
        let buffer = TypedBuffer::allocate(shape.len(), shape.dtype())?;
        Ok(Self { shape, buffer })
    }

    /// Pair a shape with existing storage
    pub fn from_parts(shape: Shape, buffer: TypedBuffer) -> Result<Self> {
        if shape.dtype() != buffer.dtype() {
            return Err(MixArrayError::InvalidDataType(format!(
                "shape is {} but buffer is {}",
                shape.dtype(),
                buffer.dtype()
            )));
        }
        if shape.len() != buffer.len() {
            return Err(MixArrayError::DataSizeMismatch {
                expected: shape.byte_len()? as u64,
                actual: buffer.as_bytes().len() as u64,
            });
        }
        Ok(Self { shape, buffer })
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn dims(&self) -> &[usize] {
        self.shape.dims()
    }

    #[inline]
    pub fn data_type(&self) -> DataType {
        self.buffer.dtype()
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Number of elements
    #[inline]
    pub fn length(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.shape.is_scalar()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Raw little-endian storage
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Backing storage
    pub fn buffer(&self) -> &TypedBuffer {
        &self.buffer
    }

    /// Serialized shape metadata, see [`crate::shape_info_data_type`]
    pub fn shape_info(&self) -> Vec<u8> {
        shape_info_bytes(&self.shape)
    }

    /// Set every element to `value`, converted to the array's data type
    pub fn assign(&mut self, value: impl Into<Literal>) -> &mut Self {
        self.buffer.assign_uniform(value.into());
        self
    }

    /// Set the element at flat `index`
    pub fn put_scalar(&mut self, index: usize, value: impl Into<Literal>) -> Result<&mut Self> {
        self.buffer.put(index, value.into())?;
        Ok(self)
    }

    /// Element at flat `index` converted to `T`
    pub fn get<T: Element>(&self, index: usize) -> Result<T> {
        self.buffer.get(index)
    }

    pub fn get_double(&self, index: usize) -> Result<f64> {
        self.get(index)
    }

    pub fn get_float(&self, index: usize) -> Result<f32> {
        self.get(index)
    }

    pub fn get_half(&self, index: usize) -> Result<f16> {
        self.get(index)
    }

    pub fn get_int(&self, index: usize) -> Result<i32> {
        self.get(index)
    }

    pub fn get_long(&self, index: usize) -> Result<i64> {
        self.get(index)
    }

    pub fn get_short(&self, index: usize) -> Result<i16> {
        self.get(index)
    }

    pub fn get_bool(&self, index: usize) -> Result<bool> {
        self.get(index)
    }

    /// All elements converted to `T`, in row-major order
    pub fn to_vector<T: Element>(&self) -> Vec<T> {
        self.buffer.to_vec()
    }

    pub fn to_long_vector(&self) -> Vec<i64> {
        self.to_vector()
    }

    pub fn to_int_vector(&self) -> Vec<i32> {
        self.to_vector()
    }

    pub fn to_double_vector(&self) -> Vec<f64> {
        self.to_vector()
    }

    pub fn to_float_vector(&self) -> Vec<f32> {
        self.to_vector()
    }

    /// Copy with the same dims and every element converted to `dtype`
    pub fn cast_to(&self, dtype: DataType) -> Result<Array> {
        let shape = Shape::from_dims(self.dims().to_vec(), dtype)?;
        Ok(Array {
            shape,
            buffer: self.buffer.cast(dtype),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::shape::data_type;

    fn array(dims: &[i64], dtype: DataType) -> Array {
        Array::zeros(Shape::new(dims, dtype).unwrap()).unwrap()
    }

    #[test]
    fn zeros_metadata() {
        for dtype in DataType::ALL {
            let a = array(&[3, 3], dtype);
            assert_eq!(a.length(), 9);
            assert_eq!(a.rank(), 2);
            assert_eq!(a.data_type(), dtype);
            assert_eq!(data_type(&a.shape_info()).unwrap(), dtype);
        }
    }

    #[test]
    fn assign_int_read_long() {
        let mut a = array(&[3, 3], DataType::Int);
        a.assign(1);
        assert_eq!(a.to_long_vector(), vec![1i64; 9]);
        assert_eq!(a.to_double_vector(), vec![1.0; 9]);
    }

    #[test]
    fn cross_type_getters() {
        let mut a = array(&[2], DataType::Half);
        a.assign(0.5);
        assert_eq!(a.get_double(1).unwrap(), 0.5);
        assert_eq!(a.get_float(0).unwrap(), 0.5);
        assert_eq!(a.get_int(0).unwrap(), 0);
        assert!(a.get_bool(0).unwrap());
        assert_eq!(a.get_half(0).unwrap(), f16::from_f32(0.5));
    }

    #[test]
    fn put_scalar_chains() {
        let mut a = array(&[2, 2], DataType::Long);
        a.put_scalar(0, 4i64)
            .unwrap()
            .put_scalar(3, 9)
            .unwrap();
        assert_eq!(a.to_long_vector(), vec![4, 0, 0, 9]);
        assert_eq!(
            a.put_scalar(4, 1).unwrap_err(),
            MixArrayError::IndexOutOfRange {
                index: 4,
                length: 4
            }
        );
    }

    #[test]
    fn cast_keeps_dims() {
        let mut a = array(&[2, 3], DataType::Double);
        a.assign(2.5);
        let b = a.cast_to(DataType::Short).unwrap();
        assert_eq!(b.dims(), &[2, 3]);
        assert_eq!(b.data_type(), DataType::Short);
        assert_eq!(b.get_short(5).unwrap(), 2);
        assert_eq!(data_type(&b.shape_info()).unwrap(), DataType::Short);
    }

    #[test]
    fn from_parts_validates() {
        let shape = Shape::new(&[2], DataType::Int).unwrap();
        let buf = TypedBuffer::from_elements(&[1i32, 2, 3]);
        assert!(matches!(
            Array::from_parts(shape.clone(), buf),
            Err(MixArrayError::DataSizeMismatch { .. })
        ));
        let buf = TypedBuffer::from_elements(&[1i64, 2]);
        assert!(matches!(
            Array::from_parts(shape.clone(), buf),
            Err(MixArrayError::InvalidDataType(_))
        ));
        let buf = TypedBuffer::from_elements(&[1i32, 2]);
        let a = Array::from_parts(shape, buf).unwrap();
        assert_eq!(a.to_int_vector(), vec![1, 2]);
    }

    #[test]
    fn accessors_idempotent() {
        let a = array(&[4, 2], DataType::Float);
        assert_eq!(a.data_type(), a.data_type());
        assert_eq!(a.rank(), a.rank());
        assert_eq!(a.length(), a.length());
    }

    #[test]
    fn empty_array() {
        let a = array(&[0], DataType::Int);
        assert_eq!(a.length(), 0);
        assert!(a.is_empty());
        assert!(a.to_long_vector().is_empty());
        assert!(a.get_int(0).is_err());
    }
}

//! ndarray integration for mixarray arrays
//!
//! Conversions between [`Array`] and ndarray's `ArrayD`. Reading into
//! ndarray goes through the same element conversion as the typed getters,
//! so an `int` array can be read as `ArrayD<f64>`.
//!
//! Enable with the `ndarray` feature flag.

use crate::error::{MixArrayError, Result};
use crate::types::{Array, Element, Shape, TypedBuffer};
use ndarray::{ArrayD, IxDyn};

// =============================================================================
// From ndarray to mixarray
// =============================================================================

impl Array {
    /// Create an Array from an ndarray ArrayD
    ///
    /// Any memory layout is accepted; elements are copied in logical
    /// row-major order.
    pub fn from_ndarray<T: Element>(arr: ArrayD<T>) -> Result<Self> {
        let shape = Shape::from_dims(arr.shape().to_vec(), T::DTYPE)?;
        let elements: Vec<T> = arr.iter().copied().collect();
        Array::from_parts(shape, TypedBuffer::from_elements(&elements))
    }
}

// =============================================================================
// From mixarray to ndarray
// =============================================================================

impl Array {
    /// Convert to an ndarray ArrayD, converting each element to `T`
    pub fn to_ndarray<T: Element>(&self) -> Result<ArrayD<T>> {
        ArrayD::from_shape_vec(IxDyn(self.dims()), self.to_vector::<T>()).map_err(|_| {
            MixArrayError::InvalidShape {
                dims: self.dims().iter().map(|&d| d as i64).collect(),
                reason: "shape does not match element count",
            }
        })
    }
}

//! Array constructors

use crate::error::{MixArrayError, Result};
use crate::types::{Array, DataType, Element, Literal, Shape, TypedBuffer};
use tracing::debug;

/// Settings threaded into every [`Factory`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryConfig {
    /// Data type used by [`Factory::create_default`]
    pub default_float_type: DataType,
    /// Largest buffer, in bytes, the factory will allocate
    pub max_allocation_bytes: Option<usize>,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            default_float_type: DataType::Float,
            max_allocation_bytes: None,
        }
    }
}

impl FactoryConfig {
    pub fn with_default_float_type(mut self, dtype: DataType) -> Self {
        self.default_float_type = dtype;
        self
    }

    pub fn with_max_allocation_bytes(mut self, limit: usize) -> Self {
        self.max_allocation_bytes = Some(limit);
        self
    }
}

/// Builds arrays according to a [`FactoryConfig`]
#[derive(Debug, Clone, Default)]
pub struct Factory {
    config: FactoryConfig,
}

impl Factory {
    pub fn new(config: FactoryConfig) -> Self {
        Self { config }
    }

    /// Zero-filled array of `dtype` with the given dims
    pub fn create(&self, dtype: DataType, dims: &[i64]) -> Result<Array> {
        let shape = Shape::new(dims, dtype)?;
        debug!(?dims, %dtype, "creating array");
        self.allocate(shape)
    }

    /// Zero-filled array of the configured default float type
    pub fn create_default(&self, dims: &[i64]) -> Result<Array> {
        self.create(self.config.default_float_type, dims)
    }

    /// Rank-0 array whose data type is inferred from `value`
    pub fn true_scalar(&self, value: impl Into<Literal>) -> Result<Array> {
        let value = value.into();
        let dtype = value.inferred_type()?;
        self.scalar_of(dtype, value)
    }

    /// Rank-0 array of an explicit data type
    pub fn scalar_of(&self, dtype: DataType, value: impl Into<Literal>) -> Result<Array> {
        let mut scalar = self.allocate(Shape::scalar(dtype))?;
        scalar.assign(value);
        Ok(scalar)
    }

    /// Array of `dtype` with every element set to `value`
    pub fn value_array_of(
        &self,
        dtype: DataType,
        dims: &[i64],
        value: impl Into<Literal>,
    ) -> Result<Array> {
        let mut arr = self.create(dtype, dims)?;
        arr.assign(value);
        Ok(arr)
    }

    /// Array holding `data` in row-major order, typed after `T`
    pub fn create_from_vec<T: Element>(&self, data: Vec<T>, dims: &[i64]) -> Result<Array> {
        let shape = Shape::new(dims, T::DTYPE)?;
        if shape.len() != data.len() {
            return Err(MixArrayError::InvalidShape {
                dims: dims.to_vec(),
                reason: "element count does not match data length",
            });
        }
        self.check_limit(&shape)?;
        Array::from_parts(shape, TypedBuffer::from_elements(&data))
    }

    fn allocate(&self, shape: Shape) -> Result<Array> {
        self.check_limit(&shape)?;
        Array::zeros(shape)
    }

    fn check_limit(&self, shape: &Shape) -> Result<()> {
        let bytes = shape.byte_len()?;
        match self.config.max_allocation_bytes {
            Some(limit) if bytes > limit => Err(MixArrayError::allocation(format!(
                "{} bytes exceeds limit of {}",
                bytes, limit
            ))),
            _ => Ok(()),
        }
    }
}

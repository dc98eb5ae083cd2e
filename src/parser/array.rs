//! Array parsing

use super::primitives::u64_le;
use super::shape::parse_shape_info_body;
use super::take::ByteCursor;
use crate::error::{MixArrayError, Result};
use crate::types::{Array, TypedBuffer};
use tracing::trace;

/// Parse an array body: shape info, data length, data
pub fn parse_array_body(cursor: &mut ByteCursor<'_>) -> Result<Array> {
    let shape = parse_shape_info_body(cursor)?;

    let data_size = u64_le(cursor)?;
    let expected = shape.byte_len()? as u64;
    if data_size != expected {
        return Err(MixArrayError::DataSizeMismatch {
            expected,
            actual: data_size,
        });
    }

    let data = cursor.take(expected as usize)?;
    trace!(dims = ?shape.dims(), dtype = %shape.dtype(), "parsed array");
    let buffer = TypedBuffer::from_bytes(shape.dtype(), data.to_vec())?;
    Array::from_parts(shape, buffer)
}

//! Shape info parsing

use super::primitives::{u8_le, u64_le};
use super::take::ByteCursor;
use crate::error::{MixArrayError, Result};
use crate::types::{DataType, MAX_RANK, Shape};

/// Parse shape info at the cursor
pub fn parse_shape_info_body(cursor: &mut ByteCursor<'_>) -> Result<Shape> {
    let dtype = DataType::try_from(u8_le(cursor)?)?;
    let rank = u8_le(cursor)? as usize;
    if rank > MAX_RANK {
        return Err(MixArrayError::InvalidShape {
            dims: Vec::new(),
            reason: "rank exceeds MAX_RANK",
        });
    }
    let mut dims = Vec::with_capacity(rank);
    for _ in 0..rank {
        let dim = u64_le(cursor)?;
        let dim = usize::try_from(dim)
            .map_err(|_| MixArrayError::allocation(format!("dimension {} overflows usize", dim)))?;
        dims.push(dim);
    }
    Shape::from_dims(dims, dtype)
}

/// Parse serialized shape info
pub fn parse_shape_info(info: &[u8]) -> Result<Shape> {
    parse_shape_info_body(&mut ByteCursor::new(info))
}

/// Data type recorded in serialized shape info.
///
/// Reads only the leading tag, so it works without the array itself.
pub fn data_type(info: &[u8]) -> Result<DataType> {
    let tag = u8_le(&mut ByteCursor::new(info))?;
    DataType::try_from(tag)
}

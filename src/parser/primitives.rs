//! Little-endian primitive readers

use super::take::ByteCursor;
use crate::error::Result;

pub fn u8_le(cursor: &mut ByteCursor<'_>) -> Result<u8> {
    Ok(cursor.take(1)?[0])
}

pub fn u32_le(cursor: &mut ByteCursor<'_>) -> Result<u32> {
    let bytes = cursor.take(4)?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

pub fn u64_le(cursor: &mut ByteCursor<'_>) -> Result<u64> {
    let bytes = cursor.take(8)?;
    Ok(u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ]))
}

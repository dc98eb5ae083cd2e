//! Shape info serialization

use crate::types::Shape;
use std::io::{self, Write};

/// Encode shape info: dtype tag, rank, then each dim as u64 LE
pub fn shape_info_bytes(shape: &Shape) -> Vec<u8> {
    let mut info = Vec::with_capacity(2 + 8 * shape.rank());
    info.push(shape.dtype().tag());
    // MAX_RANK keeps the rank within a byte
    info.push(shape.rank() as u8);
    for &dim in shape.dims() {
        info.extend_from_slice(&(dim as u64).to_le_bytes());
    }
    info
}

/// Write shape info
pub fn write_shape_info<W: Write>(writer: &mut W, shape: &Shape) -> io::Result<()> {
    writer.write_all(&shape_info_bytes(shape))
}

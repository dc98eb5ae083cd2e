//! Array serialization

use super::shape::write_shape_info;
use crate::types::Array;
use std::io::{self, Write};

/// Write an array body: shape info, data length, data
pub fn write_array<W: Write>(writer: &mut W, arr: &Array) -> io::Result<()> {
    write_shape_info(writer, arr.shape())?;
    writer.write_all(&(arr.as_bytes().len() as u64).to_le_bytes())?;
    writer.write_all(arr.as_bytes())?;
    Ok(())
}

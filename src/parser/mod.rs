//! Binary parser for serialized arrays

pub mod array;
pub mod primitives;
pub mod shape;
pub mod take;

use crate::error::{MixArrayError, Result};
use crate::types::{Array, HEADER_SIZE, MAGIC, VERSION};
use array::parse_array_body;
use primitives::u32_le;
use take::ByteCursor;

/// Parse an array from bytes written by [`crate::writer::write`]
pub fn parse(bytes: &[u8]) -> Result<Array> {
    // Check minimum size for header
    if bytes.len() < HEADER_SIZE {
        return Err(MixArrayError::UnexpectedEof { position: 0 });
    }

    let mut cursor = ByteCursor::new(bytes);
    if cursor.take(MAGIC.len())? != MAGIC {
        return Err(MixArrayError::InvalidMagic);
    }

    let version = u32_le(&mut cursor)?;
    if version != VERSION {
        return Err(MixArrayError::UnsupportedVersion(version));
    }
    let _flags = u32_le(&mut cursor)?;

    parse_array_body(&mut cursor)
}

//! Serialization of arrays

pub mod array;
pub mod shape;

use crate::types::{Array, MAGIC, VERSION};
use std::io::{self, Write};

use array::write_array;

/// Write an array with header to a writer
pub fn write<W: Write>(writer: &mut W, arr: &Array) -> io::Result<()> {
    writer.write_all(MAGIC)?;
    writer.write_all(&VERSION.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?; // flags (reserved)

    write_array(writer, arr)?;

    Ok(())
}

/// Write an array to bytes
pub fn to_bytes(arr: &Array) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    write(&mut buf, arr)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DataType, HEADER_SIZE, Shape};

    #[test]
    fn test_write_header() {
        let arr = Array::zeros(Shape::new(&[3, 3], DataType::Int).unwrap()).unwrap();
        let bytes = to_bytes(&arr).unwrap();

        assert_eq!(&bytes[0..8], MAGIC);
        assert_eq!(
            u32::from_le_bytes(bytes[8..12].try_into().unwrap()),
            VERSION
        );
        assert_eq!(u32::from_le_bytes(bytes[12..16].try_into().unwrap()), 0);
        assert_eq!(bytes[HEADER_SIZE], DataType::Int as u8);
    }

    #[test]
    fn test_write_size() {
        let arr = Array::zeros(Shape::new(&[2, 2], DataType::Double).unwrap()).unwrap();
        let bytes = to_bytes(&arr).unwrap();
        // header + tag + rank + dims + data_len + data
        assert_eq!(bytes.len(), HEADER_SIZE + 2 + 16 + 8 + 32);
    }

    #[test]
    fn test_write_failing_writer() {
        struct Full;

        impl Write for Full {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::WriteZero, "full"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let arr = Array::zeros(Shape::scalar(DataType::Bool)).unwrap();
        assert!(write(&mut Full, &arr).is_err());
    }
}

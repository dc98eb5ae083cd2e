//! Rust types that back each data type

use super::{DataType, Literal};
use half::f16;

/// Trait for types that can be stored in or read out of an array
pub trait Element: Sized + Copy + 'static {
    const DTYPE: DataType;

    /// Convert a literal into this type
    fn from_literal(value: Literal) -> Self;

    fn into_literal(self) -> Literal;

    /// Decode from exactly `DTYPE.byte_width()` little-endian bytes
    fn read_le(bytes: &[u8]) -> Self;

    /// Encode into exactly `DTYPE.byte_width()` bytes
    fn write_le(self, out: &mut [u8]);
}

macro_rules! impl_element_int {
    ($($ty:ty => $dtype:ident, $signed:expr);*) => {
        $(
            impl Element for $ty {
                const DTYPE: DataType = DataType::$dtype;

                #[inline]
                fn from_literal(value: Literal) -> Self {
                    match value {
                        Literal::Integral { value, .. } => value as $ty,
                        Literal::FloatingPoint { value, .. } => value as $ty,
                    }
                }

                #[inline]
                fn into_literal(self) -> Literal {
                    Literal::Integral {
                        value: self as i64,
                        bits: <$ty>::BITS as u8,
                        signed: $signed,
                    }
                }

                #[inline]
                fn read_le(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(bytes);
                    <$ty>::from_le_bytes(raw)
                }

                #[inline]
                fn write_le(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_element_int!(
    i8 => Byte, true;
    u8 => UByte, false;
    i16 => Short, true;
    i32 => Int, true;
    i64 => Long, true
);

macro_rules! impl_element_float {
    ($($ty:ty => $dtype:ident, $bits:expr),*) => {
        $(
            impl Element for $ty {
                const DTYPE: DataType = DataType::$dtype;

                #[inline]
                fn from_literal(value: Literal) -> Self {
                    match value {
                        Literal::Integral { value, .. } => value as $ty,
                        Literal::FloatingPoint { value, .. } => value as $ty,
                    }
                }

                #[inline]
                fn into_literal(self) -> Literal {
                    Literal::FloatingPoint {
                        value: self as f64,
                        bits: $bits,
                    }
                }

                #[inline]
                fn read_le(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(bytes);
                    <$ty>::from_le_bytes(raw)
                }

                #[inline]
                fn write_le(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_element_float!(f32 => Float, 32, f64 => Double, 64);

impl Element for f16 {
    const DTYPE: DataType = DataType::Half;

    #[inline]
    fn from_literal(value: Literal) -> Self {
        match value {
            Literal::Integral { value, .. } => f16::from_f64(value as f64),
            Literal::FloatingPoint { value, .. } => f16::from_f64(value),
        }
    }

    #[inline]
    fn into_literal(self) -> Literal {
        Literal::FloatingPoint {
            value: self.to_f64(),
            bits: 16,
        }
    }

    #[inline]
    fn read_le(bytes: &[u8]) -> Self {
        f16::from_le_bytes([bytes[0], bytes[1]])
    }

    #[inline]
    fn write_le(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_le_bytes());
    }
}

impl Element for bool {
    const DTYPE: DataType = DataType::Bool;

    #[inline]
    fn from_literal(value: Literal) -> Self {
        value.as_bool()
    }

    #[inline]
    fn into_literal(self) -> Literal {
        Literal::Integral {
            value: self as i64,
            bits: 1,
            signed: false,
        }
    }

    #[inline]
    fn read_le(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }

    #[inline]
    fn write_le(self, out: &mut [u8]) {
        out[0] = self as u8;
    }
}

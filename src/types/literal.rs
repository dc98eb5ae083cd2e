//! Numeric literal passed across the factory and assignment boundary

use super::DataType;
use crate::error::{MixArrayError, Result};

/// Numeric input value, tagged with its kind and source bit width.
///
/// `bits` and `signed` record the Rust value the literal was built from,
/// which is what [`Literal::inferred_type`] uses to pick a [`DataType`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Integral { value: i64, bits: u8, signed: bool },
    FloatingPoint { value: f64, bits: u8 },
}

impl Literal {
    /// Data type a true scalar built from this literal gets
    pub fn inferred_type(self) -> Result<DataType> {
        match self {
            Literal::Integral { bits: 1, .. } => Ok(DataType::Bool),
            Literal::Integral {
                bits: 8,
                signed: true,
                ..
            } => Ok(DataType::Byte),
            Literal::Integral {
                bits: 8,
                signed: false,
                ..
            } => Ok(DataType::UByte),
            Literal::Integral {
                bits: 16,
                signed: true,
                ..
            } => Ok(DataType::Short),
            Literal::Integral {
                bits: 32,
                signed: true,
                ..
            } => Ok(DataType::Int),
            Literal::Integral {
                bits: 64,
                signed: true,
                ..
            } => Ok(DataType::Long),
            Literal::FloatingPoint { bits: 16, .. } => Ok(DataType::Half),
            Literal::FloatingPoint { bits: 32, .. } => Ok(DataType::Float),
            Literal::FloatingPoint { bits: 64, .. } => Ok(DataType::Double),
            Literal::Integral { bits, signed, .. } => {
                Err(MixArrayError::InvalidDataType(format!(
                    "no {} integral type with {} bits",
                    if signed { "signed" } else { "unsigned" },
                    bits
                )))
            }
            Literal::FloatingPoint { bits, .. } => Err(MixArrayError::InvalidDataType(format!(
                "no floating point type with {} bits",
                bits
            ))),
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Literal::Integral { value, .. } => value as f64,
            Literal::FloatingPoint { value, .. } => value,
        }
    }

    /// Integral value, truncating floats toward zero (saturating, NaN to 0)
    pub fn as_i64(self) -> i64 {
        match self {
            Literal::Integral { value, .. } => value,
            Literal::FloatingPoint { value, .. } => value as i64,
        }
    }

    pub fn as_bool(self) -> bool {
        match self {
            Literal::Integral { value, .. } => value != 0,
            Literal::FloatingPoint { value, .. } => value != 0.0,
        }
    }

    /// Compare values ignoring kind and width (NaN equals NaN)
    pub fn numerically_eq(self, other: Literal) -> bool {
        match (self, other) {
            (Literal::Integral { value: a, .. }, Literal::Integral { value: b, .. }) => a == b,
            (Literal::FloatingPoint { value: a, .. }, Literal::FloatingPoint { value: b, .. }) => {
                a == b || (a.is_nan() && b.is_nan())
            }
            (Literal::Integral { value: i, .. }, Literal::FloatingPoint { value: f, .. })
            | (Literal::FloatingPoint { value: f, .. }, Literal::Integral { value: i, .. }) => {
                f.is_finite() && f.fract() == 0.0 && f as i128 == i as i128
            }
        }
    }
}

macro_rules! impl_from_integral {
    ($($ty:ty => $bits:expr, $signed:expr);*) => {
        $(
            impl From<$ty> for Literal {
                fn from(v: $ty) -> Self {
                    Literal::Integral {
                        value: v as i64,
                        bits: $bits,
                        signed: $signed,
                    }
                }
            }
        )*
    };
}

impl_from_integral!(
    i8 => 8, true;
    u8 => 8, false;
    i16 => 16, true;
    i32 => 32, true;
    i64 => 64, true;
    bool => 1, false
);

impl From<f32> for Literal {
    fn from(v: f32) -> Self {
        Literal::FloatingPoint {
            value: v as f64,
            bits: 32,
        }
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Literal::FloatingPoint { value: v, bits: 64 }
    }
}

impl From<half::f16> for Literal {
    fn from(v: half::f16) -> Self {
        Literal::FloatingPoint {
            value: v.to_f64(),
            bits: 16,
        }
    }
}

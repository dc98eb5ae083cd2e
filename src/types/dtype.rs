//! Element data types and conversion rules

use super::{Element, Literal};
use crate::error::MixArrayError;
use std::fmt;
use std::str::FromStr;

/// Data type of the elements stored in an array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DataType {
    Bool = 0x01,
    Byte = 0x02,
    UByte = 0x03,
    Short = 0x04,
    Half = 0x05,
    Int = 0x06,
    Long = 0x07,
    Float = 0x08,
    Double = 0x09,
}

/// Runs `$body` with `$T` bound to the Rust type that stores `$dtype`.
macro_rules! dispatch {
    ($dtype:expr, $T:ident => $body:expr) => {
        match $dtype {
            $crate::types::DataType::Bool => {
                type $T = bool;
                $body
            }
            $crate::types::DataType::Byte => {
                type $T = i8;
                $body
            }
            $crate::types::DataType::UByte => {
                type $T = u8;
                $body
            }
            $crate::types::DataType::Short => {
                type $T = i16;
                $body
            }
            $crate::types::DataType::Half => {
                type $T = half::f16;
                $body
            }
            $crate::types::DataType::Int => {
                type $T = i32;
                $body
            }
            $crate::types::DataType::Long => {
                type $T = i64;
                $body
            }
            $crate::types::DataType::Float => {
                type $T = f32;
                $body
            }
            $crate::types::DataType::Double => {
                type $T = f64;
                $body
            }
        }
    };
}
pub(crate) use dispatch;

impl DataType {
    /// Every supported data type, narrowest first within each family
    pub const ALL: [DataType; 9] = [
        DataType::Bool,
        DataType::Byte,
        DataType::UByte,
        DataType::Short,
        DataType::Half,
        DataType::Int,
        DataType::Long,
        DataType::Float,
        DataType::Double,
    ];

    /// Size in bytes of a single element
    pub fn byte_width(self) -> usize {
        match self {
            DataType::Bool | DataType::Byte | DataType::UByte => 1,
            DataType::Short | DataType::Half => 2,
            DataType::Int | DataType::Float => 4,
            DataType::Long | DataType::Double => 8,
        }
    }

    /// One-byte tag used in serialized shape info
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Try to convert from u8 tag
    pub fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0x01 => Some(DataType::Bool),
            0x02 => Some(DataType::Byte),
            0x03 => Some(DataType::UByte),
            0x04 => Some(DataType::Short),
            0x05 => Some(DataType::Half),
            0x06 => Some(DataType::Int),
            0x07 => Some(DataType::Long),
            0x08 => Some(DataType::Float),
            0x09 => Some(DataType::Double),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DataType::Bool => "bool",
            DataType::Byte => "byte",
            DataType::UByte => "ubyte",
            DataType::Short => "short",
            DataType::Half => "half",
            DataType::Int => "int",
            DataType::Long => "long",
            DataType::Float => "float",
            DataType::Double => "double",
        }
    }

    /// Convert a literal into this type's value domain.
    ///
    /// Floating values headed for an integral type truncate toward zero and
    /// saturate at the type's bounds (NaN becomes 0). Integral values headed
    /// for a narrower integral type wrap. Half precision rounds to nearest.
    pub fn convert(self, value: Literal) -> Literal {
        dispatch!(self, T => T::from_literal(value).into_literal())
    }

    /// Whether `value` survives conversion into this type unchanged
    pub fn can_represent(self, value: Literal) -> bool {
        self.convert(value).numerically_eq(value)
    }

    /// Whether every value of `self` converts into `target` without loss
    pub fn widens_to(self, target: DataType) -> bool {
        use DataType::*;
        if self == target {
            return true;
        }
        match self {
            Bool => true,
            Byte | UByte => matches!(target, Short | Int | Long | Half | Float | Double),
            Short => matches!(target, Int | Long | Float | Double),
            Int => matches!(target, Long | Double),
            Half => matches!(target, Float | Double),
            Float => matches!(target, Double),
            Long | Double => false,
        }
    }

    /// Narrowest type that both `self` and `other` widen into.
    ///
    /// Falls back to `Double` when no type holds both exactly (e.g. `Long`
    /// with `Float`).
    pub fn promote(self, other: DataType) -> DataType {
        if self.widens_to(other) {
            return other;
        }
        if other.widens_to(self) {
            return self;
        }
        [
            DataType::Short,
            DataType::Int,
            DataType::Long,
            DataType::Half,
            DataType::Float,
            DataType::Double,
        ]
        .into_iter()
        .find(|&t| self.widens_to(t) && other.widens_to(t))
        .unwrap_or(DataType::Double)
    }
}

impl TryFrom<u8> for DataType {
    type Error = MixArrayError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        DataType::from_u8(tag)
            .ok_or_else(|| MixArrayError::InvalidDataType(format!("unknown tag 0x{:02X}", tag)))
    }
}

impl FromStr for DataType {
    type Err = MixArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MixArrayError::InvalidDataType(format!("unknown name {:?}", s)))
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_roundtrip() {
        for dtype in DataType::ALL {
            assert_eq!(DataType::from_u8(dtype.tag()), Some(dtype));
            assert_eq!(DataType::try_from(dtype as u8).unwrap(), dtype);
        }
        assert_eq!(DataType::from_u8(0x00), None);
        assert!(matches!(
            DataType::try_from(0xFF),
            Err(MixArrayError::InvalidDataType(_))
        ));
    }

    #[test]
    fn names_parse_case_insensitive() {
        assert_eq!("INT".parse::<DataType>().unwrap(), DataType::Int);
        assert_eq!("half".parse::<DataType>().unwrap(), DataType::Half);
        assert_eq!(DataType::Long.to_string(), "long");
        assert!(matches!(
            "utf8".parse::<DataType>(),
            Err(MixArrayError::InvalidDataType(_))
        ));
    }

    #[test]
    fn byte_widths() {
        assert_eq!(DataType::Bool.byte_width(), 1);
        assert_eq!(DataType::Short.byte_width(), 2);
        assert_eq!(DataType::Half.byte_width(), 2);
        assert_eq!(DataType::Int.byte_width(), 4);
        assert_eq!(DataType::Long.byte_width(), 8);
        assert_eq!(DataType::Double.byte_width(), 8);
    }

    #[test]
    fn convert_truncates_toward_zero() {
        assert_eq!(DataType::Int.convert(Literal::from(2.9)), Literal::from(2i32));
        assert_eq!(
            DataType::Int.convert(Literal::from(-2.9)),
            Literal::from(-2i32)
        );
        assert_eq!(
            DataType::Short.convert(Literal::from(1e9)),
            Literal::from(i16::MAX)
        );
        assert_eq!(
            DataType::Long.convert(Literal::from(f64::NAN)),
            Literal::from(0i64)
        );
    }

    #[test]
    fn convert_wraps_narrow_integers() {
        assert_eq!(
            DataType::Byte.convert(Literal::from(200i32)),
            Literal::from(-56i8)
        );
        assert_eq!(DataType::Bool.convert(Literal::from(7i32)), Literal::from(true));
        assert_eq!(
            DataType::Bool.convert(Literal::from(0.0)),
            Literal::from(false)
        );
    }

    #[test]
    fn convert_half_rounds_to_nearest() {
        let converted = DataType::Half.convert(Literal::from(0.1));
        let expected = half::f16::from_f64(0.1).to_f64();
        assert_eq!(converted.as_f64(), expected);
        assert_eq!(DataType::Half.convert(Literal::from(2049i32)).as_f64(), 2048.0);
    }

    #[test]
    fn widening_is_exact() {
        for (from, to) in [
            (DataType::Int, DataType::Long),
            (DataType::Int, DataType::Double),
            (DataType::Float, DataType::Double),
            (DataType::Half, DataType::Float),
        ] {
            assert!(from.widens_to(to));
        }
        assert!(!DataType::Long.widens_to(DataType::Double));
        assert!(!DataType::Short.widens_to(DataType::Half));
        assert!(DataType::Double.can_represent(Literal::from(i32::MAX)));
        assert!(!DataType::Int.can_represent(Literal::from(1.5)));
        assert!(!DataType::Double.can_represent(Literal::from(i64::MAX)));
    }

    #[test]
    fn promotion() {
        assert_eq!(DataType::Int.promote(DataType::Long), DataType::Long);
        assert_eq!(DataType::Byte.promote(DataType::UByte), DataType::Short);
        assert_eq!(DataType::Int.promote(DataType::Float), DataType::Double);
        assert_eq!(DataType::Short.promote(DataType::Half), DataType::Float);
        assert_eq!(DataType::Long.promote(DataType::Float), DataType::Double);
        assert_eq!(DataType::Double.promote(DataType::Bool), DataType::Double);
    }
}

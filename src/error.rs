//! Error types for mixarray

use std::borrow::Cow;
use thiserror::Error;

/// mixarray error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MixArrayError {
    /// A dimension is negative or the rank is too large
    #[error("invalid shape {dims:?}: {reason}")]
    InvalidShape { dims: Vec<i64>, reason: &'static str },
    /// Unknown data type tag, name or literal width
    #[error("invalid data type: {0}")]
    InvalidDataType(String),
    /// Element access past the end of an array
    #[error("index {index} out of range for length {length}")]
    IndexOutOfRange { index: usize, length: usize },
    /// Storage size would overflow or exceeds the configured limit
    #[error("allocation failed: {reason}")]
    AllocationError { reason: Cow<'static, str> },
    /// Invalid magic bytes
    #[error("invalid magic bytes, not a mixarray blob")]
    InvalidMagic,
    /// Unsupported version
    #[error("unsupported mixarray version: {0}")]
    UnsupportedVersion(u32),
    /// Input ended before a complete value was read
    #[error("unexpected end of input at position {position}")]
    UnexpectedEof { position: usize },
    /// Data size mismatch
    #[error("data size mismatch: expected {expected} bytes, got {actual}")]
    DataSizeMismatch { expected: u64, actual: u64 },
}

impl MixArrayError {
    pub(crate) fn allocation(reason: impl Into<Cow<'static, str>>) -> Self {
        MixArrayError::AllocationError {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout mixarray
pub type Result<T> = std::result::Result<T, MixArrayError>;

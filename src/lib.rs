//! mixarray - Mixed-datatype N-dimensional arrays
//!
//! Arrays whose element type is chosen at runtime from a closed set of data
//! types, stored as contiguous little-endian bytes and readable as any other
//! supported type.
//!
//! # Features
//!
//! - Explicit data type and shape at creation, zero-filled storage
//! - Rank-0 "true scalars" with the data type inferred from the value
//! - Uniform and per-element assignment with converting writes
//! - Converting reads (`get_double`, `get_int`, `to_long_vector`, ...)
//! - Serialized shape info whose data type can be read back on its own
//! - Portable binary encoding of whole arrays
//!
//! # Example
//!
//! ```rust
//! use mixarray::{DataType, Factory, shape_info_data_type};
//!
//! let factory = Factory::default();
//!
//! let mut array = factory.create(DataType::Int, &[3, 3]).unwrap();
//! array.assign(1);
//! assert_eq!(array.to_long_vector(), vec![1i64; 9]);
//! assert_eq!(shape_info_data_type(&array.shape_info()).unwrap(), DataType::Int);
//!
//! let scalar = factory.true_scalar(1.0).unwrap();
//! assert_eq!(scalar.rank(), 0);
//! assert_eq!(scalar.data_type(), DataType::Double);
//! ```

pub mod error;
pub mod factory;
pub mod parser;
pub mod types;
pub mod writer;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

// Re-export common types at crate root
pub use error::{MixArrayError, Result};
pub use factory::{Factory, FactoryConfig};
pub use parser::parse;
pub use parser::shape::data_type as shape_info_data_type;
pub use types::{
    Array, DataType, Element, HEADER_SIZE, Literal, MAGIC, MAX_RANK, Shape, TypedBuffer, VERSION,
};

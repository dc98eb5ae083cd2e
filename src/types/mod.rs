//! Core types for mixarray

mod array;
mod buffer;
mod dtype;
mod element;
mod header;
mod literal;
mod shape;

pub use array::Array;
pub use buffer::TypedBuffer;
pub use dtype::DataType;
pub use element::Element;
pub use header::{HEADER_SIZE, MAGIC, VERSION};
pub use literal::Literal;
pub use shape::{MAX_RANK, Shape};

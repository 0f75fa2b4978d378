//! Core types for the blob format

mod completeness;
mod decoded;
mod header;
mod shape;

pub use completeness::Completeness;
pub use decoded::Decoded;
pub use header::{ELEMENT_SIZE, Header, RANK_SIZE};
pub use shape::Shape;

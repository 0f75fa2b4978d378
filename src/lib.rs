//! dimblob - Reader for shape-prefixed typed array blobs
//!
//! A blob is a flat little-endian byte layout produced by the animation
//! dataset exporter:
//!
//! | Offset   | Size       | Field   | Type            |
//! |----------|------------|---------|-----------------|
//! | 0        | 4          | rank    | int32           |
//! | 4        | 4 * rank   | shape   | int32\[rank\]   |
//! | 4+4*rank | 4 * ∏shape | payload | float32 / int32 |
//!
//! The payload is stored in row-major order and decoded into an
//! [`ndarray::ArrayD`] of the declared shape. Bytes left over after the
//! payload are not an error; they are reported through [`Completeness`].
//!
//! # Example
//!
//! ```rust
//! use dimblob::parse_bytes;
//!
//! let bytes = [1, 0, 0, 0, 2, 0, 0, 0, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x40];
//! let decoded = parse_bytes::<f32>(&bytes).unwrap();
//!
//! assert_eq!(decoded.header.rank, 1);
//! assert_eq!(decoded.shape.dims(), &[2]);
//! assert_eq!(decoded.array.as_slice().unwrap(), &[0.5, 2.0]);
//! assert!(decoded.completeness.is_complete());
//! ```

pub mod config;
pub mod error;
pub mod ndarray_ext;
pub mod parser;
pub mod reader;
pub mod types;

// Re-export common types at crate root
pub use config::ReadOptions;
pub use error::{BlobError, MismatchReason, Result, Truncated};
pub use ndarray_ext::{Element, tensor_from_le_bytes, tensor_to_le_bytes};
pub use parser::parse_bytes;
pub use reader::{ArrayBlobReader, read_file, read_file_as, read_file_with, read_raw};
pub use types::{Completeness, Decoded, ELEMENT_SIZE, Header, RANK_SIZE, Shape};

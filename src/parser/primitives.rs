//! Primitive binary parsers built from combinators

use super::map::MapExt;
use super::take::take;
use super::Parser;
use crate::error::Truncated;
use crate::ndarray_ext::Element;
use crate::types::ELEMENT_SIZE;

/// Parse an i32 (little-endian)
pub fn i32_le<'a>() -> impl Parser<'a, Output = i32, Error = Truncated> {
    take(4).map(|bytes: &[u8]| i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Parse a single payload element (little-endian)
pub fn element_le<'a, T: Element>() -> impl Parser<'a, Output = T, Error = Truncated> {
    take(ELEMENT_SIZE)
        .map(|bytes: &[u8]| T::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

//! Binary parser for the blob format
//!
//! Parsers borrow the input buffer and hand back a cursor positioned after
//! whatever they consumed, so the decoder can tell how much of the input was
//! used once the payload has been read.

mod cursor;
mod map;
mod ntimes;
mod payload;
mod primitives;
mod shape;
mod take;

pub use cursor::ByteCursor;
pub use map::{Map, MapErr, MapExt};
pub use ntimes::{NTimes, ntimes};
pub use payload::parse_payload;
pub use primitives::{element_le, i32_le};
pub use shape::{parse_header, parse_shape};
pub use take::{Take, take};

use crate::error::Result;
use crate::ndarray_ext::Element;
use crate::types::{Completeness, Decoded};
use tracing::debug;

/// Parsed value plus the cursor positioned after it
pub type PResult<'a, O, E> = std::result::Result<(O, ByteCursor<'a>), E>;

/// A parser over a borrowed byte buffer
pub trait Parser<'a> {
    type Output;
    type Error;

    fn parse(&self, cursor: ByteCursor<'a>) -> PResult<'a, Self::Output, Self::Error>;
}

/// Decode a complete blob held in memory
///
/// Truncation and shape errors abort the decode. Trailing bytes after the
/// payload do not; they show up in [`Decoded::completeness`].
pub fn parse_bytes<T: Element>(bytes: &[u8]) -> Result<Decoded<T>> {
    let cursor = ByteCursor::new(bytes);

    let (header, cursor) = parse_header().parse(cursor)?;
    let (shape, cursor) = parse_shape(header).parse(cursor)?;
    debug!(rank = header.rank, shape = %shape, "parsed blob header");

    let (array, cursor) = parse_payload::<T>(&shape).parse(cursor)?;
    debug!(elements = array.len(), dtype = T::NAME, "parsed blob payload");

    let completeness = Completeness::new(bytes.len() as u64, cursor.position() as u64);

    Ok(Decoded {
        header,
        shape,
        array,
        completeness,
    })
}

/// Decode a buffer as bare elements with no header, dropping any trailing
/// partial element
pub fn parse_raw<T: Element>(bytes: &[u8]) -> Vec<T> {
    let cursor = ByteCursor::new(bytes);
    let count = cursor.remaining() / crate::types::ELEMENT_SIZE;

    match ntimes(count, element_le::<T>()).parse(cursor) {
        Ok((elements, cursor)) => {
            if !cursor.eos() {
                debug!(dropped = cursor.remaining(), "ignoring partial trailing element");
            }
            elements
        }
        Err(_) => Vec::new(),
    }
}

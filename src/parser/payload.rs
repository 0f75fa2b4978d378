//! Payload parsing

use super::map::MapExt;
use super::take::take;
use super::{ByteCursor, PResult, Parser};
use crate::error::{BlobError, MismatchReason};
use crate::ndarray_ext::{Element, tensor_from_le_bytes};
use crate::types::{ELEMENT_SIZE, Shape};
use ndarray::{ArrayD, IxDyn};
use std::marker::PhantomData;

/// Parse `∏shape` elements and reshape them row-major
///
/// A rank-0 shape normally reads one scalar element. When fewer than one
/// element's worth of bytes follows the header, the scalar takes the element
/// default and those bytes are left for the caller to report as trailing.
pub fn parse_payload<'a, 's, T: Element>(
    shape: &'s Shape,
) -> impl Parser<'a, Output = ArrayD<T>, Error = BlobError> + 's {
    PayloadParser {
        shape,
        _element: PhantomData,
    }
}

struct PayloadParser<'s, T> {
    shape: &'s Shape,
    _element: PhantomData<T>,
}

impl<'a, 's, T: Element> Parser<'a> for PayloadParser<'s, T> {
    type Output = ArrayD<T>;
    type Error = BlobError;

    fn parse(&self, cursor: ByteCursor<'a>) -> PResult<'a, Self::Output, Self::Error> {
        if self.shape.rank() == 0 && cursor.remaining() < ELEMENT_SIZE {
            return Ok((ArrayD::from_elem(IxDyn(&[]), T::default()), cursor));
        }

        let byte_len = self
            .shape
            .element_count()
            .and_then(|n| n.checked_mul(ELEMENT_SIZE))
            .ok_or_else(|| {
                BlobError::shape_mismatch(&self.shape.to_raw(), MismatchReason::Overflow)
            })?;

        let (bytes, cursor) = take(byte_len)
            .map_err(BlobError::TruncatedPayload)
            .parse(cursor)?;

        let array = tensor_from_le_bytes(&self.shape.extents(), bytes)?;
        Ok((array, cursor))
    }
}

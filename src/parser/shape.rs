//! Header and shape vector parsing

use super::map::MapExt;
use super::ntimes::ntimes;
use super::primitives::i32_le;
use super::take::take;
use super::{ByteCursor, PResult, Parser};
use crate::error::BlobError;
use crate::types::{Header, Shape};

/// Parse the leading rank field
pub fn parse_header<'a>() -> impl Parser<'a, Output = Header, Error = BlobError> {
    HeaderParser
}

/// Parse `header.rank` shape entries
pub fn parse_shape<'a>(header: Header) -> impl Parser<'a, Output = Shape, Error = BlobError> {
    ShapeParser { header }
}

struct HeaderParser;

impl<'a> Parser<'a> for HeaderParser {
    type Output = Header;
    type Error = BlobError;

    fn parse(&self, cursor: ByteCursor<'a>) -> PResult<'a, Self::Output, Self::Error> {
        let (rank, cursor) = i32_le().map_err(BlobError::TruncatedHeader).parse(cursor)?;
        let rank = u32::try_from(rank).map_err(|_| BlobError::InvalidRank(rank))?;
        Ok((Header::new(rank), cursor))
    }
}

struct ShapeParser {
    header: Header,
}

impl<'a> Parser<'a> for ShapeParser {
    type Output = Shape;
    type Error = BlobError;

    fn parse(&self, cursor: ByteCursor<'a>) -> PResult<'a, Self::Output, Self::Error> {
        let (bytes, cursor) = take(self.header.shape_size())
            .map_err(BlobError::TruncatedShape)
            .parse(cursor)?;

        // Length is already checked, so the entries cannot run short
        let (raw, _) = ntimes(self.header.rank as usize, i32_le())
            .map_err(BlobError::TruncatedShape)
            .parse(ByteCursor::new(bytes))?;

        Ok((Shape::from_raw(&raw)?, cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MismatchReason;

    fn shape_bytes(dims: &[i32]) -> Vec<u8> {
        dims.iter().flat_map(|d| d.to_le_bytes()).collect()
    }

    #[test]
    fn test_header() {
        let bytes = 3i32.to_le_bytes();
        let (header, cursor) = parse_header().parse(ByteCursor::new(&bytes)).unwrap();
        assert_eq!(header.rank, 3);
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_header_truncated() {
        let bytes = [1u8, 0];
        let err = parse_header().parse(ByteCursor::new(&bytes)).unwrap_err();
        assert!(matches!(err, BlobError::TruncatedHeader(t) if t.available == 2));
    }

    #[test]
    fn test_header_negative_rank() {
        let bytes = (-1i32).to_le_bytes();
        let err = parse_header().parse(ByteCursor::new(&bytes)).unwrap_err();
        assert!(matches!(err, BlobError::InvalidRank(-1)));
    }

    #[test]
    fn test_shape() {
        let bytes = shape_bytes(&[2, 3, 4]);
        let (shape, cursor) = parse_shape(Header::new(3))
            .parse(ByteCursor::new(&bytes))
            .unwrap();
        assert_eq!(shape.dims(), &[2, 3, 4]);
        assert!(cursor.eos());
    }

    #[test]
    fn test_shape_rank_zero() {
        let bytes: [u8; 0] = [];
        let (shape, _) = parse_shape(Header::new(0))
            .parse(ByteCursor::new(&bytes))
            .unwrap();
        assert_eq!(shape.rank(), 0);
    }

    #[test]
    fn test_shape_truncated() {
        let bytes = shape_bytes(&[2, 3]);
        let err = parse_shape(Header::new(3))
            .parse(ByteCursor::new(&bytes))
            .unwrap_err();
        match err {
            BlobError::TruncatedShape(t) => {
                assert_eq!(t.needed, 12);
                assert_eq!(t.available, 8);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_shape_negative_extent() {
        let bytes = shape_bytes(&[2, -5]);
        let err = parse_shape(Header::new(2))
            .parse(ByteCursor::new(&bytes))
            .unwrap_err();
        assert!(matches!(
            err,
            BlobError::ShapeMismatch {
                reason: MismatchReason::NegativeExtent { index: 1, extent: -5 },
                ..
            }
        ));
    }
}

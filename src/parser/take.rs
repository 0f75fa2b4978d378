//! Zero-copy take combinator for binary parsing

use super::{ByteCursor, PResult, Parser};
use crate::error::Truncated;

/// Parser that takes exactly N bytes as a zero-copy slice
pub struct Take {
    count: usize,
}

impl Take {
    pub fn new(count: usize) -> Self {
        Take { count }
    }
}

impl<'a> Parser<'a> for Take {
    type Output = &'a [u8];
    type Error = Truncated;

    fn parse(&self, cursor: ByteCursor<'a>) -> PResult<'a, Self::Output, Self::Error> {
        let (data, pos) = cursor.inner();

        if self.count > cursor.remaining() {
            return Err(Truncated {
                offset: pos,
                needed: self.count,
                available: cursor.remaining(),
            });
        }

        let slice = &data[pos..pos + self.count];
        Ok((slice, cursor.advanced(self.count)))
    }
}

/// Take exactly N bytes as a zero-copy slice
pub fn take(count: usize) -> Take {
    Take::new(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_zero() {
        let data = b"hello";
        let cursor = ByteCursor::new(data);
        let (slice, cursor) = take(0).parse(cursor).unwrap();
        assert_eq!(slice, b"");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_take_all() {
        let data = b"hello";
        let cursor = ByteCursor::new(data);
        let (slice, cursor) = take(5).parse(cursor).unwrap();
        assert_eq!(slice, b"hello");
        assert!(cursor.eos());
    }

    #[test]
    fn test_take_too_many() {
        let data = b"hi";
        let cursor = ByteCursor::new(data);
        let err = take(10).parse(cursor).unwrap_err();
        assert_eq!(
            err,
            Truncated {
                offset: 0,
                needed: 10,
                available: 2
            }
        );
    }

    #[test]
    fn test_take_chained() {
        let data = b"helloworld";
        let cursor = ByteCursor::new(data);
        let (slice1, cursor) = take(5).parse(cursor).unwrap();
        let (slice2, cursor) = take(5).parse(cursor).unwrap();
        assert_eq!(slice1, b"hello");
        assert_eq!(slice2, b"world");
        assert_eq!(cursor.position(), 10);
    }

    #[test]
    fn test_take_short_after_offset() {
        let data = b"abcdef";
        let (_, cursor) = take(4).parse(ByteCursor::new(data)).unwrap();
        let err = take(4).parse(cursor).unwrap_err();
        assert_eq!(err.offset, 4);
        assert_eq!(err.available, 2);
    }

    #[test]
    fn test_take_is_zero_copy() {
        let data = b"hello";
        let cursor = ByteCursor::new(data);
        let (slice, _) = take(5).parse(cursor).unwrap();

        // Verify slice points into original data
        assert!(std::ptr::eq(slice.as_ptr(), data.as_ptr()));
    }
}

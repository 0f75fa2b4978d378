//! Repetition combinator

use super::{ByteCursor, PResult, Parser};

/// Parser that applies an inner parser exactly N times
pub struct NTimes<P> {
    count: usize,
    parser: P,
}

impl<'a, P: Parser<'a>> Parser<'a> for NTimes<P> {
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(&self, mut cursor: ByteCursor<'a>) -> PResult<'a, Self::Output, Self::Error> {
        let mut items = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let (item, next) = self.parser.parse(cursor)?;
            items.push(item);
            cursor = next;
        }
        Ok((items, cursor))
    }
}

/// Apply `parser` exactly `count` times, collecting the outputs
pub fn ntimes<P>(count: usize, parser: P) -> NTimes<P> {
    NTimes { count, parser }
}

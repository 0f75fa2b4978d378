//! Output and error mapping combinators

use super::{ByteCursor, PResult, Parser};

pub struct Map<P, F> {
    parser: P,
    f: F,
}

pub struct MapErr<P, F> {
    parser: P,
    f: F,
}

impl<'a, P, F, O> Parser<'a> for Map<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> O,
{
    type Output = O;
    type Error = P::Error;

    fn parse(&self, cursor: ByteCursor<'a>) -> PResult<'a, Self::Output, Self::Error> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.f)(value), cursor))
    }
}

impl<'a, P, F, E> Parser<'a> for MapErr<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Error) -> E,
{
    type Output = P::Output;
    type Error = E;

    fn parse(&self, cursor: ByteCursor<'a>) -> PResult<'a, Self::Output, Self::Error> {
        self.parser.parse(cursor).map_err(&self.f)
    }
}

/// Adapters available on every parser
pub trait MapExt<'a>: Parser<'a> + Sized {
    fn map<F, O>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> O,
    {
        Map { parser: self, f }
    }

    fn map_err<F, E>(self, f: F) -> MapErr<Self, F>
    where
        F: Fn(Self::Error) -> E,
    {
        MapErr { parser: self, f }
    }
}

impl<'a, P: Parser<'a>> MapExt<'a> for P {}

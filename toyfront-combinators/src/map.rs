use crate::Parser;

/// Applies a function to the output of a parser. See [`Parser::map`].
#[derive(Debug, Clone, Copy)]
pub struct Map<P, F> {
    inner: P,
    f: F,
}

impl<P, F> Map<P, F> {
    pub fn new(inner: P, f: F) -> Self {
        Self { inner, f }
    }
}

impl<P, F, O> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> O,
{
    type Output = O;

    fn parse(&self, input: &str, cursor: &mut usize) -> Option<O> {
        self.inner.parse(input, cursor).map(&self.f)
    }
}

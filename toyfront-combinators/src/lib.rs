//! Text-parsing combinators over a shared byte cursor.
//!
//! Every combinator follows one contract: given the input text and a cursor into it,
//! it either succeeds, possibly advancing the cursor and producing an output,
//! or fails and leaves the cursor exactly where it was.
use thiserror::Error;

mod either;
mod input;
mod literal;
mod map;
mod repeat;
mod whitespace;

pub use either::Either;
pub use input::Input;
pub use literal::Literal;
pub use map::Map;
pub use repeat::Repeat;
pub use whitespace::Whitespace;

/// A matcher over a text buffer.
///
/// `cursor` is a byte offset into `input`. Implementations must restore it on failure:
/// when [`parse`](Parser::parse) returns `None`, `*cursor` has the value it had on entry.
pub trait Parser {
    /// What a successful match produces.
    type Output;

    /// Attempts a match at `*cursor`, advancing it past whatever was consumed.
    fn parse(&self, input: &str, cursor: &mut usize) -> Option<Self::Output>;

    /// Like [`parse`](Parser::parse), but only reports whether the match succeeded.
    fn matches(&self, input: &str, cursor: &mut usize) -> bool {
        self.parse(input, cursor).is_some()
    }

    /// Converts the output of this parser, without changing what it consumes.
    fn map<F, O>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> O,
    {
        Map::new(self, f)
    }
}

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;

    fn parse(&self, input: &str, cursor: &mut usize) -> Option<Self::Output> {
        (**self).parse(input, cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Output = P::Output;

    fn parse(&self, input: &str, cursor: &mut usize) -> Option<Self::Output> {
        (**self).parse(input, cursor)
    }
}

/// Builds an [`Either`] from a list of alternatives, tried in the order given.
///
/// ```
/// use toyfront_combinators::{either, Literal, Parser};
///
/// let sign = either![Literal::new("+"), Literal::new("-")];
/// let mut cursor = 0;
/// assert!(sign.matches("-1", &mut cursor));
/// assert_eq!(cursor, 1);
/// ```
#[macro_export]
macro_rules! either {
    ($($alternative:expr),* $(,)?) => {
        $crate::Either::new()$(.or($alternative))*
    };
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("input rejected")]
    Rejected,
    #[error("trailing input at byte {position}")]
    TrailingInput { position: usize },
}

/// Runs `parser` once over `text` and requires it to consume the whole input.
pub fn parse_all<P: Parser>(text: &str, parser: &P) -> Result<P::Output, ParseError> {
    let mut input = Input::new(text);
    let output = input.run(parser).ok_or(ParseError::Rejected)?;

    if input.is_exhausted() {
        Ok(output)
    } else {
        Err(ParseError::TrailingInput {
            position: input.position(),
        })
    }
}

#[cfg(test)]
#[ctor::ctor]
fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

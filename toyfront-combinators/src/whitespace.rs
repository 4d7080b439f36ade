use crate::{either, Either, Literal, Parser, Repeat};

/// A run of zero or more spaces, tabs and newlines.
///
/// Always succeeds. The output is the number of whitespace characters skipped.
pub struct Whitespace {
    inner: Repeat<Either<'static, ()>, Literal<'static>>,
}

impl Whitespace {
    pub fn new() -> Self {
        Self {
            inner: Repeat::new(
                either![Literal::new(" "), Literal::new("\t"), Literal::new("\n")],
                Literal::new(""),
            ),
        }
    }
}

impl Default for Whitespace {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Whitespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Whitespace")
    }
}

impl Parser for Whitespace {
    type Output = usize;

    fn parse(&self, input: &str, cursor: &mut usize) -> Option<usize> {
        self.inner.parse(input, cursor)
    }
}

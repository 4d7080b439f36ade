use crate::ast::Expression;
use toyfront_combinators::{either, Either, Input, Literal, Parser};

/// Parses `true` or `false` into an [`Expression::BooleanLiteral`].
///
/// Matching is exact and case-sensitive. Anything else, including a prefix such as
/// `tru`, fails without consuming input.
pub struct BooleanLiteral {
    inner: Either<'static, Expression>,
}

impl BooleanLiteral {
    pub fn new() -> Self {
        Self {
            inner: either![
                Literal::new("true").map(|()| Expression::BooleanLiteral(true)),
                Literal::new("false").map(|()| Expression::BooleanLiteral(false)),
            ],
        }
    }
}

impl Default for BooleanLiteral {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BooleanLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BooleanLiteral")
    }
}

impl Parser for BooleanLiteral {
    type Output = Expression;

    fn parse(&self, input: &str, cursor: &mut usize) -> Option<Expression> {
        let start = *cursor;
        let expr = self.inner.parse(input, cursor)?;
        log::debug!("boolean literal {expr} at {start}..{}", *cursor);
        Some(expr)
    }
}

/// Parses a boolean literal at the start of `text`.
///
/// Returns the literal, if any, and the cursor after the attempt.
pub fn parse_boolean_literal(text: &str) -> (Option<Expression>, usize) {
    let mut input = Input::new(text);
    let expr = input.run(&BooleanLiteral::new());
    (expr, input.position())
}

#[cfg(test)]
mod tests {
    use super::{parse_boolean_literal, BooleanLiteral};
    use crate::ast::Expression::BooleanLiteral as Bool;
    use toyfront_combinators::Parser;

    #[test]
    fn parse_true() {
        assert_eq!(parse_boolean_literal("true"), (Some(Bool(true)), 4));
    }

    #[test]
    fn parse_false() {
        assert_eq!(parse_boolean_literal("false"), (Some(Bool(false)), 5));
    }

    #[test]
    fn parse_empty() {
        assert_eq!(parse_boolean_literal(""), (None, 0));
    }

    #[test]
    fn no_partial_match() {
        for text in ["tru", "alse", "asdf", "fals", "TRUE", " true"] {
            assert_eq!(parse_boolean_literal(text), (None, 0), "input {text:?}");
        }
    }

    #[test]
    fn stops_after_literal() {
        assert_eq!(parse_boolean_literal("truex"), (Some(Bool(true)), 4));
        assert_eq!(parse_boolean_literal("false true"), (Some(Bool(false)), 5));
    }

    #[test]
    fn parse_at_cursor() {
        let p = BooleanLiteral::new();
        let mut cursor = 2;
        assert_eq!(p.parse("x=false", &mut cursor), Some(Bool(false)));
        assert_eq!(cursor, 7);

        let mut cursor = 2;
        assert_eq!(p.parse("x=fals", &mut cursor), None);
        assert_eq!(cursor, 2);
    }
}

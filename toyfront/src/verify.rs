//! Comparing parser results against expected nodes.
//!
//! A result is either a node or nothing (the parse failed). When rendered for a report,
//! a missing node is shown as `nullptr`.
use crate::ast::Expression;
use crate::parse::BooleanLiteral;
use thiserror::Error;
use toyfront_combinators::{Input, Parser};

const MISSING: &str = "nullptr";

/// Two results that should have been equal, rendered for a report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("NOT EQUAL: \n\tLeft hand side: ({lhs})\n\tRight hand side: ({rhs})")]
pub struct Mismatch {
    pub lhs: String,
    pub rhs: String,
}

fn render(expr: Option<&Expression>) -> String {
    expr.map_or_else(|| MISSING.to_string(), Expression::to_string)
}

/// Checks two results for equality.
///
/// Two missing nodes are equal, a missing node never equals a present one,
/// and two present nodes are compared structurally.
pub fn assert_equal(lhs: Option<&Expression>, rhs: Option<&Expression>) -> Result<(), Mismatch> {
    if lhs == rhs {
        return Ok(());
    }

    let mismatch = Mismatch {
        lhs: render(lhs),
        rhs: render(rhs),
    };
    log::error!("{mismatch}");
    Err(mismatch)
}

/// A named list of inputs and the node each one should parse to.
pub struct Suite<P> {
    name: &'static str,
    parser: P,
    cases: Vec<(&'static str, Option<Expression>)>,
}

impl<P: Parser<Output = Expression>> Suite<P> {
    pub fn new(name: &'static str, parser: P) -> Self {
        Self {
            name,
            parser,
            cases: Vec::new(),
        }
    }

    pub fn case(mut self, input: &'static str, expected: Option<Expression>) -> Self {
        self.cases.push((input, expected));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Parses every input once, from its start, and returns the cases that did not match.
    pub fn run(&self) -> Vec<(&'static str, Mismatch)> {
        log::info!("running suite {} ({} cases)", self.name, self.cases.len());

        self.cases
            .iter()
            .filter_map(|(text, expected)| {
                let actual = Input::new(text).run(&self.parser);
                assert_equal(actual.as_ref(), expected.as_ref())
                    .err()
                    .map(|mismatch| (*text, mismatch))
            })
            .collect()
    }
}

/// The boolean literal cases: both keywords, and inputs that must not match.
pub fn boolean_literal_suite() -> Suite<BooleanLiteral> {
    Suite::new("parse boolean literal", BooleanLiteral::new())
        .case("true", Some(Expression::BooleanLiteral(true)))
        .case("false", Some(Expression::BooleanLiteral(false)))
        .case("", None)
        .case("tru", None)
        .case("alse", None)
        .case("asdf", None)
}

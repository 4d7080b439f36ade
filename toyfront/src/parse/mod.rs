//! Parsers that produce syntax tree nodes.

mod boolean;

pub use boolean::{parse_boolean_literal, BooleanLiteral};

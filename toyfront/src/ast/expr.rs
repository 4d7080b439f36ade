use std::fmt::{Display, Formatter};

/// A literal expression.
///
/// Two expressions are equal when they are the same variant and hold the same value.
/// Expressions of different variants are never equal, so `BooleanLiteral(true)` and
/// `NumberLiteral(1)` differ even though both render as `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expression {
    BooleanLiteral(bool),
    NumberLiteral(u32),
}

impl Expression {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Expression::BooleanLiteral(value) => Some(*value),
            Expression::NumberLiteral(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<u32> {
        match self {
            Expression::BooleanLiteral(_) => None,
            Expression::NumberLiteral(value) => Some(*value),
        }
    }
}

/// Renders the payload in decimal: `1` or `0` for booleans, the digits for numbers.
impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::BooleanLiteral(value) => write!(f, "{}", u8::from(*value)),
            Expression::NumberLiteral(value) => write!(f, "{value}"),
        }
    }
}

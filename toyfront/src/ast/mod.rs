//! Syntax tree nodes.
//!
//! Nodes are plain values: they are built once, by a successful parse or by their
//! constructors, and never change afterwards. Every parent owns its children.

mod expr;
mod stmt;
mod types;

pub use expr::Expression;
pub use stmt::{Assignment, Declaration, File, Function, Statement};
pub use types::Type;

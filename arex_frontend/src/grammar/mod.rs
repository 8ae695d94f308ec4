//! Expression grammar module - AST node definitions

pub mod ast;

pub use ast::{Expr, Number, NumberNode, OperatorNode};

//! AST node definitions for the Arex expression grammar
//!
//! The tree is a closed sum type: an expression is either a numeric literal
//! leaf or a binary operation over two child expressions. An
//! [`OperatorNode`] cannot be constructed without both operands, so no node
//! is ever observable in a half-built state; the parser only builds one once
//! both operands have been popped at finalization.
//!
//! A parent node exclusively owns its operand subtrees: the tree is
//! tree-shaped with no sharing and no cycles.

use crate::tokens::TokenType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric value carried by a literal leaf
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
        }
    }
}

/// A literal leaf node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberNode {
    pub value: Number,
}

impl NumberNode {
    pub fn new(value: Number) -> Self {
        Self { value }
    }
}

/// A binary operation over exactly two operand expressions.
///
/// `operands[0]` is always the syntactic left operand and `operands[1]` the
/// right one, regardless of the order the parser popped them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorNode {
    pub operator: TokenType,
    operands: Box<[Expr; 2]>,
}

impl OperatorNode {
    /// Bind an operator to both of its operands in one step
    pub fn new(operator: TokenType, left: Expr, right: Expr) -> Self {
        Self {
            operator,
            operands: Box::new([left, right]),
        }
    }

    /// The left operand as it appeared in the source
    pub fn left(&self) -> &Expr {
        &self.operands[0]
    }

    /// The right operand as it appeared in the source
    pub fn right(&self) -> &Expr {
        &self.operands[1]
    }

    /// Both operands in source order
    pub fn operands(&self) -> &[Expr; 2] {
        &self.operands
    }
}

/// Anything usable as an operand: a literal leaf or a nested operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Number(NumberNode),
    Operator(OperatorNode),
}

impl Expr {
    /// Create a literal leaf from an integer
    pub fn int(value: i64) -> Self {
        Self::Number(NumberNode::new(Number::Int(value)))
    }

    /// Create a literal leaf from a float
    pub fn float(value: f64) -> Self {
        Self::Number(NumberNode::new(Number::Float(value)))
    }

    /// Create a binary operation node
    pub fn binary(operator: TokenType, left: Expr, right: Expr) -> Self {
        Self::Operator(OperatorNode::new(operator, left, right))
    }
}

impl fmt::Display for Expr {
    /// Parenthesized prefix form, e.g. `(+ 1 2)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(node) => write!(f, "{}", node.value),
            Self::Operator(node) => {
                write!(f, "({} {} {})", node.operator, node.left(), node.right())
            }
        }
    }
}

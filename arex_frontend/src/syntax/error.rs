//! Typed errors for token-to-AST transformation
//!
//! Structural defects in the token sequence (an operator short of operands,
//! values left over after finalization) surface as [`ParseError`] values
//! identifying the offending position instead of failing on empty-stack
//! access.

use crate::diagnostics::{codes, Code};
use crate::tokens::TokenType;

pub type ParseResult<T> = Result<T, ParseError>;

/// Structural parse errors over the expression grammar
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Operator '{operator}' at line {line}, column {column} is missing an operand")]
    OperandUnderflow {
        operator: TokenType,
        line: u32,
        column: u32,
    },

    #[error("{count} values left without an operator; extra value at line {line}, column {column}")]
    TrailingOperands { count: usize, line: u32, column: u32 },

    #[error("Too many pending operators: {count} (max {max})")]
    PendingOperatorLimit { count: usize, max: usize },

    #[error("Internal parser error: {message}")]
    Internal { message: String },
}

impl ParseError {
    /// Create an operand underflow error
    pub fn operand_underflow(operator: TokenType, line: u32, column: u32) -> Self {
        Self::OperandUnderflow {
            operator,
            line,
            column,
        }
    }

    /// Create a trailing operands error
    pub fn trailing_operands(count: usize, line: u32, column: u32) -> Self {
        Self::TrailingOperands {
            count,
            line,
            column,
        }
    }

    /// Create an internal parser error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the diagnostic code for this error
    pub fn error_code(&self) -> Code {
        match self {
            Self::OperandUnderflow { .. } => codes::syntax::OPERAND_UNDERFLOW,
            Self::TrailingOperands { .. } => codes::syntax::TRAILING_OPERANDS,
            Self::PendingOperatorLimit { .. } => codes::syntax::PENDING_OPERATOR_LIMIT,
            Self::Internal { .. } => codes::syntax::OPERAND_UNDERFLOW,
        }
    }

    /// Get the source position of the offending token, if known
    pub fn position(&self) -> Option<(u32, u32)> {
        match self {
            Self::OperandUnderflow { line, column, .. }
            | Self::TrailingOperands { line, column, .. } => Some((*line, *column)),
            Self::PendingOperatorLimit { .. } | Self::Internal { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParseError::operand_underflow(TokenType::Plus, 1, 3);
        assert_eq!(
            err.to_string(),
            "Operator '+' at line 1, column 3 is missing an operand"
        );

        let err = ParseError::trailing_operands(2, 1, 3);
        assert!(err.to_string().contains("2 values left"));
    }

    #[test]
    fn test_error_code_mapping() {
        let err = ParseError::operand_underflow(TokenType::Plus, 1, 1);
        assert_eq!(err.error_code().as_str(), "E201");

        let err = ParseError::trailing_operands(2, 1, 1);
        assert_eq!(err.error_code().as_str(), "E202");
    }

    #[test]
    fn test_position_extraction() {
        let err = ParseError::operand_underflow(TokenType::Minus, 2, 7);
        assert_eq!(err.position(), Some((2, 7)));

        let err = ParseError::internal("bad state");
        assert_eq!(err.position(), None);
    }
}

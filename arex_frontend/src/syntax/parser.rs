//! Stack-based parser over the flat expression grammar
//!
//! Single left-to-right pass with no lookahead: numbers push operand leaves,
//! operator tokens push pending operators, everything else is reserved for
//! future statement grammar. A finalization pass then binds each pending
//! operator to its two adjacent operands and pushes the completed node back
//! as an operand for any enclosing operator.
//!
//! The grammar is deliberately flat: `NUMBER (OPERATOR NUMBER)*` with no
//! precedence levels and no parentheses. Operators are strictly binary.

use crate::config::compile_time::syntax::MAX_PENDING_OPERATORS;
use crate::diagnostics::Diagnostic;
use crate::grammar::Expr;
use crate::syntax::error::{ParseError, ParseResult};
use crate::tokens::{Literal, Token, TokenType};

/// Result of a parse: AST roots plus collected diagnostics.
///
/// The diagnostics list is part of the contract for future grammar growth;
/// the flat expression grammar currently reports all structural problems
/// through [`ParseError`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub roots: Vec<Expr>,
    pub diagnostics: Vec<Diagnostic>,
}

/// An operator seen in the input but not yet bound to operands.
///
/// This is the only "operands unknown" state in the parser; AST nodes are
/// constructed fully bound at finalization.
struct PendingOperator {
    operator: TokenType,
    line: u32,
    column: u32,
}

/// A value on the operand stack with the source position it started at
struct Operand {
    expr: Expr,
    line: u32,
    column: u32,
}

/// Converts a token sequence into AST roots.
///
/// Single-pass and non-restartable: `parse` consumes the parser, so a fresh
/// instance (with freshly initialized stacks) is required per token
/// sequence.
pub struct Parser {
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    /// Create a parser over a fully materialized token sequence
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            diagnostics: Vec::new(),
        }
    }

    /// Parse the token sequence into an ordered sequence of AST roots
    pub fn parse(self) -> ParseResult<ParseOutput> {
        let mut operands: Vec<Operand> = Vec::new();
        let mut pending: Vec<PendingOperator> = Vec::new();

        for token in &self.tokens {
            match token.kind {
                TokenType::Number => {
                    operands.push(Operand {
                        expr: number_leaf(token)?,
                        line: token.line,
                        column: token.column,
                    });
                }
                kind if kind.is_operator() => {
                    if pending.len() >= MAX_PENDING_OPERATORS {
                        return Err(ParseError::PendingOperatorLimit {
                            count: pending.len(),
                            max: MAX_PENDING_OPERATORS,
                        });
                    }
                    pending.push(PendingOperator {
                        operator: kind,
                        line: token.line,
                        column: token.column,
                    });
                }
                // Identifiers, strings, punctuation, and the remaining
                // reserved words are unhandled by the expression grammar:
                // reserved for statement-level parsing.
                _ => {}
            }
        }

        let roots = Self::finalize(operands, pending)?;

        Ok(ParseOutput {
            roots,
            diagnostics: self.diagnostics,
        })
    }

    /// Bind every pending operator to its operands, innermost first.
    ///
    /// Operands were pushed left-then-right, so each pop yields the right
    /// operand before the left one; construction reverses them so that
    /// `operands[0]` is always the syntactic left operand.
    fn finalize(
        mut operands: Vec<Operand>,
        mut pending: Vec<PendingOperator>,
    ) -> ParseResult<Vec<Expr>> {
        while let Some(op) = pending.pop() {
            let right = operands
                .pop()
                .ok_or_else(|| ParseError::operand_underflow(op.operator, op.line, op.column))?;
            let left = operands
                .pop()
                .ok_or_else(|| ParseError::operand_underflow(op.operator, op.line, op.column))?;

            operands.push(Operand {
                expr: Expr::binary(op.operator, left.expr, right.expr),
                line: left.line,
                column: left.column,
            });
        }

        // A well-formed input leaves exactly one value per expression
        if operands.len() > 1 {
            let extra = &operands[1];
            return Err(ParseError::trailing_operands(
                operands.len(),
                extra.line,
                extra.column,
            ));
        }

        Ok(operands.into_iter().map(|operand| operand.expr).collect())
    }
}

/// Build a literal leaf from a NUMBER token's typed payload
fn number_leaf(token: &Token) -> ParseResult<Expr> {
    match &token.literal {
        Some(Literal::Int(n)) => Ok(Expr::int(*n)),
        Some(Literal::Float(x)) => Ok(Expr::float(*x)),
        _ => Err(ParseError::internal(format!(
            "NUMBER token without numeric payload at line {}, column {}",
            token.line, token.column
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{Number, NumberNode};
    use crate::lexical::Scanner;
    use assert_matches::assert_matches;

    fn parse(input: &str) -> ParseResult<ParseOutput> {
        let result = Scanner::new(input).scan();
        assert!(
            !result.has_errors(),
            "scanner errors: {:?}",
            result.diagnostics
        );
        Parser::new(result.tokens).parse()
    }

    #[test]
    fn test_expression_simple() {
        let output = parse("1 + 2").unwrap();
        assert_eq!(output.roots.len(), 1);

        assert_matches!(&output.roots[0], Expr::Operator(node) => {
            assert_eq!(node.operator, TokenType::Plus);
            assert_eq!(node.operands().len(), 2);
            assert_eq!(node.left(), &Expr::int(1));
            assert_eq!(node.right(), &Expr::int(2));
        });
    }

    #[test]
    fn test_operand_order_is_not_reversed() {
        // Left/right must survive the stack pops for non-commutative
        // operators
        let output = parse("5 - 2").unwrap();
        assert_matches!(&output.roots[0], Expr::Operator(node) => {
            assert_eq!(node.left(), &Expr::int(5));
            assert_eq!(node.right(), &Expr::int(2));
        });
    }

    #[test]
    fn test_float_operand() {
        let output = parse("1 + 456.7").unwrap();
        assert_matches!(&output.roots[0], Expr::Operator(node) => {
            assert_matches!(node.right(), Expr::Number(NumberNode { value: Number::Float(x) }) => {
                assert_eq!(*x, 456.7);
            });
        });
    }

    #[test]
    fn test_operator_chain() {
        // The first operator becomes the root; every node keeps its left
        // operand on the left
        let output = parse("1 + 2 + 3").unwrap();
        assert_eq!(output.roots.len(), 1);

        assert_matches!(&output.roots[0], Expr::Operator(root) => {
            assert_eq!(root.operator, TokenType::Plus);
            assert_eq!(root.left(), &Expr::int(1));
            assert_matches!(root.right(), Expr::Operator(inner) => {
                assert_eq!(inner.left(), &Expr::int(2));
                assert_eq!(inner.right(), &Expr::int(3));
            });
        });
    }

    #[test]
    fn test_comparison_and_logical_operators() {
        let output = parse("1 <= 2").unwrap();
        assert_matches!(&output.roots[0], Expr::Operator(node) => {
            assert_eq!(node.operator, TokenType::LessEqual);
        });

        let output = parse("1 and 2").unwrap();
        assert_matches!(&output.roots[0], Expr::Operator(node) => {
            assert_eq!(node.operator, TokenType::And);
        });
    }

    #[test]
    fn test_operand_underflow() {
        let err = parse("1 +").unwrap_err();
        assert_matches!(err, ParseError::OperandUnderflow { operator, line, column } => {
            assert_eq!(operator, TokenType::Plus);
            assert_eq!((line, column), (1, 3));
        });

        let err = parse("+ 1").unwrap_err();
        assert_matches!(err, ParseError::OperandUnderflow { .. });
    }

    #[test]
    fn test_trailing_operands() {
        let err = parse("1 2").unwrap_err();
        assert_matches!(err, ParseError::TrailingOperands { count: 2, line: 1, column: 3 });
    }

    #[test]
    fn test_empty_input_yields_no_roots() {
        let output = parse("").unwrap();
        assert!(output.roots.is_empty());
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn test_identifier_is_not_operator_capable() {
        // A lone identifier is a no-op to the expression grammar
        let output = parse("x").unwrap();
        assert!(output.roots.is_empty());
    }

    #[test]
    fn test_unhandled_token_kinds_are_skipped() {
        // Statement-level tokens are reserved, not expression errors
        let output = parse("print \"Hello, World!\"").unwrap();
        assert!(output.roots.is_empty());
    }

    #[test]
    fn test_number_token_without_payload_is_internal_error() {
        let bogus = vec![Token::new(TokenType::Number, "1", 1, 1)];
        let err = Parser::new(bogus).parse().unwrap_err();
        assert_matches!(err, ParseError::Internal { .. });
    }

    #[test]
    fn test_fresh_parser_per_sequence() {
        let tokens = Scanner::new("1 + 2").scan().tokens;
        let first = Parser::new(tokens.clone()).parse().unwrap();
        let second = Parser::new(tokens).parse().unwrap();
        assert_eq!(first, second);
    }
}

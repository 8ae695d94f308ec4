//! Token types for the Arex expression grammar
//!
//! Every non-literal token kind carries a unique fixed spelling; the literal
//! kinds (identifier, string, number) are synthesized by the scanner and
//! carry a payload instead. Reserved words are fixed spellings that would
//! otherwise lex as identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of lexical categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    // === SINGLE-CHARACTER PUNCTUATION AND OPERATORS ===
    LeftParen,  // (
    RightParen, // )
    LeftBrace,  // {
    RightBrace, // }
    Comma,      // ,
    Dot,        // .
    Minus,      // -
    Plus,       // +
    Semicolon,  // ;
    Slash,      // /
    Star,       // *
    Bang,       // !
    Equal,      // =
    Less,       // <
    Greater,    // >

    // === TWO-CHARACTER OPERATORS ===
    // Matched in preference to their one-character prefixes (maximal munch)
    BangEqual,    // !=
    EqualEqual,   // ==
    GreaterEqual, // >=
    LessEqual,    // <=

    // === LITERALS ===
    // Payload-carrying kinds; never present in the spelling match table
    Identifier,
    Str,
    Number,

    // === RESERVED WORDS ===
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,
}

impl TokenType {
    /// Every token kind, in declaration order
    pub const ALL: [TokenType; 38] = [
        Self::LeftParen,
        Self::RightParen,
        Self::LeftBrace,
        Self::RightBrace,
        Self::Comma,
        Self::Dot,
        Self::Minus,
        Self::Plus,
        Self::Semicolon,
        Self::Slash,
        Self::Star,
        Self::Bang,
        Self::Equal,
        Self::Less,
        Self::Greater,
        Self::BangEqual,
        Self::EqualEqual,
        Self::GreaterEqual,
        Self::LessEqual,
        Self::Identifier,
        Self::Str,
        Self::Number,
        Self::And,
        Self::Class,
        Self::Else,
        Self::False,
        Self::Fun,
        Self::For,
        Self::If,
        Self::Nil,
        Self::Or,
        Self::Print,
        Self::Return,
        Self::Super,
        Self::This,
        Self::True,
        Self::Var,
        Self::While,
    ];

    /// The canonical spelling of this kind, or `None` for the literal kinds
    pub const fn spelling(self) -> Option<&'static str> {
        match self {
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::LeftBrace => Some("{"),
            Self::RightBrace => Some("}"),
            Self::Comma => Some(","),
            Self::Dot => Some("."),
            Self::Minus => Some("-"),
            Self::Plus => Some("+"),
            Self::Semicolon => Some(";"),
            Self::Slash => Some("/"),
            Self::Star => Some("*"),
            Self::Bang => Some("!"),
            Self::Equal => Some("="),
            Self::Less => Some("<"),
            Self::Greater => Some(">"),

            Self::BangEqual => Some("!="),
            Self::EqualEqual => Some("=="),
            Self::GreaterEqual => Some(">="),
            Self::LessEqual => Some("<="),

            Self::Identifier | Self::Str | Self::Number => None,

            Self::And => Some("and"),
            Self::Class => Some("class"),
            Self::Else => Some("else"),
            Self::False => Some("false"),
            Self::Fun => Some("fun"),
            Self::For => Some("for"),
            Self::If => Some("if"),
            Self::Nil => Some("nil"),
            Self::Or => Some("or"),
            Self::Print => Some("print"),
            Self::Return => Some("return"),
            Self::Super => Some("super"),
            Self::This => Some("this"),
            Self::True => Some("true"),
            Self::Var => Some("var"),
            Self::While => Some("while"),
        }
    }

    /// Check if this kind is a payload-carrying literal category
    pub const fn is_literal(self) -> bool {
        matches!(self, Self::Identifier | Self::Str | Self::Number)
    }

    /// Check if this kind is a reserved word
    pub const fn is_reserved_word(self) -> bool {
        matches!(
            self,
            Self::And
                | Self::Class
                | Self::Else
                | Self::False
                | Self::Fun
                | Self::For
                | Self::If
                | Self::Nil
                | Self::Or
                | Self::Print
                | Self::Return
                | Self::Super
                | Self::This
                | Self::True
                | Self::Var
                | Self::While
        )
    }

    /// Check if this kind is an arithmetic operator
    pub const fn is_arithmetic_operator(self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash)
    }

    /// Check if this kind is a comparison operator
    pub const fn is_comparison_operator(self) -> bool {
        matches!(
            self,
            Self::Less | Self::LessEqual | Self::Greater | Self::GreaterEqual
        )
    }

    /// Check if this kind is an equality operator
    pub const fn is_equality_operator(self) -> bool {
        matches!(self, Self::EqualEqual | Self::BangEqual)
    }

    /// Check if this kind is a logical operator
    pub const fn is_logical_operator(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// Check if this kind binds two operands in the expression grammar.
    ///
    /// Identifiers are deliberately excluded: they have no arity-2 semantics
    /// and are reserved for future call grammar.
    pub const fn is_operator(self) -> bool {
        self.is_arithmetic_operator()
            || self.is_comparison_operator()
            || self.is_equality_operator()
            || self.is_logical_operator()
            || matches!(self, Self::Bang | Self::Equal)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spelling() {
            Some(s) => write!(f, "{}", s),
            None => match self {
                Self::Identifier => write!(f, "identifier"),
                Self::Str => write!(f, "string"),
                Self::Number => write!(f, "number"),
                _ => unreachable!("non-literal kinds always have a spelling"),
            },
        }
    }
}

/// Typed payload carried by STRING and NUMBER tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Str(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{}", s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
        }
    }
}

/// An immutable token produced by the scanner and consumed by the parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Lexical category
    pub kind: TokenType,
    /// The exact source substring this token was derived from
    pub lexeme: String,
    /// Line number where this token starts (1-based)
    pub line: u32,
    /// Column number within the line (1-based)
    pub column: u32,
    /// Typed payload; populated only for STRING and NUMBER kinds
    pub literal: Option<Literal>,
}

impl Token {
    /// Create a token with no literal payload
    pub fn new(kind: TokenType, lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
            literal: None,
        }
    }

    /// Create a number token carrying its typed value
    pub fn number(lexeme: impl Into<String>, value: Literal, line: u32, column: u32) -> Self {
        Self {
            kind: TokenType::Number,
            lexeme: lexeme.into(),
            line,
            column,
            literal: Some(value),
        }
    }

    /// Create a string token; the accumulated text is both lexeme and payload
    pub fn string(content: impl Into<String>, line: u32, column: u32) -> Self {
        let content = content.into();
        Self {
            kind: TokenType::Str,
            lexeme: content.clone(),
            line,
            column,
            literal: Some(Literal::Str(content)),
        }
    }

    /// Create an identifier token; the lexeme itself serves as the payload
    pub fn identifier(name: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind: TokenType::Identifier,
            lexeme: name.into(),
            line,
            column,
            literal: None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.literal) {
            (TokenType::Number, Some(value)) => write!(f, "Token(number {})", value),
            (TokenType::Str, Some(value)) => write!(f, "Token(string {})", value),
            (TokenType::Identifier, _) => write!(f, "Token(identifier {})", self.lexeme),
            _ => write!(f, "Token({})", self.kind),
        }
    }
}

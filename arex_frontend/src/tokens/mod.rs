//! Token system for Arex lexical analysis
//!
//! This module provides the shared token vocabulary of the front end: the
//! closed [`TokenType`] enumeration with its fixed spellings, the immutable
//! [`Token`] record produced by the scanner and consumed by the parser, and
//! the derived maximal-munch spelling table.

pub mod tables;
pub mod token;

pub use tables::{is_identifier_continuation, is_identifier_start, match_spelling, matchable_spellings};
pub use token::{Literal, Token, TokenType};

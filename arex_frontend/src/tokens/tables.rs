//! Derived lexical tables for maximal-munch matching
//!
//! The scanner matches operators, punctuation, and reserved words against a
//! single table of spellings sorted longest-first, so a two-character
//! operator always wins over its one-character prefix and reserved words need
//! no special casing. The table is computed once, not per character.

use crate::tokens::TokenType;
use std::sync::OnceLock;

/// All matchable spellings paired with their token kind, longest first.
///
/// Literal kinds carry no spelling and are synthesized by the scanner, so
/// they never appear here.
pub fn matchable_spellings() -> &'static [(&'static str, TokenType)] {
    static TABLE: OnceLock<Vec<(&'static str, TokenType)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table: Vec<(&'static str, TokenType)> = TokenType::ALL
            .iter()
            .filter_map(|&tt| tt.spelling().map(|s| (s, tt)))
            .collect();

        // Longest first implements maximal munch; ties keep declaration order.
        table.sort_by_key(|(spelling, _)| std::cmp::Reverse(spelling.len()));
        table
    })
}

/// Check if a character can continue an identifier
pub fn is_identifier_continuation(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Check if a character can start an identifier
pub fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Try to match a known spelling at the start of `rest`.
///
/// An alphanumeric spelling only matches when the character immediately
/// following it cannot continue an identifier; otherwise `variable` would
/// wrongly match the reserved word `var`.
pub fn match_spelling(rest: &str) -> Option<(&'static str, TokenType)> {
    for &(spelling, kind) in matchable_spellings() {
        if !rest.starts_with(spelling) {
            continue;
        }

        if spelling_is_wordlike(spelling) {
            if let Some(next) = rest[spelling.len()..].chars().next() {
                if is_identifier_continuation(next) {
                    continue;
                }
            }
        }

        return Some((spelling, kind));
    }
    None
}

fn spelling_is_wordlike(spelling: &str) -> bool {
    spelling.chars().all(is_identifier_continuation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_longest_first() {
        let table = matchable_spellings();
        for window in table.windows(2) {
            assert!(
                window[0].0.len() >= window[1].0.len(),
                "'{}' sorted before '{}'",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn test_literal_kinds_are_excluded() {
        for (_, kind) in matchable_spellings() {
            assert!(!kind.is_literal(), "{:?} must not be matchable", kind);
        }
    }

    #[test]
    fn test_two_character_operators_win() {
        assert_eq!(match_spelling(">= 1"), Some((">=", TokenType::GreaterEqual)));
        assert_eq!(match_spelling("<=x"), Some(("<=", TokenType::LessEqual)));
        assert_eq!(match_spelling("=="), Some(("==", TokenType::EqualEqual)));
        assert_eq!(match_spelling("!="), Some(("!=", TokenType::BangEqual)));

        // One-character fallbacks still match on their own
        assert_eq!(match_spelling("> 1"), Some((">", TokenType::Greater)));
        assert_eq!(match_spelling("= 3"), Some(("=", TokenType::Equal)));
    }

    #[test]
    fn test_reserved_word_boundary_guard() {
        assert_eq!(match_spelling("var x"), Some(("var", TokenType::Var)));
        assert_eq!(match_spelling("var"), Some(("var", TokenType::Var)));

        // A reserved word must not match as a prefix of a longer identifier
        assert_eq!(match_spelling("variable"), None);
        assert_eq!(match_spelling("printer"), None);
        assert_eq!(match_spelling("print_1"), None);
    }

    #[test]
    fn test_punctuation_needs_no_guard() {
        // Symbol spellings match regardless of what follows
        assert_eq!(match_spelling("+1"), Some(("+", TokenType::Plus)));
        assert_eq!(match_spelling(";x"), Some((";", TokenType::Semicolon)));
    }

    #[test]
    fn test_unknown_input_does_not_match() {
        assert_eq!(match_spelling("@"), None);
        assert_eq!(match_spelling("hello"), None);
    }

    #[test]
    fn test_identifier_character_classes() {
        assert!(is_identifier_start('a'));
        assert!(is_identifier_start('_'));
        assert!(!is_identifier_start('1'));
        assert!(!is_identifier_start('@'));

        assert!(is_identifier_continuation('1'));
        assert!(is_identifier_continuation('_'));
        assert!(!is_identifier_continuation('-'));
    }
}

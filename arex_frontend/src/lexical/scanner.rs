//! Core scanner implementation
//!
//! Single-pass tokenization of Arex source text. Each character gets exactly
//! one disposition, checked in a fixed precedence order: string boundary,
//! string accumulation, whitespace, identifier continuation, numeric
//! continuation, spelling-table match, identifier start. Lexical errors are
//! collected as diagnostics and scanning continues past the offending
//! character.

use crate::config::compile_time::lexical::*;
use crate::config::compile_time::syntax::MAX_DIAGNOSTICS;
use crate::config::runtime::ScannerPreferences;
use crate::diagnostics::{codes, Diagnostic};
use crate::tokens::{
    is_identifier_continuation, is_identifier_start, match_spelling, Literal, Token, TokenType,
};
use crate::utils::{Position, Span};
use serde::Serialize;

/// Essential per-scan token metrics
#[derive(Debug, Default, Clone, Serialize)]
pub struct ScanMetrics {
    pub total_tokens: usize,
    pub keyword_tokens: usize,
    pub identifier_tokens: usize,
    pub operator_tokens: usize,
    pub number_tokens: usize,
    pub string_tokens: usize,
    pub invalid_chars: usize,
    pub max_string_length: usize,
}

impl ScanMetrics {
    fn record_token(&mut self, token: &Token, detailed: bool) {
        self.total_tokens += 1;

        if !detailed {
            return;
        }

        match token.kind {
            TokenType::Number => self.number_tokens += 1,
            TokenType::Str => self.string_tokens += 1,
            TokenType::Identifier => self.identifier_tokens += 1,
            kind if kind.is_reserved_word() => self.keyword_tokens += 1,
            kind if kind.is_operator() => self.operator_tokens += 1,
            _ => {} // Remaining punctuation
        }
    }

    fn record_invalid_char(&mut self) {
        self.invalid_chars += 1;
    }

    fn record_string_length(&mut self, length: usize) {
        self.max_string_length = self.max_string_length.max(length);
    }
}

/// Structured outcome of one scan pass
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
    pub metrics: ScanMetrics,
}

impl ScanResult {
    /// Check if any error-severity diagnostics were recorded
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Single-pass scanner over an immutable source string.
///
/// Restartable per call but not re-entrant: every [`Scanner::scan`] starts a
/// fresh left-to-right traversal, so two calls on the same instance yield
/// identical results.
pub struct Scanner {
    source: String,
    preferences: ScannerPreferences,
}

impl Scanner {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            preferences: ScannerPreferences::default(),
        }
    }

    pub fn with_preferences(source: impl Into<String>, preferences: ScannerPreferences) -> Self {
        Self {
            source: source.into(),
            preferences,
        }
    }

    /// Get current preferences
    pub fn preferences(&self) -> &ScannerPreferences {
        &self.preferences
    }

    /// Tokenize the entire source in one left-to-right pass
    pub fn scan(&self) -> ScanResult {
        let mut pass = ScanPass::new(&self.preferences);
        let mut pos = Position::start();

        while pos.offset < self.source.len() {
            let rest = &self.source[pos.offset..];
            let ch = rest.chars().next().expect("offset is on a char boundary");

            if pass.limit_reached {
                break;
            }

            // String literal boundary toggles accumulation mode
            if ch == '"' {
                match pass.string.take() {
                    Some(acc) => pass.emit_string(acc),
                    None => {
                        pass.flush_pending();
                        pass.string = Some(StringAccumulator::new(pos));
                    }
                }
                pos = pos.advance(ch);
                continue;
            }

            // Inside a string every character is taken verbatim
            if let Some(acc) = pass.string.as_mut() {
                acc.push(ch);
                pos = pos.advance(ch);
                continue;
            }

            // Whitespace terminates any pending accumulation
            if ch.is_whitespace() {
                pass.flush_pending();
                pos = pos.advance(ch);
                continue;
            }

            // Identifier continuation wins over digits and the match table
            if is_identifier_continuation(ch) {
                if let Some(acc) = pass.identifier.as_mut() {
                    acc.push(ch);
                    pos = pos.advance(ch);
                    continue;
                }
            }

            // Numeric literal start or continuation
            if ch.is_ascii_digit() || (ch == '.' && pass.number.is_some()) {
                match pass.number.as_mut() {
                    Some(acc) => acc.push(ch),
                    None => pass.number = Some(Accumulator::start(ch, pos)),
                }
                pos = pos.advance(ch);
                continue;
            }

            // Longest-first table match over operators, punctuation, and
            // reserved words
            if let Some((spelling, kind)) = match_spelling(rest) {
                pass.flush_pending();
                pass.push_token(Token::new(kind, spelling, pos.line, pos.column));
                pos = pos.advance_str(spelling);
                continue;
            }

            // Identifier start, or an unmatched character
            if is_identifier_start(ch) {
                pass.flush_number();
                pass.identifier = Some(Accumulator::start(ch, pos));
            } else {
                pass.metrics.record_invalid_char();
                pass.record(
                    Diagnostic::error(
                        codes::lexical::INVALID_CHARACTER,
                        format!(
                            "Invalid character '{}' at line {}, column {}",
                            ch, pos.line, pos.column
                        ),
                    ),
                    Some(Span::single(pos)),
                );
            }
            pos = pos.advance(ch);
        }

        // Inputs ending in a number or identifier must not drop the trailing
        // token
        pass.flush_pending();

        if let Some(acc) = pass.string.take() {
            pass.record(
                Diagnostic::error(
                    codes::lexical::UNTERMINATED_STRING,
                    format!(
                        "Unterminated string literal starting at line {}, column {}",
                        acc.start.line, acc.start.column
                    ),
                ),
                Some(Span::new(acc.start, pos)),
            );
        }

        ScanResult {
            tokens: pass.tokens,
            diagnostics: pass.diagnostics,
            metrics: pass.metrics,
        }
    }
}

/// Pending identifier or number text with its start position
struct Accumulator {
    text: String,
    start: Position,
}

impl Accumulator {
    fn start(ch: char, pos: Position) -> Self {
        Self {
            text: ch.to_string(),
            start: pos,
        }
    }

    fn push(&mut self, ch: char) {
        self.text.push(ch);
    }
}

/// Pending string literal content; oversized content is truncated and
/// reported once
struct StringAccumulator {
    content: String,
    start: Position,
    overflowed: bool,
}

impl StringAccumulator {
    fn new(start: Position) -> Self {
        Self {
            content: String::new(),
            start,
            overflowed: false,
        }
    }

    fn push(&mut self, ch: char) {
        if self.content.len() < MAX_STRING_SIZE {
            self.content.push(ch);
        } else {
            self.overflowed = true;
        }
    }
}

/// Mutable state of one scan traversal
struct ScanPass<'a> {
    preferences: &'a ScannerPreferences,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
    metrics: ScanMetrics,
    identifier: Option<Accumulator>,
    number: Option<Accumulator>,
    string: Option<StringAccumulator>,
    limit_reached: bool,
    diagnostics_truncated: bool,
}

impl<'a> ScanPass<'a> {
    fn new(preferences: &'a ScannerPreferences) -> Self {
        Self {
            preferences,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
            metrics: ScanMetrics::default(),
            identifier: None,
            number: None,
            string: None,
            limit_reached: false,
            diagnostics_truncated: false,
        }
    }

    fn push_token(&mut self, token: Token) {
        if self.tokens.len() >= MAX_TOKEN_COUNT {
            if !self.limit_reached {
                self.limit_reached = true;
                self.record(
                    Diagnostic::error(
                        codes::lexical::TOKEN_LIMIT_EXCEEDED,
                        format!("Too many tokens: limit is {}", MAX_TOKEN_COUNT),
                    ),
                    None,
                );
            }
            return;
        }

        self.metrics
            .record_token(&token, self.preferences.collect_detailed_metrics);
        self.tokens.push(token);
    }

    fn record(&mut self, diagnostic: Diagnostic, span: Option<Span>) {
        if self.diagnostics.len() >= MAX_DIAGNOSTICS {
            if !self.diagnostics_truncated {
                self.diagnostics_truncated = true;
                self.diagnostics.push(Diagnostic::warning(
                    codes::general::DIAGNOSTIC_LIMIT,
                    format!("Diagnostic limit of {} reached", MAX_DIAGNOSTICS),
                ));
            }
            return;
        }

        let diagnostic = match span {
            Some(span) if self.preferences.include_position_in_errors => {
                diagnostic.with_span(span)
            }
            _ => diagnostic,
        };
        self.diagnostics.push(diagnostic);
    }

    /// Flush both pending accumulators, identifier first
    fn flush_pending(&mut self) {
        self.flush_identifier();
        self.flush_number();
    }

    fn flush_identifier(&mut self) {
        let Some(acc) = self.identifier.take() else {
            return;
        };

        if acc.text.len() > MAX_IDENTIFIER_LENGTH {
            self.record(
                Diagnostic::error(
                    codes::lexical::IDENTIFIER_TOO_LONG,
                    format!(
                        "Identifier too long: {} characters (max {})",
                        acc.text.len(),
                        MAX_IDENTIFIER_LENGTH
                    ),
                ),
                Some(Span::new(acc.start, acc.start.advance_str(&acc.text))),
            );
            return;
        }

        self.push_token(Token::identifier(
            acc.text,
            acc.start.line,
            acc.start.column,
        ));
    }

    fn flush_number(&mut self) {
        let Some(acc) = self.number.take() else {
            return;
        };

        // Text containing '.' parses as a float, otherwise as an integer
        let literal = if acc.text.contains('.') {
            acc.text.parse::<f64>().ok().map(Literal::Float)
        } else {
            acc.text.parse::<i64>().ok().map(Literal::Int)
        };

        match literal {
            Some(value) => {
                let token = Token::number(acc.text, value, acc.start.line, acc.start.column);
                self.push_token(token);
            }
            None => {
                self.record(
                    Diagnostic::error(
                        codes::lexical::INVALID_NUMBER,
                        format!("Invalid number format: '{}'", acc.text),
                    ),
                    Some(Span::new(acc.start, acc.start.advance_str(&acc.text))),
                );
            }
        }
    }

    fn emit_string(&mut self, acc: StringAccumulator) {
        if acc.overflowed {
            self.record(
                Diagnostic::error(
                    codes::lexical::STRING_TOO_LARGE,
                    format!("String too large: max is {} bytes", MAX_STRING_SIZE),
                ),
                Some(Span::single(acc.start)),
            );
            return;
        }

        self.metrics.record_string_length(acc.content.len());
        self.push_token(Token::string(
            acc.content,
            acc.start.line,
            acc.start.column,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn scan(input: &str) -> ScanResult {
        Scanner::new(input).scan()
    }

    fn kinds(result: &ScanResult) -> Vec<TokenType> {
        result.tokens.iter().map(|t| t.kind).collect()
    }

    /// Token shape without positions, for whitespace-insensitivity checks
    fn shapes(result: &ScanResult) -> Vec<(TokenType, String, Option<Literal>)> {
        result
            .tokens
            .iter()
            .map(|t| (t.kind, t.lexeme.clone(), t.literal.clone()))
            .collect()
    }

    #[test]
    fn test_scanner_simple() {
        let result = scan("+ -");
        assert_eq!(kinds(&result), vec![TokenType::Plus, TokenType::Minus]);
        assert!(result.diagnostics.is_empty());

        let result = scan("> >= < <=");
        assert_eq!(
            kinds(&result),
            vec![
                TokenType::Greater,
                TokenType::GreaterEqual,
                TokenType::Less,
                TokenType::LessEqual,
            ]
        );
    }

    #[test]
    fn test_maximal_munch() {
        // One GREATER_EQUAL token, never GREATER followed by EQUAL
        let result = scan(">=");
        assert_eq!(kinds(&result), vec![TokenType::GreaterEqual]);

        let result = scan("==");
        assert_eq!(kinds(&result), vec![TokenType::EqualEqual]);
    }

    #[test]
    fn test_single_character_tokens_have_no_payload() {
        let result = scan("( ) { } , . ; * /");
        for token in &result.tokens {
            assert_eq!(token.literal, None, "unexpected payload on {}", token);
        }
        assert_eq!(result.tokens.len(), 9);
    }

    #[test]
    fn test_numeric_literals() {
        let result = scan("print 1 + 2");
        assert_eq!(
            kinds(&result),
            vec![
                TokenType::Print,
                TokenType::Number,
                TokenType::Plus,
                TokenType::Number,
            ]
        );
        assert_eq!(result.tokens[1].literal, Some(Literal::Int(1)));
        assert_eq!(result.tokens[3].literal, Some(Literal::Int(2)));

        let result = scan("print 123 + 456.7");
        assert_eq!(result.tokens[1].literal, Some(Literal::Int(123)));
        assert_eq!(result.tokens[3].literal, Some(Literal::Float(456.7)));
    }

    #[test]
    fn test_string_literals() {
        let result = scan("print \"Hello, World!\"");
        assert_eq!(kinds(&result), vec![TokenType::Print, TokenType::Str]);

        let token = &result.tokens[1];
        assert_eq!(token.literal, Some(Literal::Str("Hello, World!".to_string())));
        // Quotes are excluded from both lexeme and payload
        assert_eq!(token.lexeme, "Hello, World!");
    }

    #[test]
    fn test_string_preserves_whitespace_and_digits() {
        let result = scan("\"a 1 +\"");
        assert_eq!(kinds(&result), vec![TokenType::Str]);
        assert_eq!(result.tokens[0].literal, Some(Literal::Str("a 1 +".to_string())));
    }

    #[test]
    fn test_identifiers() {
        let result = scan("var x = 3");
        assert_eq!(
            kinds(&result),
            vec![
                TokenType::Var,
                TokenType::Identifier,
                TokenType::Equal,
                TokenType::Number,
            ]
        );
        assert_eq!(result.tokens[1].lexeme, "x");
        assert_eq!(result.tokens[3].literal, Some(Literal::Int(3)));
    }

    #[test]
    fn test_whitespace_insensitivity() {
        // Spaces are optional around operators
        let spaced = scan("var x = 3");
        let packed = scan("var x=3");
        assert_eq!(shapes(&spaced), shapes(&packed));
    }

    #[test]
    fn test_reserved_identifiers() {
        // A reserved word in the middle of an identifier is fine
        let result = scan("var my_var = 1");
        assert_eq!(
            kinds(&result),
            vec![
                TokenType::Var,
                TokenType::Identifier,
                TokenType::Equal,
                TokenType::Number,
            ]
        );
        assert_eq!(result.tokens[1].lexeme, "my_var");

        // A reserved word at the start of an identifier is fine too
        let result = scan("var printer = 1");
        assert_eq!(result.tokens[1].kind, TokenType::Identifier);
        assert_eq!(result.tokens[1].lexeme, "printer");
    }

    #[test]
    fn test_identifier_terminated_by_operator() {
        let result = scan("x+1");
        assert_eq!(
            kinds(&result),
            vec![TokenType::Identifier, TokenType::Plus, TokenType::Number]
        );
        assert_eq!(result.tokens[0].lexeme, "x");
    }

    #[test]
    fn test_trailing_accumulators_are_flushed() {
        let result = scan("1 + 2");
        assert_eq!(result.tokens.last().unwrap().literal, Some(Literal::Int(2)));

        let result = scan("abc");
        assert_eq!(kinds(&result), vec![TokenType::Identifier]);
        assert_eq!(result.tokens[0].lexeme, "abc");
    }

    #[test]
    fn test_number_adjacent_identifier() {
        let result = scan("123hello");
        assert_eq!(kinds(&result), vec![TokenType::Number, TokenType::Identifier]);
        assert_eq!(result.tokens[0].literal, Some(Literal::Int(123)));
        assert_eq!(result.tokens[1].lexeme, "hello");
    }

    #[test]
    fn test_dot_outside_number_is_punctuation() {
        let result = scan(". 1.5");
        assert_eq!(kinds(&result), vec![TokenType::Dot, TokenType::Number]);
        assert_eq!(result.tokens[1].literal, Some(Literal::Float(1.5)));
    }

    #[test]
    fn test_idempotent_scans() {
        let source = "var answer = 6 * 7";
        let first = Scanner::new(source).scan();
        let second = Scanner::new(source).scan();
        assert_eq!(first.tokens, second.tokens);
        assert_eq!(first.diagnostics, second.diagnostics);

        // Restartable per call on the same instance as well
        let scanner = Scanner::new(source);
        assert_eq!(scanner.scan().tokens, scanner.scan().tokens);
    }

    #[test]
    fn test_lexical_error_recovery() {
        // The offending character is reported and skipped; scanning continues
        let result = scan("1 @ 2");
        assert_eq!(kinds(&result), vec![TokenType::Number, TokenType::Number]);
        assert_eq!(result.diagnostics.len(), 1);

        let diag = &result.diagnostics[0];
        assert_eq!(diag.code, codes::lexical::INVALID_CHARACTER);
        assert!(diag.message.contains("'@'"));
        assert!(diag.message.contains("line 1, column 3"));
        assert!(result.has_errors());
    }

    #[test]
    fn test_unterminated_string() {
        let result = scan("print \"oops");
        assert_eq!(kinds(&result), vec![TokenType::Print]);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(
            result.diagnostics[0].code,
            codes::lexical::UNTERMINATED_STRING
        );
    }

    #[test]
    fn test_invalid_number_reported() {
        let result = scan("1.2.3");
        assert!(result.tokens.is_empty());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].code, codes::lexical::INVALID_NUMBER);
    }

    #[test]
    fn test_identifier_length_limit() {
        let long_name = "a".repeat(MAX_IDENTIFIER_LENGTH + 1);
        let result = scan(&long_name);
        assert!(result.tokens.is_empty());
        assert_eq!(
            result.diagnostics[0].code,
            codes::lexical::IDENTIFIER_TOO_LONG
        );
    }

    #[test]
    fn test_line_and_column_tracking() {
        let result = scan("var x\nprint y");
        let positions: Vec<(u32, u32)> =
            result.tokens.iter().map(|t| (t.line, t.column)).collect();
        assert_eq!(positions, vec![(1, 1), (1, 5), (2, 1), (2, 7)]);
    }

    #[test]
    fn test_diagnostic_positions_can_be_suppressed() {
        let prefs = ScannerPreferences {
            include_position_in_errors: false,
            collect_detailed_metrics: true,
        };
        let result = Scanner::with_preferences("@", prefs).scan();
        assert_matches!(result.diagnostics.as_slice(), [diag] if diag.span.is_none());
    }

    #[test]
    fn test_metrics() {
        let result = scan("var x = 1 + \"hi\"");
        assert_eq!(result.metrics.total_tokens, 6);
        assert_eq!(result.metrics.keyword_tokens, 1);
        assert_eq!(result.metrics.identifier_tokens, 1);
        assert_eq!(result.metrics.operator_tokens, 2);
        assert_eq!(result.metrics.number_tokens, 1);
        assert_eq!(result.metrics.string_tokens, 1);
        assert_eq!(result.metrics.invalid_chars, 0);
        assert_eq!(result.metrics.max_string_length, 2);
    }

    #[test]
    fn test_empty_input() {
        let result = scan("");
        assert!(result.tokens.is_empty());
        assert!(result.diagnostics.is_empty());
        assert!(!result.has_errors());
    }
}

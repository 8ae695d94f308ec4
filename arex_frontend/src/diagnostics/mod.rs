//! Structured diagnostics for the Arex front end
//!
//! Scanner and parser report problems as [`Diagnostic`] values collected on
//! their results rather than printing to a console or failing outright.
//! Callers inspect the collected list after each phase before trusting the
//! output of that phase.

pub mod codes;

pub use codes::{Code, Severity};

use crate::utils::Span;
use serde::Serialize;
use std::fmt;

/// A single diagnostic produced during scanning or parsing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub code: Code,
    pub severity: Severity,
    pub message: String,
    pub span: Option<Span>,
}

impl Diagnostic {
    /// Create an error diagnostic; severity comes from the code registry
    pub fn error(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: codes::get_severity(code.as_str()),
            message: message.into(),
            span: None,
        }
    }

    /// Create a warning diagnostic
    pub fn warning(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            message: message.into(),
            span: None,
        }
    }

    /// Attach source location information
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Check if this diagnostic is an error
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Get the category of the underlying code
    pub fn category(&self) -> &'static str {
        codes::get_category(self.code.as_str())
    }

    /// Get the recommended action for the underlying code
    pub fn recommended_action(&self) -> &'static str {
        codes::get_action(self.code.as_str())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        match self.span {
            Some(span) => write!(f, "{}[{}]: {} at {}", level, self.code, self.message, span),
            None => write!(f, "{}[{}]: {}", level, self.code, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Position;

    #[test]
    fn test_error_diagnostic_severity_from_registry() {
        let diag = Diagnostic::error(codes::lexical::INVALID_CHARACTER, "Invalid character '@'");
        assert!(diag.is_error());
        assert_eq!(diag.category(), "Lexical");
    }

    #[test]
    fn test_display_with_span() {
        let span = Span::single(Position::new(2, 1, 3));
        let diag = Diagnostic::error(codes::lexical::INVALID_CHARACTER, "Invalid character '@'")
            .with_span(span);

        let rendered = diag.to_string();
        assert!(rendered.starts_with("error[E101]"));
        assert!(rendered.contains("at 1:3-4"));
    }

    #[test]
    fn test_warning_diagnostic() {
        let diag = Diagnostic::warning(codes::general::DIAGNOSTIC_LIMIT, "Too many diagnostics");
        assert!(!diag.is_error());
        assert!(diag.to_string().starts_with("warning[W001]"));
    }
}

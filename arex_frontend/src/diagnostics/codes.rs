//! Consolidated diagnostic codes and classification system
//!
//! Single source of truth for all diagnostic codes, their metadata, and
//! classification functions. Codes are stable across releases so that
//! downstream tooling can match on them.

use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal wrapper for diagnostic codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Error = 0,
    Warning = 1,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }
}

/// Complete metadata for a diagnostic code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// Lexical diagnostic codes
pub mod lexical {
    use super::Code;

    pub const INVALID_CHARACTER: Code = Code::new("E101");
    pub const UNTERMINATED_STRING: Code = Code::new("E102");
    pub const INVALID_NUMBER: Code = Code::new("E103");
    pub const IDENTIFIER_TOO_LONG: Code = Code::new("E104");
    pub const STRING_TOO_LARGE: Code = Code::new("E105");
    pub const TOKEN_LIMIT_EXCEEDED: Code = Code::new("E106");
}

/// Syntax diagnostic codes
pub mod syntax {
    use super::Code;

    pub const OPERAND_UNDERFLOW: Code = Code::new("E201");
    pub const TRAILING_OPERANDS: Code = Code::new("E202");
    pub const PENDING_OPERATOR_LIMIT: Code = Code::new("E203");
}

/// Cross-phase diagnostic codes
pub mod general {
    use super::Code;

    pub const DIAGNOSTIC_LIMIT: Code = Code::new("W001");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

fn registry() -> &'static HashMap<&'static str, CodeMetadata> {
    static REGISTRY: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let entries = [
            CodeMetadata {
                code: "E101",
                category: "Lexical",
                severity: Severity::Error,
                description: "Input character matches no lexical rule",
                recommended_action: "Remove or replace the offending character",
            },
            CodeMetadata {
                code: "E102",
                category: "Lexical",
                severity: Severity::Error,
                description: "String literal still open at end of input",
                recommended_action: "Add the closing '\"' quote",
            },
            CodeMetadata {
                code: "E103",
                category: "Lexical",
                severity: Severity::Error,
                description: "Numeric literal could not be parsed",
                recommended_action: "Check the number format",
            },
            CodeMetadata {
                code: "E104",
                category: "Lexical",
                severity: Severity::Error,
                description: "Identifier exceeds the configured length limit",
                recommended_action: "Shorten the identifier",
            },
            CodeMetadata {
                code: "E105",
                category: "Lexical",
                severity: Severity::Error,
                description: "String literal exceeds the configured size limit",
                recommended_action: "Split or shorten the string literal",
            },
            CodeMetadata {
                code: "E106",
                category: "Lexical",
                severity: Severity::Error,
                description: "Token count exceeds the configured limit",
                recommended_action: "Split the input into smaller units",
            },
            CodeMetadata {
                code: "E201",
                category: "Syntax",
                severity: Severity::Error,
                description: "Operator finalized with fewer than two operands",
                recommended_action: "Supply both operands for the operator",
            },
            CodeMetadata {
                code: "E202",
                category: "Syntax",
                severity: Severity::Error,
                description: "Operands left over after expression finalization",
                recommended_action: "Join the values with an operator",
            },
            CodeMetadata {
                code: "E203",
                category: "Syntax",
                severity: Severity::Error,
                description: "Pending operator count exceeds the configured limit",
                recommended_action: "Split the expression into smaller units",
            },
            CodeMetadata {
                code: "W001",
                category: "General",
                severity: Severity::Warning,
                description: "Diagnostic collection truncated at the configured limit",
                recommended_action: "Fix earlier diagnostics and rerun",
            },
        ];

        entries.into_iter().map(|m| (m.code, m)).collect()
    })
}

/// Get the severity for a code (errors by default for unknown codes)
pub fn get_severity(code: &str) -> Severity {
    registry()
        .get(code)
        .map(|m| m.severity)
        .unwrap_or(Severity::Error)
}

/// Get the category for a code
pub fn get_category(code: &str) -> &'static str {
    registry().get(code).map(|m| m.category).unwrap_or("Unknown")
}

/// Get the description for a code
pub fn get_description(code: &str) -> &'static str {
    registry()
        .get(code)
        .map(|m| m.description)
        .unwrap_or("No description available")
}

/// Get the recommended action for a code
pub fn get_action(code: &str) -> &'static str {
    registry()
        .get(code)
        .map(|m| m.recommended_action)
        .unwrap_or("No specific action available")
}

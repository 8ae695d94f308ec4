//! Lexical analysis module
//!
//! Converts Arex source text into an ordered token sequence in a single
//! left-to-right pass, collecting diagnostics instead of failing on the
//! first malformed character.

pub mod scanner;

pub use scanner::{ScanMetrics, ScanResult, Scanner};

use crate::config::runtime::ScannerPreferences;

/// Scan source text with default preferences
pub fn scan_source(source: &str) -> ScanResult {
    Scanner::new(source).scan()
}

/// Scan source text with custom runtime preferences
pub fn scan_source_with_preferences(source: &str, preferences: ScannerPreferences) -> ScanResult {
    Scanner::with_preferences(source, preferences).scan()
}

//! Front-end pipeline - scan then parse
//!
//! Orchestrates the two phases over one in-memory source string. Lexical
//! diagnostics abort the pipeline before parsing (the token sequence is not
//! trustworthy past a lexical error); structural parse errors surface as
//! typed failures.

mod error;
mod result;

pub use error::PipelineError;
pub use result::PipelineResult;

use crate::config::runtime::ScannerPreferences;
use crate::lexical;
use crate::syntax;

/// Process a source string through the complete front end
pub fn process_source(source: &str) -> Result<PipelineResult, PipelineError> {
    process_source_with_preferences(source, ScannerPreferences::default())
}

/// Process a source string with custom scanner preferences
pub fn process_source_with_preferences(
    source: &str,
    preferences: ScannerPreferences,
) -> Result<PipelineResult, PipelineError> {
    let scan = lexical::scan_source_with_preferences(source, preferences);

    if scan.has_errors() {
        return Err(PipelineError::lexical(scan.diagnostics));
    }

    let parse = syntax::parse_tokens(scan.tokens.clone())?;

    let mut diagnostics = scan.diagnostics;
    diagnostics.extend(parse.diagnostics);

    Ok(PipelineResult {
        tokens: scan.tokens,
        roots: parse.roots,
        diagnostics,
        metrics: scan.metrics,
    })
}

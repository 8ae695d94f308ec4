use crate::diagnostics::Diagnostic;
use crate::grammar::Expr;
use crate::lexical::ScanMetrics;
use crate::tokens::Token;
use serde::Serialize;

/// Complete pipeline result for one source unit
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    /// Token sequence produced by the scanner
    pub tokens: Vec<Token>,
    /// AST roots produced by the parser, one per completed expression
    pub roots: Vec<Expr>,
    /// Non-fatal diagnostics collected across both phases
    pub diagnostics: Vec<Diagnostic>,
    /// Per-scan token metrics
    pub metrics: ScanMetrics,
}

impl PipelineResult {
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Check if any diagnostics were collected at all
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

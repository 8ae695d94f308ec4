use crate::diagnostics::Diagnostic;
use crate::syntax::ParseError;

/// Pipeline processing errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum PipelineError {
    #[error("Lexical analysis failed with {} diagnostic(s)", diagnostics.len())]
    Lexical { diagnostics: Vec<Diagnostic> },

    #[error("Syntax analysis failed: {0}")]
    Syntax(#[from] ParseError),
}

impl PipelineError {
    /// Create a lexical failure from collected scan diagnostics
    pub fn lexical(diagnostics: Vec<Diagnostic>) -> Self {
        Self::Lexical { diagnostics }
    }

    /// The diagnostics behind this failure, if any were collected
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Lexical { diagnostics } => diagnostics,
            Self::Syntax(_) => &[],
        }
    }
}

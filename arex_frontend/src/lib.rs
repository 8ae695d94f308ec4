// Internal modules
pub mod config;
pub mod diagnostics;
pub mod grammar;
pub mod lexical;
pub mod pipeline;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use grammar::{Expr, NumberNode, OperatorNode};
pub use lexical::{ScanResult, Scanner};
pub use pipeline::{process_source, PipelineError, PipelineResult};
pub use syntax::{ParseError, ParseOutput, Parser};
pub use tokens::{Literal, Token, TokenType};

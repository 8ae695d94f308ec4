//! Shared utilities for the Arex front end

pub mod span;

pub use span::{Position, SourceMap, Span};

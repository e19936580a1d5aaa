//! Template interpreter.
//!
//! Walks a parsed template with a map of values and produces the final
//! string. Problems with the values never abort rendering; they are
//! reported to a [`DiagnosticSink`] and replaced by a fallback in the output.

mod context;
mod error;
mod evaluator;
mod sink;

pub use context::RenderContext;
pub use error::{Diagnostic, DiagnosticKind, LoadError};
pub use evaluator::{interpret, interpret_with, render, render_with};
pub use sink::{DiagnosticCollector, DiagnosticSink, TracingSink};

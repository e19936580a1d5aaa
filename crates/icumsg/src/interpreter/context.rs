//! Render state carried through the tree walk.

use std::mem;

use crate::interpreter::error::Diagnostic;
use crate::interpreter::sink::DiagnosticSink;
use crate::types::{Value, Values};

/// State carried through one render.
///
/// The context tracks:
/// - the values available to the template
/// - where diagnostics go
/// - the number selected by the innermost enclosing plural branch, which
///   `#` prints
pub struct RenderContext<'a> {
    values: &'a Values,
    sink: &'a mut dyn DiagnosticSink,
    number: Option<f64>,
}

impl<'a> RenderContext<'a> {
    pub fn new(values: &'a Values, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            values,
            sink,
            number: None,
        }
    }

    /// Get a value by name.
    pub fn value(&self, name: &str) -> Option<&'a Value> {
        self.values.get(name)
    }

    /// Get the number of the innermost enclosing plural branch.
    pub fn number(&self) -> Option<f64> {
        self.number
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.sink.report(diagnostic);
    }

    /// Run `f` with `number` as the active plural number, restoring the
    /// previous one afterwards.
    pub fn with_number<R>(&mut self, number: f64, f: impl FnOnce(&mut Self) -> R) -> R {
        let previous = mem::replace(&mut self.number, Some(number));
        let result = f(self);
        self.number = previous;
        result
    }
}

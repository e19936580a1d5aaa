//! Destinations for rendering diagnostics.

use super::error::Diagnostic;

/// Receives diagnostics produced while rendering.
///
/// Any `FnMut(Diagnostic)` closure is a sink:
///
/// ```
/// use icumsg::{Diagnostic, interpret_with, values};
///
/// let mut seen = Vec::new();
/// let out = interpret_with("Hi {name}", &values! {}, &mut |d: Diagnostic| seen.push(d));
/// assert_eq!(out, "Hi {name}");
/// assert_eq!(seen.len(), 1);
/// ```
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// The default sink: logs each diagnostic as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(kind = ?diagnostic.kind(), "{diagnostic}");
    }
}

/// Collects diagnostics in memory, dropping exact duplicates.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the collected diagnostics in the order first reported.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&mut self, diagnostic: Diagnostic) {
        if !self.diagnostics.contains(&diagnostic) {
            self.diagnostics.push(diagnostic);
        }
    }
}

impl<F: FnMut(Diagnostic)> DiagnosticSink for F {
    fn report(&mut self, diagnostic: Diagnostic) {
        self(diagnostic);
    }
}

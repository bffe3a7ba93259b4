//! Diagnostic Emitters
//!
//! Emitters implement [`DiagnosticEmitter`]. The terminal emitter renders
//! human-readable output with an optional source snippet.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);
}

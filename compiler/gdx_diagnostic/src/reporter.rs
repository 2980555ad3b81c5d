//! Error reporting with an error count.
//!
//! The reporter forwards every diagnostic to its emitter and remembers that
//! something went wrong. A script run checks [`ErrorReporter::had_error`]
//! once at the end; the prompt calls [`ErrorReporter::reset`] after each
//! line so one bad line does not poison the session.

use tracing::debug;

use crate::{Diagnostic, DiagnosticEmitter};

/// Forwards diagnostics to an emitter and counts them.
pub struct ErrorReporter<E: DiagnosticEmitter> {
    emitter: E,
    error_count: usize,
}

impl<E: DiagnosticEmitter> ErrorReporter<E> {
    pub fn new(emitter: E) -> Self {
        ErrorReporter {
            emitter,
            error_count: 0,
        }
    }

    /// Emit `diagnostic` and record that an error occurred.
    pub fn report(&mut self, diagnostic: &Diagnostic) {
        debug!(line = diagnostic.line, message = %diagnostic.message, "error reported");
        self.emitter.emit(diagnostic);
        self.error_count += 1;
    }

    /// Report every diagnostic in order, then flush the emitter.
    pub fn report_all(&mut self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.report(diagnostic);
        }
        self.emitter.flush();
    }

    /// Whether anything was reported since creation or the last reset.
    pub fn had_error(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Clear the error state. Already emitted output is unaffected.
    pub fn reset(&mut self) {
        self.error_count = 0;
    }

    pub fn flush(&mut self) {
        self.emitter.flush();
    }

    /// Consume the reporter and return its emitter.
    pub fn into_emitter(self) -> E {
        self.emitter
    }
}

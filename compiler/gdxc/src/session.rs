//! One driver session: a scan configuration plus the error state that
//! outlives individual scans.

use std::io::Write;

use gdx_diagnostic::{DiagnosticEmitter, ErrorReporter};
use gdx_lexer::{ScanConfig, ScanOutput};
use tracing::debug;

use crate::problem::render_scan_errors;

/// Scans sources, prints their tokens and reports their errors.
///
/// The error flag accumulates across [`run`](Session::run) calls until
/// [`reset`](Session::reset); the prompt resets after every line, a script
/// run checks it once at the end.
pub struct Session<E: DiagnosticEmitter> {
    config: ScanConfig,
    reporter: ErrorReporter<E>,
}

impl<E: DiagnosticEmitter> Session<E> {
    pub fn new(config: ScanConfig, emitter: E) -> Self {
        Session {
            config,
            reporter: ErrorReporter::new(emitter),
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `source`, write one line per token to `out` and report every
    /// scan error.
    ///
    /// Returns the scan result so callers can look at it further.
    pub fn run<W: Write>(&mut self, source: &str, out: &mut W) -> std::io::Result<ScanOutput> {
        let output = gdx_lexer::scan_tokens_with(source, &self.config);
        for token in &output.tokens {
            writeln!(out, "{token}")?;
        }
        self.report(&output);
        Ok(output)
    }

    /// Report the errors of an already finished scan.
    pub fn report(&mut self, output: &ScanOutput) {
        if output.has_errors() {
            debug!(errors = output.errors.len(), "reporting scan errors");
        }
        self.reporter.report_all(&render_scan_errors(&output.errors));
    }

    pub fn had_error(&self) -> bool {
        self.reporter.had_error()
    }

    pub fn error_count(&self) -> usize {
        self.reporter.error_count()
    }

    /// Forget previously reported errors.
    pub fn reset(&mut self) {
        self.reporter.reset();
    }

    /// Consume the session and return its diagnostic emitter.
    pub fn into_emitter(self) -> E {
        self.reporter.into_emitter()
    }
}

#[cfg(test)]
mod tests;

//! Rendering of scanner problems as user-facing diagnostics.

use gdx_diagnostic::Diagnostic;
use gdx_lexer::ScanError;

/// Render a `ScanError` as a `[line N] Error: ...` diagnostic.
#[cold]
pub fn render_scan_error(err: &ScanError) -> Diagnostic {
    Diagnostic::error(err.line(), err.to_string())
}

/// Render every error of a scan, in source order.
pub fn render_scan_errors(errors: &[ScanError]) -> Vec<Diagnostic> {
    errors.iter().map(render_scan_error).collect()
}

//! Diagnostic system for gdx.
//!
//! - [`Diagnostic`]: a line-anchored message, rendered as
//!   `[line N] Error<where>: <message>`
//! - [`emitter`]: where rendered diagnostics go ([`TerminalEmitter`])
//! - [`ErrorReporter`]: counts what was reported so a driver can pick an
//!   exit code, and can be reset between prompt lines

mod diagnostic;
pub mod emitter;
mod reporter;

pub use diagnostic::Diagnostic;
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use reporter::ErrorReporter;

use std::io::Write;
use std::path::Path;

use gdx_diagnostic::DiagnosticEmitter;
use tracing::info;

use super::read_file;
use crate::{Error, Session};

/// Run a script: scan the whole file, print its tokens, report errors.
///
/// Fails with [`Error::Scan`] when anything was reported.
pub fn run_file<E, W>(session: &mut Session<E>, path: &Path, out: &mut W) -> Result<(), Error>
where
    E: DiagnosticEmitter,
    W: Write,
{
    let source = read_file(path)?;
    info!(path = %path.display(), bytes = source.len(), "running script");

    session.run(&source, out)?;
    out.flush()?;

    if session.had_error() {
        return Err(Error::Scan {
            errors: session.error_count(),
        });
    }
    Ok(())
}

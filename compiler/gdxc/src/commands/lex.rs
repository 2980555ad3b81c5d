use std::io::Write;
use std::path::Path;

use gdx_diagnostic::DiagnosticEmitter;

use super::read_file;
use crate::{Error, Session};

/// Dump the tokens of a file with their kinds, lexemes, literals and lines.
pub fn lex_file<E, W>(session: &mut Session<E>, path: &Path, out: &mut W) -> Result<(), Error>
where
    E: DiagnosticEmitter,
    W: Write,
{
    let source = read_file(path)?;
    let output = gdx_lexer::scan_tokens_with(&source, session.config());

    writeln!(
        out,
        "Tokens for '{}' ({} tokens):",
        path.display(),
        output.tokens.len()
    )?;
    for token in &output.tokens {
        writeln!(out, "  {token:?}")?;
    }
    out.flush()?;

    session.report(&output);
    if session.had_error() {
        return Err(Error::Scan {
            errors: session.error_count(),
        });
    }
    Ok(())
}

use std::io::{BufRead, Write};

use gdx_diagnostic::DiagnosticEmitter;
use tracing::debug;

use crate::{Error, Session};

const PROMPT: &str = "> ";

/// Interactive prompt: scan each input line as it arrives.
///
/// Errors on one line are reported and then forgotten, so the prompt keeps
/// going. End of input prints a farewell and returns `Ok`.
pub fn run_prompt<E, R, W>(
    session: &mut Session<E>,
    input: &mut R,
    out: &mut W,
) -> Result<(), Error>
where
    E: DiagnosticEmitter,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "\nGoodbye!")?;
            out.flush()?;
            return Ok(());
        }
        debug!(bytes = line.len(), "prompt line");

        session.run(&line, out)?;
        session.reset();
    }
}

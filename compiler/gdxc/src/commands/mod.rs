//! Command handlers for the `gdx` binary.
//!
//! Each submodule implements one command. Handlers take their input and
//! output streams as parameters; only `main` touches the real stdio.

mod ast;
mod lex;
mod prompt;
mod run;

use std::path::Path;

use crate::Error;

pub use ast::{demo_expr, print_ast};
pub use lex::lex_file;
pub use prompt::run_prompt;
pub use run::run_file;

/// Read a whole source file, mapping failures to [`Error::Io`].
pub fn read_file(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

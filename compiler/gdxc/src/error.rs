//! Driver errors and process exit codes.

use std::io;
use std::path::PathBuf;

/// sysexits-style exit codes.
pub mod exit_code {
    pub const OK: i32 = 0;
    /// Bad command line.
    pub const USAGE: i32 = 64;
    /// The input had scan errors.
    pub const DATA_ERR: i32 = 65;
    /// A file could not be read, or stdin/stdout failed.
    pub const IO_ERR: i32 = 74;
}

/// Everything that can stop a driver command.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("i/o error on standard streams: {0}")]
    Stdio(#[from] io::Error),

    #[error("{0}")]
    Usage(String),

    /// The input scanned with errors. The diagnostics have already been
    /// reported, so there is nothing more to print.
    #[error("{errors} scan error(s)")]
    Scan { errors: usize },
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Io { .. } | Error::Stdio(_) => exit_code::IO_ERR,
            Error::Usage(_) => exit_code::USAGE,
            Error::Scan { .. } => exit_code::DATA_ERR,
        }
    }

    /// Whether `main` still has to print this error.
    pub fn needs_report(&self) -> bool {
        !matches!(self, Error::Scan { .. })
    }
}

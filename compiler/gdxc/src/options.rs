//! Command line options shared by every `gdx` command.
//!
//! Parsed by hand, the same way the subcommands are dispatched: flags are
//! `--name` or `--name=value` and may appear anywhere; everything else is a
//! positional argument.

use gdx_diagnostic::ColorMode;
use gdx_lexer::ScanConfig;

use crate::Error;

/// Options that tune scanning and diagnostic output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Scan with the historical end-of-input check (`--legacy-eof`).
    pub legacy_eof: bool,
    /// When to colour diagnostics (`--color=`).
    pub color: ColorMode,
}

impl CliOptions {
    /// Split `args` (without the program name) into options and positionals.
    ///
    /// `-h`/`-v` style short flags are left in the positionals so the
    /// dispatcher can treat them as commands.
    pub fn parse(args: &[String]) -> Result<(CliOptions, Vec<String>), Error> {
        let mut options = CliOptions::default();
        let mut positionals = Vec::new();

        for arg in args {
            if arg == "--legacy-eof" {
                options.legacy_eof = true;
            } else if let Some(value) = arg.strip_prefix("--color=") {
                options.color = ColorMode::parse(value).ok_or_else(|| {
                    Error::Usage(format!(
                        "invalid value '{value}' for --color (expected auto, always or never)"
                    ))
                })?;
            } else if arg.starts_with("--") && !matches!(arg.as_str(), "--help" | "--version") {
                return Err(Error::Usage(format!("unknown option '{arg}'")));
            } else {
                positionals.push(arg.clone());
            }
        }

        Ok((options, positionals))
    }

    pub fn scan_config(&self) -> ScanConfig {
        if self.legacy_eof {
            ScanConfig::legacy()
        } else {
            ScanConfig::default()
        }
    }
}

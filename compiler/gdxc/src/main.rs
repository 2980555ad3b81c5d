//! gdx command line interface.
//!
//! `gdx` alone starts the prompt, `gdx <script>` runs a file.

use std::io::{self, IsTerminal};
use std::path::Path;

use gdx_diagnostic::TerminalEmitter;
use gdxc::commands::{lex_file, print_ast, run_file, run_prompt};
use gdxc::{exit_code, init_tracing, CliOptions, Error, Session};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = match dispatch(&args) {
        Ok(()) => exit_code::OK,
        Err(err) => {
            if err.needs_report() {
                eprintln!("{err}");
            }
            if matches!(err, Error::Usage(_)) {
                eprintln!();
                print_usage();
            }
            err.exit_code()
        }
    };
    std::process::exit(code);
}

fn dispatch(args: &[String]) -> Result<(), Error> {
    let (options, positionals) = CliOptions::parse(args)?;
    let mut session = Session::new(
        options.scan_config(),
        TerminalEmitter::stderr(options.color, io::stderr().is_terminal()),
    );
    let mut stdout = io::stdout().lock();

    match positionals.as_slice() {
        [] => run_prompt(&mut session, &mut io::stdin().lock(), &mut stdout),
        [command] if matches!(command.as_str(), "help" | "--help" | "-h") => {
            print_usage();
            Ok(())
        }
        [command] if matches!(command.as_str(), "version" | "--version" | "-v") => {
            println!("gdx {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        [command] if command == "ast" => print_ast(&mut stdout),
        [command, path] if command == "lex" => lex_file(&mut session, Path::new(path), &mut stdout),
        [command] if command == "lex" => Err(Error::Usage("Usage: gdx lex <file>".to_owned())),
        [script] => run_file(&mut session, Path::new(script), &mut stdout),
        _ => Err(Error::Usage("Usage: gdx [script]".to_owned())),
    }
}

fn print_usage() {
    println!("gdx scanner and driver");
    println!();
    println!("Usage: gdx [options] [script]");
    println!("       gdx [options] <command>");
    println!();
    println!("With no script, gdx starts an interactive prompt.");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize a file and display its tokens");
    println!("  ast                  Print a sample expression tree");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --legacy-eof         Never scan the last character of the input");
    println!("  --color=<when>       Colour diagnostics: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable tracing output (e.g. RUST_LOG=gdx_lexer=debug)");
    println!("  GDX_LOG_TREE         Render tracing spans as a tree");
}

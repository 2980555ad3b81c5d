#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use gdx_diagnostic::{ColorMode, TerminalEmitter};
use gdx_ir::TokenKind;
use pretty_assertions::assert_eq;

fn session(config: ScanConfig) -> Session<TerminalEmitter<Vec<u8>>> {
    Session::new(
        config,
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false),
    )
}

fn diagnostics(session: Session<TerminalEmitter<Vec<u8>>>) -> String {
    String::from_utf8(session.into_emitter().into_inner()).unwrap()
}

#[test]
fn prints_tokens_one_per_line() {
    let mut session = session(ScanConfig::default());
    let mut out = Vec::new();
    let output = session.run("var x = 1;", &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "VAR var null\nIDENTIFIER x null\nEQUAL = null\nNUMBER 1 1\nSEMICOLON ; null\nEOF  null\n"
    );
    assert_eq!(output.tokens.len(), 6);
    assert!(!session.had_error());
}

#[test]
fn reports_errors_and_keeps_tokens() {
    let mut session = session(ScanConfig::default());
    let mut out = Vec::new();
    let output = session.run("1 @ 2", &mut out).unwrap();

    assert_eq!(
        output.kinds(),
        vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]
    );
    assert!(session.had_error());
    assert_eq!(session.error_count(), 1);
    assert_eq!(
        diagnostics(session),
        "[line 1] Error: Unexpected character '@'.\n"
    );
}

#[test]
fn errors_accumulate_until_reset() {
    let mut session = session(ScanConfig::default());
    let mut out = Vec::new();
    session.run("#", &mut out).unwrap();
    session.run("\"open", &mut out).unwrap();
    assert_eq!(session.error_count(), 2);

    session.reset();
    assert!(!session.had_error());
    session.run("ok", &mut out).unwrap();
    assert!(!session.had_error());
}

#[test]
fn legacy_config_drops_last_char() {
    let mut session = session(ScanConfig::legacy());
    let mut out = Vec::new();
    let output = session.run("a+", &mut out).unwrap();
    assert_eq!(output.kinds(), vec![TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(session.config(), &ScanConfig::legacy());
}

use super::*;
use crate::EndOfInput;
use pretty_assertions::assert_eq;

/// Helper: scan with the default configuration.
fn scan(source: &str) -> ScanOutput {
    Scanner::new(source).scan_tokens()
}

/// Helper: scan and return kinds only (including `Eof`).
fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).kinds()
}

fn scan_legacy(source: &str) -> ScanOutput {
    Scanner::with_config(
        source,
        &ScanConfig {
            end_of_input: EndOfInput::TrailingSentinel,
        },
    )
    .scan_tokens()
}

// ─── Punctuation & Operators ───────────────────────────────────

#[test]
fn single_character_punctuation() {
    let cases = [
        ("(", TokenKind::LeftParen),
        (")", TokenKind::RightParen),
        ("{", TokenKind::LeftBrace),
        ("}", TokenKind::RightBrace),
        (",", TokenKind::Comma),
        (".", TokenKind::Dot),
        ("-", TokenKind::Minus),
        ("+", TokenKind::Plus),
        (";", TokenKind::Semicolon),
        ("*", TokenKind::Star),
        ("/", TokenKind::Slash),
    ];
    for (source, kind) in cases {
        let output = scan(source);
        assert_eq!(output.kinds(), vec![kind, TokenKind::Eof], "source {source:?}");
        assert!(output.errors.is_empty());
        assert_eq!(output.tokens[0].lexeme, source);
        assert_eq!(output.tokens[0].literal, None);
    }
}

#[test]
fn compound_operators() {
    let cases = [
        ("!=", TokenKind::BangEqual),
        ("!", TokenKind::Bang),
        ("==", TokenKind::EqualEqual),
        ("=", TokenKind::Equal),
        ("<=", TokenKind::LessEqual),
        ("<", TokenKind::Less),
        (">=", TokenKind::GreaterEqual),
        (">", TokenKind::Greater),
    ];
    for (source, kind) in cases {
        let output = scan(source);
        assert_eq!(output.kinds(), vec![kind, TokenKind::Eof], "source {source:?}");
        assert_eq!(output.tokens[0].lexeme, source);
    }
}

#[test]
fn operator_sequences_munch_pairwise() {
    assert_eq!(
        kinds("===!=!"),
        vec![
            TokenKind::EqualEqual,
            TokenKind::Equal,
            TokenKind::BangEqual,
            TokenKind::Bang,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("<>= ="),
        vec![
            TokenKind::Less,
            TokenKind::GreaterEqual,
            TokenKind::Equal,
            TokenKind::Eof,
        ]
    );
}

// ─── Whitespace & Comments ─────────────────────────────────────

#[test]
fn whitespace_and_comments_only() {
    for source in ["", " ", "\t\r\n", "// only a comment", "  // a\n// b\n\n", "//"] {
        let output = scan(source);
        assert_eq!(output.kinds(), vec![TokenKind::Eof], "source {source:?}");
        assert!(output.errors.is_empty());
    }
}

#[test]
fn comment_then_token_on_next_line() {
    let output = scan("// hello\n+");
    assert_eq!(output.kinds(), vec![TokenKind::Plus, TokenKind::Eof]);
    assert_eq!(output.tokens[0].line, 2);
}

#[test]
fn comment_runs_to_end_of_line_only() {
    assert_eq!(
        kinds("1 // 2 3\n4"),
        vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]
    );
}

#[test]
fn slash_followed_by_space_is_division() {
    assert_eq!(
        kinds("a / b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

// ─── Strings ───────────────────────────────────────────────────

#[test]
fn string_literal_strips_quotes() {
    let output = scan("\"hi\"");
    assert_eq!(output.kinds(), vec![TokenKind::String, TokenKind::Eof]);
    assert_eq!(output.tokens[0].lexeme, "\"hi\"");
    assert_eq!(output.tokens[0].literal, Some(Literal::String("hi".into())));
    assert!(output.errors.is_empty());
}

#[test]
fn empty_string_literal() {
    let output = scan("\"\"");
    assert_eq!(output.tokens[0].literal, Some(Literal::String(String::new())));
}

#[test]
fn backslashes_are_literal_data() {
    let output = scan(r#""a\nb\""#);
    assert_eq!(output.tokens[0].literal, Some(Literal::String(r"a\nb\".into())));
    assert_eq!(output.kinds(), vec![TokenKind::String, TokenKind::Eof]);
}

#[test]
fn multiline_string_counts_lines() {
    let output = scan("\"one\ntwo\nthree\" x");
    assert_eq!(output.tokens[0].kind, TokenKind::String);
    assert_eq!(
        output.tokens[0].literal,
        Some(Literal::String("one\ntwo\nthree".into()))
    );
    // The string is reported on the line it starts on.
    assert_eq!(output.tokens[0].line, 1);
    assert_eq!(output.tokens[1].kind, TokenKind::Identifier);
    assert_eq!(output.tokens[1].line, 3);
}

#[test]
fn unterminated_string_stops_scan() {
    let output = scan("\"abc");
    assert_eq!(output.kinds(), vec![TokenKind::Eof]);
    assert_eq!(output.errors, vec![ScanError::UnterminatedString { line: 1 }]);
}

#[test]
fn unterminated_string_swallows_rest_of_input() {
    let output = scan("+ \"abc\n+ -");
    assert_eq!(output.kinds(), vec![TokenKind::Plus, TokenKind::Eof]);
    assert_eq!(output.errors, vec![ScanError::UnterminatedString { line: 1 }]);
    // Newlines inside the unclosed literal still count.
    assert_eq!(output.tokens.last().map(|t| t.line), Some(2));
}

// ─── Numbers ───────────────────────────────────────────────────

#[test]
fn integer_literal() {
    let output = scan("123");
    assert_eq!(output.kinds(), vec![TokenKind::Number, TokenKind::Eof]);
    assert_eq!(output.tokens[0].literal, Some(Literal::Number(123.0)));
}

#[test]
fn decimal_literal() {
    let output = scan("123.45");
    assert_eq!(output.kinds(), vec![TokenKind::Number, TokenKind::Eof]);
    assert_eq!(output.tokens[0].lexeme, "123.45");
    assert_eq!(output.tokens[0].literal, Some(Literal::Number(123.45)));
}

#[test]
fn trailing_dot_is_malformed_but_keeps_integer() {
    let output = scan("123.");
    assert_eq!(output.errors, vec![ScanError::MalformedNumber { line: 1 }]);
    assert_eq!(output.tokens[0].kind, TokenKind::Number);
    assert_eq!(output.tokens[0].lexeme, "123");
    assert_eq!(output.tokens[0].literal, Some(Literal::Number(123.0)));
    // The dot itself is scanned afterwards.
    assert_eq!(
        output.kinds(),
        vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]
    );
}

#[test]
fn dot_then_identifier_is_malformed() {
    let output = scan("1.x");
    assert_eq!(output.errors, vec![ScanError::MalformedNumber { line: 1 }]);
    assert_eq!(
        output.kinds(),
        vec![
            TokenKind::Number,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn leading_dot_is_not_part_of_number() {
    assert_eq!(
        kinds(".5"),
        vec![TokenKind::Dot, TokenKind::Number, TokenKind::Eof]
    );
}

#[test]
fn only_one_fractional_part() {
    let output = scan("1.2.3");
    assert_eq!(
        output.kinds(),
        vec![TokenKind::Number, TokenKind::Dot, TokenKind::Number, TokenKind::Eof]
    );
    assert_eq!(output.tokens[0].literal, Some(Literal::Number(1.2)));
    assert!(output.errors.is_empty());
}

// ─── Identifiers & Keywords ────────────────────────────────────

#[test]
fn keyword_versus_identifier() {
    assert_eq!(kinds("and"), vec![TokenKind::And, TokenKind::Eof]);
    assert_eq!(kinds("android"), vec![TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn identifiers_allow_underscores_and_digits() {
    let output = scan("_tmp1 x_2");
    assert_eq!(
        output.kinds(),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
    );
    assert_eq!(output.tokens[0].lexeme, "_tmp1");
    assert_eq!(output.tokens[1].lexeme, "x_2");
    assert_eq!(output.tokens[0].literal, None);
}

#[test]
fn digits_then_letters_split() {
    assert_eq!(
        kinds("9lives"),
        vec![TokenKind::Number, TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn statement() {
    let output = scan("var total = price * 2.5;");
    assert_eq!(
        output.kinds(),
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Identifier,
            TokenKind::Star,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
    assert!(output.errors.is_empty());
}

// ─── Errors & Recovery ─────────────────────────────────────────

#[test]
fn unexpected_character_is_skipped() {
    let output = scan("1 @ 2");
    assert_eq!(
        output.kinds(),
        vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]
    );
    assert_eq!(
        output.errors,
        vec![ScanError::UnexpectedCharacter { line: 1, ch: '@' }]
    );
}

#[test]
fn each_bad_character_reported_once() {
    let output = scan("#\n$");
    assert_eq!(output.kinds(), vec![TokenKind::Eof]);
    assert_eq!(
        output.errors,
        vec![
            ScanError::UnexpectedCharacter { line: 1, ch: '#' },
            ScanError::UnexpectedCharacter { line: 2, ch: '$' },
        ]
    );
}

#[test]
fn non_ascii_character_skipped_whole() {
    let output = scan("a\u{e9}b");
    assert_eq!(
        output.errors,
        vec![ScanError::UnexpectedCharacter {
            line: 1,
            ch: '\u{e9}'
        }]
    );
    assert_eq!(output.tokens[0].lexeme, "a");
    assert_eq!(output.tokens[1].lexeme, "b");
}

#[test]
fn interior_null_is_unexpected() {
    let output = scan("a\0b");
    assert_eq!(
        output.errors,
        vec![ScanError::UnexpectedCharacter { line: 1, ch: '\0' }]
    );
    assert_eq!(
        output.kinds(),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
    );
}

// ─── Lines & EOF ───────────────────────────────────────────────

#[test]
fn line_numbers_follow_newlines() {
    let output = scan("a\nb\n\nc");
    let lines: Vec<u32> = output.tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 4, 4]);
}

#[test]
fn eof_is_last_with_empty_lexeme() {
    let output = scan("print x;\n");
    let eof = output.tokens.last().cloned();
    assert_eq!(eof, Some(Token::eof(2)));
    assert_eq!(
        output
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Eof)
            .count(),
        1
    );
}

// ─── End-of-input Boundary ─────────────────────────────────────

#[test]
fn last_character_is_scanned_by_default() {
    assert_eq!(
        kinds("a+"),
        vec![TokenKind::Identifier, TokenKind::Plus, TokenKind::Eof]
    );
    assert_eq!(kinds("1"), vec![TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn trailing_sentinel_drops_last_character() {
    assert_eq!(
        scan_legacy("a+").kinds(),
        vec![TokenKind::Identifier, TokenKind::Eof]
    );
    assert_eq!(scan_legacy("1").kinds(), vec![TokenKind::Eof]);
    assert_eq!(scan_legacy("").kinds(), vec![TokenKind::Eof]);
}

#[test]
fn trailing_sentinel_makes_closed_string_unterminated() {
    let output = scan_legacy("\"hi\"");
    assert_eq!(output.kinds(), vec![TokenKind::Eof]);
    assert_eq!(output.errors, vec![ScanError::UnterminatedString { line: 1 }]);
}

#[test]
fn trailing_sentinel_on_prompt_line() {
    // Interactive lines end in '\n'; dropping it leaves the line intact.
    let output = scan_legacy("\"hi\"\n");
    assert_eq!(output.kinds(), vec![TokenKind::String, TokenKind::Eof]);
    assert!(output.errors.is_empty());
    assert_eq!(output.tokens.last().map(|t| t.line), Some(1));
}

#[test]
fn trailing_sentinel_number_lookahead() {
    // "1.5" minus its last byte is "1.", which has no fractional digit.
    let output = scan_legacy("1.5");
    assert_eq!(output.errors, vec![ScanError::MalformedNumber { line: 1 }]);
    assert_eq!(
        output.kinds(),
        vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]
    );
}

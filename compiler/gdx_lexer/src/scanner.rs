//! Hand-written scanner producing [`Token`]s.
//!
//! The scanner owns a sentinel-terminated [`SourceBuffer`]. A scan walks it
//! once with a [`Cursor`], left to right, dispatching on the byte at the
//! start of each token. Lookahead is one byte (`1.5`, `!=`), and the
//! sentinel byte (`0x00`) ends every sub-scan without index checks.
//!
//! # Design
//!
//! There is exactly one control state, "at the start of a token". Each arm
//! of the dispatch calls a focused method that consumes the whole token and
//! either pushes a token, pushes an error, or does neither (whitespace,
//! comments). Sub-scans never re-enter the dispatch.

use gdx_ir::{Literal, Token, TokenKind};
use gdx_lexer_core::{Cursor, SourceBuffer};
use tracing::{debug, trace};

use crate::{keywords, ScanConfig, ScanError, ScanOutput};

/// A single-use scanner over one source text.
///
/// [`scan_tokens`](Scanner::scan_tokens) takes `self` by value: scanning
/// another input means building another `Scanner`.
#[derive(Clone, Debug)]
pub struct Scanner {
    buffer: SourceBuffer,
}

impl Scanner {
    /// Create a scanner over `source` with the default configuration.
    pub fn new(source: &str) -> Self {
        Self::with_config(source, &ScanConfig::default())
    }

    pub fn with_config(source: &str, config: &ScanConfig) -> Self {
        Scanner {
            buffer: SourceBuffer::new(config.end_of_input.scannable(source)),
        }
    }

    /// Scan the whole input.
    ///
    /// Always terminates and always ends the token list with a single `Eof`
    /// token, whatever errors were recorded.
    pub fn scan_tokens(self) -> ScanOutput {
        ScanState::new(self.buffer.cursor()).run()
    }
}

/// Mutable state of one scan.
struct ScanState<'a> {
    cursor: Cursor<'a>,
    /// Byte offset of the first byte of the token being scanned.
    start: u32,
    /// Line of the first byte of the token being scanned.
    start_line: u32,
    /// Current 1-based line.
    line: u32,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
}

impl<'a> ScanState<'a> {
    fn new(cursor: Cursor<'a>) -> Self {
        ScanState {
            cursor,
            start: 0,
            start_line: 1,
            line: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn run(mut self) -> ScanOutput {
        while !self.cursor.is_eof() {
            self.start = self.cursor.pos();
            self.start_line = self.line;
            self.scan_token();
        }
        self.tokens.push(Token::eof(self.line));
        ScanOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn scan_token(&mut self) {
        match self.cursor.current() {
            b'(' => self.single(TokenKind::LeftParen),
            b')' => self.single(TokenKind::RightParen),
            b'{' => self.single(TokenKind::LeftBrace),
            b'}' => self.single(TokenKind::RightBrace),
            b',' => self.single(TokenKind::Comma),
            b'.' => self.single(TokenKind::Dot),
            b'-' => self.single(TokenKind::Minus),
            b'+' => self.single(TokenKind::Plus),
            b';' => self.single(TokenKind::Semicolon),
            b'*' => self.single(TokenKind::Star),
            b'!' => self.with_equal(TokenKind::BangEqual, TokenKind::Bang),
            b'=' => self.with_equal(TokenKind::EqualEqual, TokenKind::Equal),
            b'<' => self.with_equal(TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.with_equal(TokenKind::GreaterEqual, TokenKind::Greater),
            b'/' => self.slash_or_comment(),
            b' ' | b'\r' | b'\t' => self.cursor.advance(),
            b'\n' => {
                self.cursor.advance();
                self.line += 1;
            }
            b'"' => self.string(),
            b'0'..=b'9' => self.number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            _ => self.unexpected_character(),
        }
    }

    // ─── Emission ───────────────────────────────────────────────────

    fn add_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.cursor.slice_from(self.start);
        trace!(kind = %kind, lexeme, line = self.start_line, "token");
        self.tokens
            .push(Token::new(kind, lexeme, literal, self.start_line));
    }

    #[cold]
    fn error(&mut self, error: ScanError) {
        debug!(line = error.line(), %error, "scan error");
        self.errors.push(error);
    }

    // ─── Operators ──────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit `kind`.
    fn single(&mut self, kind: TokenKind) {
        self.cursor.advance();
        self.add_token(kind, None);
    }

    /// `!`, `=`, `<`, `>`: emit `compound` when followed by `=`.
    fn with_equal(&mut self, compound: TokenKind, single: TokenKind) {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.add_token(compound, None);
        } else {
            self.add_token(single, None);
        }
    }

    // ─── Comments ───────────────────────────────────────────────────

    fn slash_or_comment(&mut self) {
        self.cursor.advance(); // consume first '/'
        if self.cursor.current() == b'/' {
            // The newline is left for the dispatch so it bumps the line count.
            self.cursor.eat_until_newline_or_eof();
        } else {
            self.add_token(TokenKind::Slash, None);
        }
    }

    // ─── Literals ───────────────────────────────────────────────────

    /// String literal. No escape processing: backslashes are data.
    fn string(&mut self) {
        self.cursor.advance(); // consume opening '"'
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => break,
                b'\n' => {
                    self.line += 1;
                    self.cursor.advance();
                }
                _ => {
                    // Ran off the end: nothing after the opening quote is
                    // tokenized.
                    self.error(ScanError::UnterminatedString {
                        line: self.start_line,
                    });
                    return;
                }
            }
        }
        let value = self.cursor.slice(self.start + 1, self.cursor.pos()).to_owned();
        self.cursor.advance(); // consume closing '"'
        self.add_token(TokenKind::String, Some(Literal::String(value)));
    }

    /// Number literal: `digits` or `digits.digits`.
    fn number(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        if self.cursor.current() == b'.' {
            if self.cursor.peek().is_ascii_digit() {
                self.cursor.advance(); // consume '.'
                self.cursor.eat_while(|b| b.is_ascii_digit());
            } else {
                // Keep the integer part; the '.' is scanned on its own next.
                self.error(ScanError::MalformedNumber {
                    line: self.start_line,
                });
            }
        }

        match self.cursor.slice_from(self.start).parse::<f64>() {
            Ok(value) => self.add_token(TokenKind::Number, Some(Literal::Number(value))),
            Err(_) => self.error(ScanError::MalformedNumber {
                line: self.start_line,
            }),
        }
    }

    // ─── Identifiers ────────────────────────────────────────────────

    fn identifier(&mut self) {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(self.start);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind, None);
    }

    // ─── Errors ─────────────────────────────────────────────────────

    /// Skip one whole character that starts no token.
    fn unexpected_character(&mut self) {
        let ch = self
            .cursor
            .current_char()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.cursor.advance_char();
        self.error(ScanError::UnexpectedCharacter {
            line: self.line,
            ch,
        });
    }
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests;

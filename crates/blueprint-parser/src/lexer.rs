//! A fail-fast lexer over `&str` input.
//!
//! The lexer implements zero-copy tokenizing: token payloads borrow directly
//! from the source string using `Cow::Borrowed` whenever no processing is
//! required (names, numbers, escape-free strings).
//!
//! Unlike error-recovering lexers that emit `Error` tokens and keep going,
//! this one stops at the first malformed character and returns a typed
//! [`LexError`] carrying the unconsumed remainder and a precise position.
//! No partial token sequence accompanies a failure.

use crate::token::Token;
use crate::token::TokenKind;
use crate::LexError;
use crate::SourcePosition;
use crate::SourceSpan;
use std::borrow::Cow;

/// Tokenizes `text` into an ordered token sequence.
///
/// `token_limit`, when present, bounds the number of tokens the lexer will
/// produce; exceeding it fails with [`LexError::TokenLimitExceeded`]. Empty
/// input yields an empty (not absent) sequence.
pub fn tokenize(text: &str, token_limit: Option<usize>) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = Lexer::new(text);
    let mut tokens = vec![];
    while let Some(token) = lexer.next_token()? {
        if let Some(limit) = token_limit
            && tokens.len() >= limit
        {
            return Err(LexError::TokenLimitExceeded { limit });
        }
        tokens.push(token);
    }
    Ok(tokens)
}

/// A lexer over a `&str` input.
///
/// Produces [`Token`]s with zero-copy payloads where possible. The `'src`
/// lifetime ties token payloads to the source string.
pub struct Lexer<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    ///
    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current UTF-8 character column (0-based).
    ///
    /// This counts characters, not bytes.
    curr_col: usize,

    /// Whether the previous character was `\r`.
    ///
    /// Used to handle `\r\n` as a single newline: when we see `\r`, we set
    /// this flag; if the next character is `\n`, we skip it without
    /// incrementing the line number again.
    last_char_was_cr: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col: 0,
            last_char_was_cr: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    /// Returns the remaining source text to be lexed.
    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    /// Returns the current source position.
    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(self.curr_line, self.curr_col, self.curr_byte_offset)
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Peeks at the nth character ahead without consuming.
    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// Handles line accounting for `\n`, `\r`, and `\r\n` (one line each).
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                // The \n of a \r\n pair. The line was already incremented
                // when we saw the \r.
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col += 1;
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Creates a span from `start` to the current position.
    fn make_span(&self, start: SourcePosition) -> SourceSpan {
        SourceSpan::new(start, self.curr_position())
    }

    /// Fails with [`LexError::Malformed`] at the current position.
    fn malformed<T>(&self) -> Result<T, LexError> {
        Err(LexError::Malformed {
            remainder: self.remaining().to_string(),
            position: self.curr_position(),
        })
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    /// Advances to the next token, skipping ignored characters.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token<'src>>, LexError> {
        self.skip_ignored();

        let start = self.curr_position();
        let Some(ch) = self.peek_char() else {
            return Ok(None);
        };

        let token = match ch {
            '!' => self.punctuator(TokenKind::Bang, start),
            '$' => self.punctuator(TokenKind::Dollar, start),
            '&' => self.punctuator(TokenKind::Ampersand, start),
            '(' => self.punctuator(TokenKind::ParenOpen, start),
            ')' => self.punctuator(TokenKind::ParenClose, start),
            ':' => self.punctuator(TokenKind::Colon, start),
            '=' => self.punctuator(TokenKind::Equals, start),
            '@' => self.punctuator(TokenKind::At, start),
            '[' => self.punctuator(TokenKind::SquareBracketOpen, start),
            ']' => self.punctuator(TokenKind::SquareBracketClose, start),
            '{' => self.punctuator(TokenKind::CurlyBraceOpen, start),
            '}' => self.punctuator(TokenKind::CurlyBraceClose, start),
            '|' => self.punctuator(TokenKind::Pipe, start),
            '.' => self.lex_ellipsis(start)?,
            '"' => self.lex_string(start)?,
            c if is_name_start(c) => self.lex_name(start),
            c if c == '-' || c.is_ascii_digit() => self.lex_number(start)?,
            _ => return self.malformed(),
        };
        Ok(Some(token))
    }

    /// Consumes one character and produces a punctuator token.
    fn punctuator(&mut self, kind: TokenKind<'src>, start: SourcePosition) -> Token<'src> {
        self.consume();
        Token::new(kind, self.make_span(start))
    }

    // =========================================================================
    // Ignored characters
    // =========================================================================

    /// Skips whitespace, line terminators, the BOM, commas, and comments.
    ///
    /// Commas and comments are insignificant in this grammar and are
    /// discarded rather than preserved as trivia.
    fn skip_ignored(&mut self) {
        loop {
            match self.peek_char() {
                Some(' ' | '\t' | '\n' | '\r' | '\u{FEFF}' | ',') => {
                    self.consume();
                }
                Some('#') => self.skip_comment(),
                _ => break,
            }
        }
    }

    /// Skips a `#` comment up to (but not including) the line terminator.
    ///
    /// Comments cannot span lines, so the byte length to skip can be found
    /// with a single `memchr` scan and the column advanced in one step.
    fn skip_comment(&mut self) {
        let rest = self.remaining();
        let len = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        self.curr_col += rest[..len].chars().count();
        self.curr_byte_offset += len;
        // The `#` is not a `\r`: a `\n` terminating this comment starts a
        // new line even when the character before the comment was a bare
        // `\r`.
        self.last_char_was_cr = false;
    }

    // =========================================================================
    // Compound tokens
    // =========================================================================

    /// Lexes `...`. A lone or doubled dot is malformed.
    fn lex_ellipsis(&mut self, start: SourcePosition) -> Result<Token<'src>, LexError> {
        if self.peek_char_nth(1) != Some('.') || self.peek_char_nth(2) != Some('.') {
            return self.malformed();
        }
        self.consume();
        self.consume();
        self.consume();
        Ok(Token::new(TokenKind::Ellipsis, self.make_span(start)))
    }

    /// Lexes a name, keyword, or boolean/null literal.
    fn lex_name(&mut self, start: SourcePosition) -> Token<'src> {
        let name_start_offset = self.curr_byte_offset;
        while let Some(c) = self.peek_char() {
            if is_name_continue(c) {
                self.consume();
            } else {
                break;
            }
        }
        let name = &self.source[name_start_offset..self.curr_byte_offset];
        let kind = match name {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            _ => TokenKind::Name(Cow::Borrowed(name)),
        };
        Token::new(kind, self.make_span(start))
    }

    /// Lexes an int or float literal, including any leading `-`.
    fn lex_number(&mut self, start: SourcePosition) -> Result<Token<'src>, LexError> {
        let number_start_offset = self.curr_byte_offset;

        if self.peek_char() == Some('-') {
            self.consume();
        }
        if !self.consume_digits() {
            return self.malformed();
        }

        let mut is_float = false;

        if self.peek_char() == Some('.')
            && self.peek_char_nth(1).is_some_and(|c| c.is_ascii_digit())
        {
            is_float = true;
            self.consume();
            self.consume_digits();
        } else if self.peek_char() == Some('.') {
            // A dot not followed by a digit, e.g. `1.` or `1.e5`.
            return self.malformed();
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume();
            }
            if !self.consume_digits() {
                return self.malformed();
            }
        }

        // A number running directly into a name (e.g. `123abc`) is malformed.
        if self.peek_char().is_some_and(is_name_start) {
            return self.malformed();
        }

        let raw = &self.source[number_start_offset..self.curr_byte_offset];
        let kind = if is_float {
            TokenKind::FloatValue(Cow::Borrowed(raw))
        } else {
            TokenKind::IntValue(Cow::Borrowed(raw))
        };
        Ok(Token::new(kind, self.make_span(start)))
    }

    /// Consumes a run of ASCII digits, returning whether at least one was
    /// consumed.
    fn consume_digits(&mut self) -> bool {
        let mut any = false;
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.consume();
            any = true;
        }
        any
    }

    // =========================================================================
    // String literals
    // =========================================================================

    /// Lexes an inline (`"…"`) or block (`"""…"""`) string literal.
    ///
    /// The produced token payload is the *cooked* content: quotes stripped
    /// and escape sequences resolved. Escape-free inline strings and block
    /// strings without `\"""` borrow straight from the source.
    fn lex_string(&mut self, start: SourcePosition) -> Result<Token<'src>, LexError> {
        if self.peek_char_nth(1) == Some('"') && self.peek_char_nth(2) == Some('"') {
            return self.lex_block_string(start);
        }

        // Opening quote
        self.consume();
        let content_start_offset = self.curr_byte_offset;
        let mut cooked: Option<String> = None;

        loop {
            match self.peek_char() {
                // Unterminated: end of input or line terminator inside an
                // inline string.
                None | Some('\n' | '\r') => return self.malformed(),

                Some('"') => {
                    let content = &self.source[content_start_offset..self.curr_byte_offset];
                    self.consume();
                    let payload = match cooked {
                        Some(owned) => Cow::Owned(owned),
                        None => Cow::Borrowed(content),
                    };
                    return Ok(Token::new(
                        TokenKind::StringValue(payload),
                        self.make_span(start),
                    ));
                }

                Some('\\') => {
                    let cooked = cooked.get_or_insert_with(|| {
                        self.source[content_start_offset..self.curr_byte_offset].to_string()
                    });
                    self.consume();
                    let resolved = match self.peek_char() {
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some('/') => '/',
                        Some('b') => '\u{0008}',
                        Some('f') => '\u{000C}',
                        Some('n') => '\n',
                        Some('r') => '\r',
                        Some('t') => '\t',
                        Some('u') => {
                            self.consume();
                            let ch = self.lex_unicode_escape()?;
                            cooked.push(ch);
                            continue;
                        }
                        _ => return self.malformed(),
                    };
                    self.consume();
                    cooked.push(resolved);
                }

                Some(c) => {
                    self.consume();
                    if let Some(cooked) = cooked.as_mut() {
                        cooked.push(c);
                    }
                }
            }
        }
    }

    /// Lexes the `XXXX` hex digits of a `\uXXXX` escape. The `\u` has
    /// already been consumed.
    fn lex_unicode_escape(&mut self) -> Result<char, LexError> {
        let mut code_point: u32 = 0;
        for _ in 0..4 {
            let digit = match self.peek_char().and_then(|c| c.to_digit(16)) {
                Some(digit) => digit,
                None => return self.malformed(),
            };
            code_point = code_point * 16 + digit;
            self.consume();
        }
        match char::from_u32(code_point) {
            Some(ch) => Ok(ch),
            None => self.malformed(),
        }
    }

    /// Lexes a block string literal. The leading `"""` has not yet been
    /// consumed.
    ///
    /// Block string content is taken as-is (no indent stripping); the only
    /// recognized escape is `\"""`.
    fn lex_block_string(&mut self, start: SourcePosition) -> Result<Token<'src>, LexError> {
        self.consume();
        self.consume();
        self.consume();
        let content_start_offset = self.curr_byte_offset;
        let mut cooked: Option<String> = None;

        loop {
            match self.peek_char() {
                None => return self.malformed(),

                Some('"')
                    if self.peek_char_nth(1) == Some('"')
                        && self.peek_char_nth(2) == Some('"') =>
                {
                    let content = &self.source[content_start_offset..self.curr_byte_offset];
                    self.consume();
                    self.consume();
                    self.consume();
                    let payload = match cooked {
                        Some(owned) => Cow::Owned(owned),
                        None => Cow::Borrowed(content),
                    };
                    return Ok(Token::new(
                        TokenKind::StringValue(payload),
                        self.make_span(start),
                    ));
                }

                Some('\\')
                    if self.peek_char_nth(1) == Some('"')
                        && self.peek_char_nth(2) == Some('"')
                        && self.peek_char_nth(3) == Some('"') =>
                {
                    let cooked = cooked.get_or_insert_with(|| {
                        self.source[content_start_offset..self.curr_byte_offset].to_string()
                    });
                    self.consume();
                    self.consume();
                    self.consume();
                    self.consume();
                    cooked.push_str("\"\"\"");
                }

                Some(c) => {
                    self.consume();
                    if let Some(cooked) = cooked.as_mut() {
                        cooked.push(c);
                    }
                }
            }
        }
    }
}

/// Whether `c` can start a name (`[_A-Za-z]`).
fn is_name_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Whether `c` can continue a name (`[_0-9A-Za-z]`).
fn is_name_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

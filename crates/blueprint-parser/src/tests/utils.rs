//! Shared helpers for lexer and parser tests.

use crate::ast;
use crate::token::Token;
use crate::token::TokenKind;
use crate::tokenize;
use crate::ParseError;

/// Tokenizes `text` with no token limit, panicking on lexer failure.
pub fn lex(text: &str) -> Vec<Token<'_>> {
    tokenize(text, None).expect("input should tokenize")
}

/// Returns just the token kinds for `text`.
pub fn lex_kinds(text: &str) -> Vec<TokenKind<'_>> {
    lex(text).into_iter().map(|t| t.kind).collect()
}

/// Lexes and parses `text` in one step.
pub fn parse_text(text: &str) -> Result<ast::Document, ParseError> {
    crate::parse(&lex(text))
}

/// Lexes and parses `text`, panicking on failure.
pub fn parse_valid(text: &str) -> ast::Document {
    parse_text(text).expect("input should parse")
}

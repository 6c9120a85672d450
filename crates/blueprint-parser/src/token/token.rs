use crate::token::TokenKind;
use crate::SourceSpan;

/// A lexed token with location (span) information.
///
/// Comments, commas, whitespace, and the BOM never appear here; the lexer
/// discards them as ignored characters.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    /// The kind of token, including any literal payload.
    pub kind: TokenKind<'src>,

    /// The source location span of this token.
    pub span: SourceSpan,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind<'src>, span: SourceSpan) -> Self {
        Self { kind, span }
    }
}

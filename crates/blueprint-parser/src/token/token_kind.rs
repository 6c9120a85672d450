use std::borrow::Cow;

/// The kind of a lexed token.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: literal payloads borrow
/// string slices directly from the source text via `Cow::Borrowed`. Payloads
/// that require processing (e.g. string literals containing escape
/// sequences) fall back to `Cow::Owned`.
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens
/// (`IntValue("-123")`), not as separate minus and number tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals
    // =========================================================================
    /// A name/identifier.
    Name(Cow<'src, str>),

    /// Raw source text of an integer literal, including any negative sign
    /// (e.g. `"-123"`, `"0"`).
    IntValue(Cow<'src, str>),

    /// Raw source text of a float literal, including any negative sign
    /// (e.g. `"-1.23e-4"`, `"0.5"`).
    FloatValue(Cow<'src, str>),

    /// The *cooked* content of a string literal: quotes stripped and escape
    /// sequences resolved. Borrowed when the literal contained no escapes.
    StringValue(Cow<'src, str>),

    // =========================================================================
    // Boolean and null (distinct from Name for type safety)
    // =========================================================================
    /// The `true` literal.
    True,
    /// The `false` literal.
    False,
    /// The `null` literal.
    Null,
}

impl<'src> TokenKind<'src> {
    /// Returns a short human-readable description of this token kind, used
    /// when assembling parse-error messages.
    pub fn description(&self) -> Cow<'static, str> {
        match self {
            TokenKind::Ampersand => Cow::Borrowed("`&`"),
            TokenKind::At => Cow::Borrowed("`@`"),
            TokenKind::Bang => Cow::Borrowed("`!`"),
            TokenKind::Colon => Cow::Borrowed("`:`"),
            TokenKind::CurlyBraceClose => Cow::Borrowed("`}`"),
            TokenKind::CurlyBraceOpen => Cow::Borrowed("`{`"),
            TokenKind::Dollar => Cow::Borrowed("`$`"),
            TokenKind::Ellipsis => Cow::Borrowed("`...`"),
            TokenKind::Equals => Cow::Borrowed("`=`"),
            TokenKind::ParenClose => Cow::Borrowed("`)`"),
            TokenKind::ParenOpen => Cow::Borrowed("`(`"),
            TokenKind::Pipe => Cow::Borrowed("`|`"),
            TokenKind::SquareBracketClose => Cow::Borrowed("`]`"),
            TokenKind::SquareBracketOpen => Cow::Borrowed("`[`"),
            TokenKind::Name(name) => Cow::Owned(format!("`{name}`")),
            TokenKind::IntValue(raw) => Cow::Owned(format!("`{raw}`")),
            TokenKind::FloatValue(raw) => Cow::Owned(format!("`{raw}`")),
            TokenKind::StringValue(_) => Cow::Borrowed("string value"),
            TokenKind::True => Cow::Borrowed("`true`"),
            TokenKind::False => Cow::Borrowed("`false`"),
            TokenKind::Null => Cow::Borrowed("`null`"),
        }
    }

    /// Returns the name payload if this is a `Name` token.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            TokenKind::Name(name) => Some(name.as_ref()),
            _ => None,
        }
    }
}

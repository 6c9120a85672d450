use crate::SourcePosition;

/// An error produced while tokenizing document text.
///
/// The lexer fails fast: no partial token sequence accompanies an error.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LexError {
    /// The input could not be tokenized at `position`.
    ///
    /// `remainder` is the entire unconsumed suffix of the input, starting at
    /// the offending character. Error-message formatting downstream trims
    /// this to a short snippet.
    #[error("malformed input at line {}, column {}", position.line() + 1, position.col() + 1)]
    Malformed {
        remainder: String,
        position: SourcePosition,
    },

    /// Tokenizing produced more than the configured maximum token count.
    #[error("token limit of {limit} exceeded")]
    TokenLimitExceeded { limit: usize },
}

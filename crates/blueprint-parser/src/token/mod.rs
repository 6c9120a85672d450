//! Token types produced by the lexer and consumed by the parser.

mod token;
mod token_kind;

pub use token::Token;
pub use token_kind::TokenKind;

//! Lexing and parsing for the blueprint pipeline.
//!
//! This crate turns raw query-document text into a typed [`ast::Document`]
//! tree. It is standalone: the pipeline crate consumes the AST produced here
//! but nothing here depends on the pipeline.

pub mod ast;
mod lex_error;
mod lexer;
mod parse_error;
mod parser;
mod source;
mod source_position;
mod source_span;
pub mod token;

pub use lex_error::LexError;
pub use lexer::tokenize;
pub use lexer::Lexer;
pub use parse_error::ErrorPosition;
pub use parse_error::ParseError;
pub use parser::parse;
pub use source::Source;
pub use source_position::SourcePosition;
pub use source_span::SourceSpan;

#[cfg(test)]
mod tests;

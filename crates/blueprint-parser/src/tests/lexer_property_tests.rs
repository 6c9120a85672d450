//! Property tests: the lexer and parser must return typed errors, never
//! panic, for any input.

use crate::tokenize;
use proptest::prelude::*;

proptest! {
    /// `tokenize` never panics, whatever the input bytes.
    #[test]
    fn tokenize_never_panics(input in ".{0,256}") {
        let _ = tokenize(&input, None);
    }

    /// A token limit never produces a partial sequence: either the whole
    /// input tokenizes within the limit, or the call fails outright.
    #[test]
    fn token_limit_never_truncates(input in "[a-z{}() ]{0,64}", limit in 0usize..16) {
        let unlimited = tokenize(&input, None);
        match (tokenize(&input, Some(limit)), unlimited) {
            (Ok(limited), Ok(unlimited)) => prop_assert_eq!(limited, unlimited),
            (Err(_), _) | (_, Err(_)) => {}
        }
    }

    /// Lexing then parsing arbitrary input returns a value, never panics.
    #[test]
    fn parse_never_panics(input in ".{0,256}") {
        if let Ok(tokens) = tokenize(&input, None) {
            let _ = crate::parse(&tokens);
        }
    }
}

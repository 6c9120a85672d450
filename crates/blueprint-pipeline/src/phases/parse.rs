use crate::Blueprint;
use crate::Input;
use crate::Outcome;
use crate::Phase;
use crate::PhaseError;
use crate::PhaseId;
use crate::PhaseOptions;
use blueprint_parser::ast;
use blueprint_parser::tokenize;
use blueprint_parser::LexError;
use blueprint_parser::ParseError;
use std::panic::AssertUnwindSafe;

/// How many characters of the unconsumed remainder a lexer-failure message
/// shows.
const LEX_ERROR_SNIPPET_CHARS: usize = 10;

/// The fixed message for a fault that escaped the lexer/parser.
const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred during parsing";

/// Lexes and parses the blueprint's input text, replacing `input` with the
/// parsed document.
///
/// Usable both as the pipeline's first phase and standalone: any
/// `impl Into<Blueprint>` input (raw text, a `Source`, an existing
/// blueprint) can be handed to [`Pipeline::run`](crate::Pipeline::run) or
/// normalized by the caller first.
///
/// On any lexer or parser failure — including a panic raised inside them,
/// which is caught and converted, never propagated — the phase records
/// exactly one [`PhaseError`]. That error *replaces* any prior errors this
/// phase recorded on the blueprint, so re-running the phase never
/// accumulates stale parse diagnostics. The failure outcome is then a Jump
/// to `options.result_phase` when `options.jump_phases` is set, and an
/// Abort otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParsePhase;

impl ParsePhase {
    pub const ID: PhaseId = PhaseId::new("parse");
}

impl Phase for ParsePhase {
    fn id(&self) -> PhaseId {
        Self::ID
    }

    fn run(&self, mut blueprint: Blueprint, options: &PhaseOptions) -> Outcome {
        // Idempotent re-entry: a blueprint that already holds a document has
        // nothing left to parse.
        if matches!(blueprint.input, Input::Document(_)) {
            return Outcome::Continue(blueprint);
        }

        let error = match blueprint.input.source_text() {
            None => PhaseError::new(Self::ID, "Invalid input"),
            Some(text) => {
                match parse_text(text, options.token_limit) {
                    Ok(document) => {
                        log::trace!(
                            "parsed {} definition(s)",
                            document.definitions.len(),
                        );
                        blueprint.input = Input::Document(document);
                        return Outcome::Continue(blueprint);
                    }
                    Err(error) => error.into_phase_error(),
                }
            }
        };

        // Exactly one error for this phase: replace, don't append.
        blueprint
            .execution
            .validation_errors
            .retain(|e| e.phase() != Self::ID);
        blueprint.execution.validation_errors.push(error);

        match (options.jump_phases, options.result_phase) {
            (true, Some(target)) => Outcome::Jump(blueprint, target),
            _ => Outcome::Abort(blueprint),
        }
    }
}

/// An expected or unexpected failure inside tokenize/parse.
enum ParseFailure {
    Lex(LexError),
    Parse(ParseError),
    /// A panic payload message, when the payload carried one.
    Fault(Option<String>),
}

impl ParseFailure {
    /// Applies the deterministic message-formatting rules per error source.
    fn into_phase_error(self) -> PhaseError {
        match self {
            ParseFailure::Parse(error) => {
                let position = error.position();
                PhaseError::new(ParsePhase::ID, error.message())
                    .with_location(position.line(), position.column())
            }

            ParseFailure::Lex(LexError::TokenLimitExceeded { .. }) => {
                PhaseError::new(ParsePhase::ID, "Token limit exceeded")
            }

            ParseFailure::Lex(LexError::Malformed {
                remainder,
                position,
            }) => {
                let snippet: String =
                    remainder.chars().take(LEX_ERROR_SNIPPET_CHARS).collect();
                let rendered = if snippet.chars().any(char::is_control) {
                    format!("{snippet:?}")
                } else {
                    snippet
                };
                PhaseError::new(ParsePhase::ID, format!("Parsing failed at `{rendered}`"))
                    .with_location(position.line() + 1, position.col() + 1)
            }

            ParseFailure::Fault(None) => {
                PhaseError::new(ParsePhase::ID, UNKNOWN_ERROR_MESSAGE)
            }
            ParseFailure::Fault(Some(message)) => PhaseError::new(
                ParsePhase::ID,
                format!("{UNKNOWN_ERROR_MESSAGE}: {message}"),
            ),
        }
    }
}

/// Tokenizes and parses `text`, containing any panic the lexer or parser
/// raises.
fn parse_text(text: &str, token_limit: Option<usize>) -> Result<ast::Document, ParseFailure> {
    let caught = std::panic::catch_unwind(AssertUnwindSafe(|| {
        let tokens = tokenize(text, token_limit).map_err(ParseFailure::Lex)?;
        blueprint_parser::parse(&tokens).map_err(ParseFailure::Parse)
    }));

    match caught {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned());
            Err(ParseFailure::Fault(message))
        }
    }
}

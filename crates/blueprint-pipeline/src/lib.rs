//! A phase-based front-end pipeline for query documents.
//!
//! Raw text goes in one end; a validated, annotated [`Blueprint`] comes out
//! the other. The pipeline is an ordered list of [`Phase`]s, each of which
//! receives the current blueprint and yields one of three outcomes:
//! continue, jump past the remaining phases to a named target, or abort.
//! Phases accumulate structured [`PhaseError`]s and [`Flags`] on the
//! blueprint instead of failing fast, so callers always get an inspectable
//! value back.

mod blueprint;
mod execution;
mod flags;
mod node;
mod phase;
mod phase_error;
mod phase_options;
pub mod phases;
mod pipeline;

pub use blueprint::Blueprint;
pub use blueprint::Input;
pub use execution::Execution;
pub use execution::ExecutionResult;
pub use flags::Flagged;
pub use flags::Flags;
pub use node::Directive;
pub use node::Fragment;
pub use node::Operation;
pub use node::SchemaDefinition;
pub use phase::Outcome;
pub use phase::Phase;
pub use phase::PhaseId;
pub use phase_error::ErrorLocation;
pub use phase_error::PhaseError;
pub use phase_options::PhaseOptions;
pub use pipeline::Completion;
pub use pipeline::Pipeline;
pub use pipeline::PipelineRun;

pub use blueprint_parser as parser;

#[cfg(test)]
mod tests;

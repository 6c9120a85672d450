//! The phases shipped with the pipeline.
//!
//! `ParsePhase` turns text into a document, `ConvertPhase` drafts the
//! document into the blueprint's structural collections, and the
//! `validation` phases inspect the drafted blueprint, attaching flags and
//! errors. All of them implement the same [`Phase`](crate::Phase) contract;
//! new validations are added by implementing that contract, not by touching
//! the driver.

mod convert;
mod parse;
pub mod validation;

pub use convert::ConvertPhase;
pub use parse::ParsePhase;

//! Validation phases.
//!
//! Every validation follows the same three-step contract: inspect a
//! structural property of the blueprint, attach a named flag plus a
//! descriptive [`PhaseError`](crate::PhaseError) to the offending node(s)
//! on violation, and consult the options to decide whether to short-circuit
//! via Jump. Validations flag and continue by default; aggregate-error
//! inspection is a terminal phase's job.

mod provided_an_operation;
mod unique_operation_names;

pub use provided_an_operation::ProvidedAnOperation;
pub use provided_an_operation::NO_OPERATIONS_FLAG;
pub use unique_operation_names::UniqueOperationNames;
pub use unique_operation_names::DUPLICATE_NAME_FLAG;

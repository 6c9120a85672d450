use crate::Blueprint;
use crate::Outcome;
use crate::Phase;
use crate::PhaseError;
use crate::PhaseId;
use crate::PhaseOptions;

/// Flag set on the blueprint when the document defines no operations.
pub const NO_OPERATIONS_FLAG: &str = "no_operations";

/// Checks that the blueprint contains at least one operation.
///
/// On violation, sets the [`NO_OPERATIONS_FLAG`] on the blueprint and
/// appends a "No operations provided." error. The flag insert is idempotent
/// (re-running the phase cannot duplicate it), but the error append is not:
/// a second run on an already-flagged blueprint records a second identical
/// error.
///
/// With `options.jump_phases` set and a `validation_result_phase`
/// configured, a flagged blueprint jumps there; otherwise the phase
/// continues either way, leaving aggregate-error inspection to a terminal
/// phase.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProvidedAnOperation;

impl ProvidedAnOperation {
    pub const ID: PhaseId = PhaseId::new("provided_an_operation");
}

impl Phase for ProvidedAnOperation {
    fn id(&self) -> PhaseId {
        Self::ID
    }

    fn run(&self, mut blueprint: Blueprint, options: &PhaseOptions) -> Outcome {
        if blueprint.operations.is_empty() {
            blueprint.set_flag(NO_OPERATIONS_FLAG, "the document defines no operations");
            blueprint
                .execution
                .validation_errors
                .push(PhaseError::new(Self::ID, "No operations provided."));
        }

        if blueprint.has_flag(NO_OPERATIONS_FLAG)
            && options.jump_phases
            && let Some(target) = options.validation_result_phase
        {
            return Outcome::Jump(blueprint, target);
        }
        Outcome::Continue(blueprint)
    }
}

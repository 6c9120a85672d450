use crate::Blueprint;
use crate::Outcome;
use crate::Phase;
use crate::PhaseError;
use crate::PhaseId;
use crate::PhaseOptions;
use indexmap::IndexMap;

/// Flag set on each drafted operation whose name is shared with another
/// operation in the same document.
pub const DUPLICATE_NAME_FLAG: &str = "duplicate_name";

/// Checks that no two named operations share a name.
///
/// Anonymous operations are exempt. For each duplicated name, every
/// offending node gets the [`DUPLICATE_NAME_FLAG`] and one error is
/// appended carrying the locations of all offenders.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueOperationNames;

impl UniqueOperationNames {
    pub const ID: PhaseId = PhaseId::new("unique_operation_names");
}

impl Phase for UniqueOperationNames {
    fn id(&self) -> PhaseId {
        Self::ID
    }

    fn run(&self, mut blueprint: Blueprint, options: &PhaseOptions) -> Outcome {
        // Operation indices per name, in first-seen order.
        let mut by_name: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (idx, operation) in blueprint.operations.iter().enumerate() {
            if let Some(name) = operation.name() {
                by_name.entry(name.to_string()).or_default().push(idx);
            }
        }

        let mut any_duplicates = false;
        for (name, indices) in by_name {
            if indices.len() < 2 {
                continue;
            }
            any_duplicates = true;

            let mut error = PhaseError::new(
                Self::ID,
                format!("There can be only one operation named \"{name}\"."),
            );
            for idx in indices {
                let operation = &mut blueprint.operations[idx];
                let start = operation.span().start_inclusive;
                error = error.with_location(start.line() + 1, start.col() + 1);
                operation.set_flag(DUPLICATE_NAME_FLAG, "another operation shares this name");
            }
            blueprint.execution.validation_errors.push(error);
        }

        if any_duplicates
            && options.jump_phases
            && let Some(target) = options.validation_result_phase
        {
            return Outcome::Jump(blueprint, target);
        }
        Outcome::Continue(blueprint)
    }
}

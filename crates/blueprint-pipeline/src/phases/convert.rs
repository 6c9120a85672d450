use crate::Blueprint;
use crate::Directive;
use crate::Fragment;
use crate::Input;
use crate::Operation;
use crate::Outcome;
use crate::Phase;
use crate::PhaseError;
use crate::PhaseId;
use crate::PhaseOptions;
use crate::SchemaDefinition;
use blueprint_parser::ast;

/// Drafts the parsed document into the blueprint's structural collections.
///
/// Every definition is walked exactly once, in source order, and appended
/// to the collection for its kind; source positions ride along on the
/// drafted nodes. A document with zero definitions is a no-op success. The
/// drafting dispatch is an exhaustive `match`, so a new definition kind in
/// the AST forces a compile-time-checked update here.
///
/// If the input is anything other than a document (a prior phase failed, or
/// a wrong-typed input reached this phase), the phase records a single
/// "Invalid input" error and leaves the blueprint otherwise unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConvertPhase;

impl ConvertPhase {
    pub const ID: PhaseId = PhaseId::new("convert");
}

impl Phase for ConvertPhase {
    fn id(&self) -> PhaseId {
        Self::ID
    }

    fn run(&self, mut blueprint: Blueprint, _options: &PhaseOptions) -> Outcome {
        let Input::Document(document) = &mut blueprint.input else {
            blueprint
                .execution
                .validation_errors
                .push(PhaseError::new(Self::ID, "Invalid input"));
            return Outcome::Continue(blueprint);
        };

        // Draft the definitions away; the (now empty) document stays in
        // place, so re-running this phase is a no-op.
        let definitions = std::mem::take(&mut document.definitions);
        log::trace!("drafting {} definition(s)", definitions.len());
        for definition in definitions {
            match definition {
                ast::Definition::Operation(op) => {
                    blueprint.operations.push(Operation::draft(op));
                }
                ast::Definition::Fragment(frag) => {
                    blueprint.fragments.push(Fragment::draft(frag));
                }
                ast::Definition::Schema(schema) => {
                    blueprint
                        .schema_definitions
                        .push(SchemaDefinition::draft(schema));
                }
                ast::Definition::Directive(directive) => {
                    blueprint.directives.push(Directive::draft(directive));
                }
            }
        }

        Outcome::Continue(blueprint)
    }
}

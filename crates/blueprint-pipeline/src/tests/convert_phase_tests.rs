use crate::phases::ConvertPhase;
use crate::tests::utils::drafted;
use crate::Blueprint;
use crate::Outcome;
use crate::Phase;
use crate::PhaseOptions;
use blueprint_parser::ast;

#[test]
fn drafts_each_definition_kind_into_its_collection() {
    let text = "\
query GetUser { user { id } }
fragment UserFields on User { name }
schema { query: Query }
directive @lowercase on FIELD
";
    let blueprint = drafted(text);

    assert_eq!(blueprint.operations.len(), 1);
    assert_eq!(blueprint.operations[0].name(), Some("GetUser"));
    assert_eq!(blueprint.operations[0].kind(), ast::OperationKind::Query);

    assert_eq!(blueprint.fragments.len(), 1);
    assert_eq!(blueprint.fragments[0].name(), "UserFields");
    assert_eq!(blueprint.fragments[0].type_condition(), "User");

    assert_eq!(blueprint.schema_definitions.len(), 1);
    assert_eq!(blueprint.directives.len(), 1);
    assert_eq!(blueprint.directives[0].name(), "lowercase");

    assert!(blueprint.execution.validation_errors.is_empty());
}

#[test]
fn drafted_operations_keep_source_order() {
    let blueprint = drafted("query A { a }\nquery B { b }\nmutation C { c }");

    let names: Vec<_> = blueprint
        .operations
        .iter()
        .filter_map(|op| op.name())
        .collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[test]
fn drafted_nodes_carry_their_source_spans() {
    let blueprint = drafted("query A { a }\nquery B { b }");

    let span = blueprint.operations[1].span();
    assert_eq!(span.start_inclusive.line(), 1);
    assert_eq!(span.start_inclusive.col(), 0);
}

#[test]
fn anonymous_shorthand_operation_drafts_without_a_name() {
    let blueprint = drafted("{ a }");

    assert_eq!(blueprint.operations.len(), 1);
    assert_eq!(blueprint.operations[0].name(), None);
}

#[test]
fn empty_document_drafts_nothing_and_continues() {
    let blueprint = drafted("");

    assert!(blueprint.operations.is_empty());
    assert!(blueprint.fragments.is_empty());
    assert!(blueprint.schema_definitions.is_empty());
    assert!(blueprint.directives.is_empty());
    assert!(blueprint.execution.validation_errors.is_empty());
}

#[test]
fn rerun_on_a_drafted_blueprint_adds_nothing() {
    let once = drafted("query A { a }");

    let outcome = ConvertPhase.run(once.clone(), &PhaseOptions::default());

    let Outcome::Continue(twice) = outcome else {
        panic!("expected Continue, got {outcome:?}");
    };
    assert_eq!(twice, once);
}

#[test]
fn non_document_input_records_a_single_invalid_input_error() {
    let blueprint = Blueprint::from("never parsed");

    let outcome = ConvertPhase.run(blueprint, &PhaseOptions::default());

    let Outcome::Continue(blueprint) = outcome else {
        panic!("expected Continue, got {outcome:?}");
    };
    let errors = &blueprint.execution.validation_errors;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].phase(), ConvertPhase::ID);
    assert_eq!(errors[0].message(), "Invalid input");
    assert!(errors[0].locations().is_empty());
    assert!(blueprint.operations.is_empty());
}

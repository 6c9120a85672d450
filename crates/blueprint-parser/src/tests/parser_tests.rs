//! Tests for the parser: definition kinds, selections, values, type
//! annotations, and determinism.

use crate::ast;
use crate::tests::utils::parse_text;
use crate::tests::utils::parse_valid;

// =============================================================================
// Documents
// =============================================================================

/// An empty token sequence is valid input and yields an empty document.
#[test]
fn empty_input_yields_empty_document() {
    let doc = parse_valid("");
    assert_eq!(doc.definitions.len(), 0);
}

/// Comment-only input is an empty document too.
#[test]
fn comment_only_input_yields_empty_document() {
    let doc = parse_valid("# nothing here\n# still nothing");
    assert_eq!(doc.definitions.len(), 0);
}

#[test]
fn parses_multiple_definitions_in_source_order() {
    let doc = parse_valid(
        "query A { a }\n\
         fragment F on T { b }\n\
         mutation B { c }",
    );
    assert_eq!(doc.definitions.len(), 3);
    assert!(matches!(doc.definitions[0], ast::Definition::Operation(_)));
    assert!(matches!(doc.definitions[1], ast::Definition::Fragment(_)));
    assert!(matches!(doc.definitions[2], ast::Definition::Operation(_)));
}

// =============================================================================
// Operations
// =============================================================================

#[test]
fn parses_named_query_operation() {
    let doc = parse_valid("query GetUser { user { id name } }");
    let ast::Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation");
    };
    assert_eq!(op.kind, ast::OperationKind::Query);
    assert_eq!(op.name.as_deref(), Some("GetUser"));
    assert_eq!(op.selection_set.selections.len(), 1);
}

/// The shorthand `{ ... }` form parses as an anonymous query.
#[test]
fn parses_shorthand_operation_as_anonymous_query() {
    let doc = parse_valid("{ name }");
    let ast::Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation");
    };
    assert_eq!(op.kind, ast::OperationKind::Query);
    assert_eq!(op.name, None);
}

#[test]
fn parses_mutation_and_subscription_kinds() {
    let doc = parse_valid("mutation M { a } subscription S { b }");
    let kinds: Vec<_> = doc
        .definitions
        .iter()
        .map(|def| match def {
            ast::Definition::Operation(op) => op.kind,
            other => panic!("expected an operation, got {other:?}"),
        })
        .collect();
    assert_eq!(
        kinds,
        vec![ast::OperationKind::Mutation, ast::OperationKind::Subscription],
    );
}

/// `keyword` and `from_keyword` are inverses over all three kinds.
#[test]
fn operation_kind_keyword_round_trips() {
    for kind in [
        ast::OperationKind::Query,
        ast::OperationKind::Mutation,
        ast::OperationKind::Subscription,
    ] {
        assert_eq!(ast::OperationKind::from_keyword(kind.keyword()), Some(kind));
    }
    assert_eq!(ast::OperationKind::from_keyword("fragment"), None);
}

#[test]
fn parses_variable_definitions_with_defaults() {
    let doc = parse_valid("query Q($id: ID!, $limit: Int = 10) { a }");
    let ast::Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation");
    };
    assert_eq!(op.variable_definitions.len(), 2);
    assert_eq!(op.variable_definitions[0].name, "id");
    assert_eq!(op.variable_definitions[0].type_annotation.to_string(), "ID!");
    assert_eq!(op.variable_definitions[0].default_value, None);
    assert_eq!(
        op.variable_definitions[1].default_value,
        Some(ast::Value::Int("10".to_string())),
    );
}

#[test]
fn parses_operation_directives() {
    let doc = parse_valid("query Q @cached(ttl: 60) { a }");
    let ast::Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation");
    };
    assert_eq!(op.directives.len(), 1);
    assert_eq!(op.directives[0].name, "cached");
    assert_eq!(op.directives[0].arguments[0].name, "ttl");
}

// =============================================================================
// Selections
// =============================================================================

#[test]
fn parses_aliases_arguments_and_nesting() {
    let doc = parse_valid(r#"{ big: avatar(size: 100, format: "png") { url } }"#);
    let ast::Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation");
    };
    let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field");
    };
    assert_eq!(field.alias.as_deref(), Some("big"));
    assert_eq!(field.name, "avatar");
    assert_eq!(field.arguments.len(), 2);
    assert!(field.selection_set.is_some());
}

#[test]
fn parses_fragment_spreads_and_inline_fragments() {
    let doc = parse_valid(
        "{ ...UserFields ... on Admin { permissions } ... @include(if: true) { extra } }",
    );
    let ast::Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation");
    };
    let selections = &op.selection_set.selections;
    assert_eq!(selections.len(), 3);
    assert!(matches!(
        &selections[0],
        ast::Selection::FragmentSpread(spread) if spread.fragment_name == "UserFields",
    ));
    assert!(matches!(
        &selections[1],
        ast::Selection::InlineFragment(inline)
            if inline.type_condition.as_deref() == Some("Admin"),
    ));
    assert!(matches!(
        &selections[2],
        ast::Selection::InlineFragment(inline)
            if inline.type_condition.is_none() && inline.directives.len() == 1,
    ));
}

// =============================================================================
// Fragments
// =============================================================================

#[test]
fn parses_fragment_definition() {
    let doc = parse_valid("fragment UserFields on User @internal { id name }");
    let ast::Definition::Fragment(frag) = &doc.definitions[0] else {
        panic!("expected a fragment");
    };
    assert_eq!(frag.name, "UserFields");
    assert_eq!(frag.type_condition, "User");
    assert_eq!(frag.directives.len(), 1);
    assert_eq!(frag.selection_set.selections.len(), 2);
}

// =============================================================================
// Values
// =============================================================================

#[test]
fn parses_every_value_kind() {
    let doc = parse_valid(
        r#"{ f(a: $var, b: 1, c: 1.5, d: "s", e: true, g: null, h: ACTIVE,
             i: [1, 2], j: { k: "v" }) }"#,
    );
    let ast::Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation");
    };
    let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field");
    };
    let values: Vec<_> = field.arguments.iter().map(|a| &a.value).collect();
    assert_eq!(values[0], &ast::Value::Variable("var".to_string()));
    assert_eq!(values[1], &ast::Value::Int("1".to_string()));
    assert_eq!(values[2], &ast::Value::Float("1.5".to_string()));
    assert_eq!(values[3], &ast::Value::String("s".to_string()));
    assert_eq!(values[4], &ast::Value::Boolean(true));
    assert_eq!(values[5], &ast::Value::Null);
    assert_eq!(values[6], &ast::Value::Enum("ACTIVE".to_string()));
    assert_eq!(
        values[7],
        &ast::Value::List(vec![
            ast::Value::Int("1".to_string()),
            ast::Value::Int("2".to_string()),
        ]),
    );
    assert_eq!(
        values[8],
        &ast::Value::Object(vec![("k".to_string(), ast::Value::String("v".to_string()))]),
    );
}

// =============================================================================
// Type annotations
// =============================================================================

#[test]
fn parses_nested_type_annotations() {
    let doc = parse_valid("query Q($a: [Int!]!, $b: [[ID]]) { f }");
    let ast::Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation");
    };
    assert_eq!(
        op.variable_definitions[0].type_annotation.to_string(),
        "[Int!]!",
    );
    assert_eq!(
        op.variable_definitions[1].type_annotation.to_string(),
        "[[ID]]",
    );
}

// =============================================================================
// Schema & directive definitions
// =============================================================================

#[test]
fn parses_schema_definition() {
    let doc = parse_valid("schema { query: QueryRoot mutation: MutationRoot }");
    let ast::Definition::Schema(schema) = &doc.definitions[0] else {
        panic!("expected a schema definition");
    };
    assert_eq!(schema.root_operation_types.len(), 2);
    assert_eq!(
        schema.root_operation_types[0].operation_kind,
        ast::OperationKind::Query,
    );
    assert_eq!(schema.root_operation_types[0].type_name, "QueryRoot");
}

#[test]
fn parses_directive_definition() {
    let doc = parse_valid(
        "directive @auth(role: String = \"user\") repeatable on FIELD | FRAGMENT_SPREAD",
    );
    let ast::Definition::Directive(directive) = &doc.definitions[0] else {
        panic!("expected a directive definition");
    };
    assert_eq!(directive.name, "auth");
    assert_eq!(directive.arguments.len(), 1);
    assert!(directive.repeatable);
    let location_names: Vec<_> = directive.locations.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(location_names, vec!["FIELD", "FRAGMENT_SPREAD"]);
}

/// A leading `|` before the first directive location is allowed.
#[test]
fn parses_directive_definition_with_leading_pipe() {
    let doc = parse_valid("directive @internal on | QUERY | MUTATION");
    let ast::Definition::Directive(directive) = &doc.definitions[0] else {
        panic!("expected a directive definition");
    };
    assert_eq!(directive.locations.len(), 2);
    assert!(!directive.repeatable);
}

// =============================================================================
// Spans & determinism
// =============================================================================

#[test]
fn definitions_carry_source_spans() {
    let doc = parse_valid("query A { a }\nquery B { b }");
    let spans: Vec<_> = doc
        .definitions
        .iter()
        .map(|def| match def {
            ast::Definition::Operation(op) => op.span,
            other => panic!("expected an operation, got {other:?}"),
        })
        .collect();
    assert_eq!(spans[0].start_inclusive.line(), 0);
    assert_eq!(spans[1].start_inclusive.line(), 1);
    assert!(spans[0].end_exclusive.byte_offset() <= spans[1].start_inclusive.byte_offset());
}

/// Identical input always yields identical trees or identical errors.
#[test]
fn parsing_is_deterministic() {
    let source = "query Q($x: Int = 1) { a(b: [1, { c: true }]) ...F } fragment F on T { z }";
    assert_eq!(parse_valid(source), parse_valid(source));

    let bad_source = "query {";
    assert_eq!(
        parse_text(bad_source).unwrap_err(),
        parse_text(bad_source).unwrap_err(),
    );
}

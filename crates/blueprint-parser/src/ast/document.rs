use crate::ast::DirectiveDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::SchemaDefinition;

// =========================================================
// Document
// =========================================================

/// Root AST node for a parsed document.
///
/// A document contains a list of [`Definition`]s, preserved in source order.
/// An empty document (zero definitions) is valid: an empty query should not
/// look like a syntax failure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

// =========================================================
// Definition
// =========================================================

/// A top-level definition in a document.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
    Schema(SchemaDefinition),
    Directive(DirectiveDefinition),
}

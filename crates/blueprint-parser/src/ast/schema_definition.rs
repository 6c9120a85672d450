use crate::ast::DirectiveAnnotation;
use crate::ast::OperationKind;
use crate::SourceSpan;

/// A schema definition: `schema @dir { query: QueryRoot ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub directives: Vec<DirectiveAnnotation>,
    pub root_operation_types: Vec<RootOperationTypeBinding>,
    pub span: SourceSpan,
}

/// One `query: TypeName` style binding inside a schema definition.
#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationTypeBinding {
    pub operation_kind: OperationKind,
    pub type_name: String,
    pub span: SourceSpan,
}

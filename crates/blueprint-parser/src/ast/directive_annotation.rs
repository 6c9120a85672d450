use crate::ast::Value;
use crate::SourceSpan;

/// A directive applied at a use site: `@name(arg: value)`.
///
/// Distinct from [`DirectiveDefinition`](crate::ast::DirectiveDefinition),
/// which *declares* a directive.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub span: SourceSpan,
}

/// A named argument: `name: value`.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: String,
    pub value: Value,
    pub span: SourceSpan,
}

use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::SourceSpan;

/// A directive definition:
/// `directive @name(arg: Type = default) repeatable on LOCATION | LOCATION`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub name: String,
    pub arguments: Vec<InputValueDefinition>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
    pub span: SourceSpan,
}

/// An argument definition inside a directive definition: `name: Type = default`.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub name: String,
    pub type_annotation: TypeAnnotation,
    pub default_value: Option<Value>,
    pub span: SourceSpan,
}

/// A directive location name (e.g. `FIELD`, `QUERY`).
///
/// Locations are kept as raw names rather than a closed enum: the pipeline
/// only threads them through, and a closed set would reject documents using
/// locations this grammar subset never interprets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectiveLocation {
    pub name: String,
    pub span: SourceSpan,
}

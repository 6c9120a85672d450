use crate::ast::DirectiveAnnotation;
use crate::ast::SelectionSet;
use crate::SourceSpan;

/// A fragment definition: `fragment Name on Type @dir { ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: String,
    /// The type-condition name (the `Type` in `on Type`).
    pub type_condition: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
    pub span: SourceSpan,
}

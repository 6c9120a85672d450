use crate::ast::Argument;
use crate::ast::DirectiveAnnotation;
use crate::SourceSpan;

/// A braced set of selections: `{ field ...Spread ... on Type { x } }`.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub span: SourceSpan,
}

/// One entry in a selection set.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

/// A field selection: `alias: name(arg: value) @dir { ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<DirectiveAnnotation>,
    /// `None` for leaf fields.
    pub selection_set: Option<SelectionSet>,
    pub span: SourceSpan,
}

/// A fragment spread: `...FragmentName @dir`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub fragment_name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: SourceSpan,
}

/// An inline fragment: `... on Type @dir { ... }` (the type condition is
/// optional).
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
    pub span: SourceSpan,
}

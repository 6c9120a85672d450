//! The typed document tree produced by the parser.
//!
//! All nodes are owned (`String` payloads, no source borrows) so a parsed
//! [`Document`] can outlive the text it was parsed from, and carry source
//! spans for diagnostics. The tree is immutable once produced.

mod directive_annotation;
mod directive_definition;
mod document;
mod fragment_definition;
mod operation_definition;
mod schema_definition;
mod selection;
mod type_annotation;
mod value;

pub use directive_annotation::Argument;
pub use directive_annotation::DirectiveAnnotation;
pub use directive_definition::DirectiveDefinition;
pub use directive_definition::DirectiveLocation;
pub use directive_definition::InputValueDefinition;
pub use document::Definition;
pub use document::Document;
pub use fragment_definition::FragmentDefinition;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationKind;
pub use operation_definition::VariableDefinition;
pub use schema_definition::RootOperationTypeBinding;
pub use schema_definition::SchemaDefinition;
pub use selection::Field;
pub use selection::FragmentSpread;
pub use selection::InlineFragment;
pub use selection::Selection;
pub use selection::SelectionSet;
pub use type_annotation::TypeAnnotation;
pub use value::Value;

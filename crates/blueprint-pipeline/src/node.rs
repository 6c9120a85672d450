//! Drafted structural nodes: the blueprint-resident counterparts of parsed
//! definitions.
//!
//! The conversion phase moves each AST definition into one of these
//! wrappers, which add the data later phases key on (names, kinds) plus a
//! per-node [`Flags`] mapping. Source order and source positions are
//! preserved.

use crate::Flagged;
use crate::Flags;
use blueprint_parser::ast;
use blueprint_parser::SourceSpan;
use inherent::inherent;

// =========================================================
// Operation
// =========================================================

/// A drafted operation definition.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    name: Option<String>,
    kind: ast::OperationKind,
    ast: ast::OperationDefinition,
    flags: Flags,
}

impl Operation {
    pub(crate) fn draft(def: ast::OperationDefinition) -> Self {
        Self {
            name: def.name.clone(),
            kind: def.kind,
            ast: def,
            flags: Flags::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn kind(&self) -> ast::OperationKind {
        self.kind
    }

    pub fn ast(&self) -> &ast::OperationDefinition {
        &self.ast
    }

    pub fn span(&self) -> SourceSpan {
        self.ast.span
    }
}

#[inherent]
impl Flagged for Operation {
    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    pub fn flags_mut(&mut self) -> &mut Flags {
        &mut self.flags
    }

    pub fn set_flag(&mut self, name: &str, detail: &str) {
        self.flags.set(name, detail);
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }
}

// =========================================================
// Fragment
// =========================================================

/// A drafted fragment definition.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    name: String,
    type_condition: String,
    ast: ast::FragmentDefinition,
    flags: Flags,
}

impl Fragment {
    pub(crate) fn draft(def: ast::FragmentDefinition) -> Self {
        Self {
            name: def.name.clone(),
            type_condition: def.type_condition.clone(),
            ast: def,
            flags: Flags::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_condition(&self) -> &str {
        &self.type_condition
    }

    pub fn ast(&self) -> &ast::FragmentDefinition {
        &self.ast
    }

    pub fn span(&self) -> SourceSpan {
        self.ast.span
    }
}

#[inherent]
impl Flagged for Fragment {
    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    pub fn flags_mut(&mut self) -> &mut Flags {
        &mut self.flags
    }

    pub fn set_flag(&mut self, name: &str, detail: &str) {
        self.flags.set(name, detail);
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }
}

// =========================================================
// SchemaDefinition
// =========================================================

/// A drafted schema definition.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    ast: ast::SchemaDefinition,
    flags: Flags,
}

impl SchemaDefinition {
    pub(crate) fn draft(def: ast::SchemaDefinition) -> Self {
        Self {
            ast: def,
            flags: Flags::new(),
        }
    }

    pub fn ast(&self) -> &ast::SchemaDefinition {
        &self.ast
    }

    pub fn span(&self) -> SourceSpan {
        self.ast.span
    }
}

#[inherent]
impl Flagged for SchemaDefinition {
    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    pub fn flags_mut(&mut self) -> &mut Flags {
        &mut self.flags
    }

    pub fn set_flag(&mut self, name: &str, detail: &str) {
        self.flags.set(name, detail);
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }
}

// =========================================================
// Directive
// =========================================================

/// A drafted directive definition.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    name: String,
    ast: ast::DirectiveDefinition,
    flags: Flags,
}

impl Directive {
    pub(crate) fn draft(def: ast::DirectiveDefinition) -> Self {
        Self {
            name: def.name.clone(),
            ast: def,
            flags: Flags::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ast(&self) -> &ast::DirectiveDefinition {
        &self.ast
    }

    pub fn span(&self) -> SourceSpan {
        self.ast.span
    }
}

#[inherent]
impl Flagged for Directive {
    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    pub fn flags_mut(&mut self) -> &mut Flags {
        &mut self.flags
    }

    pub fn set_flag(&mut self, name: &str, detail: &str) {
        self.flags.set(name, detail);
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }
}

use crate::Directive;
use crate::Execution;
use crate::Flagged;
use crate::Flags;
use crate::Fragment;
use crate::Operation;
use crate::PhaseId;
use crate::SchemaDefinition;
use blueprint_parser::ast;
use blueprint_parser::Source;
use inherent::inherent;

/// What the blueprint's `input` slot currently holds.
///
/// Information flows strictly forward: raw text becomes a parsed
/// [`Document`](ast::Document), the conversion phase drafts the document's
/// definitions away into the blueprint's structural collections, and the
/// input is never re-derived from them.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Input {
    Text(String),
    Source(Source),
    Document(ast::Document),
    /// Nothing left to process: either a prior phase failed, or drafting
    /// consumed the document.
    #[default]
    Empty,
}

impl Input {
    /// The raw document text, when the input still holds text.
    pub fn source_text(&self) -> Option<&str> {
        match self {
            Input::Text(text) => Some(text),
            Input::Source(source) => Some(source.body()),
            Input::Document(_) | Input::Empty => None,
        }
    }

    pub fn as_document(&self) -> Option<&ast::Document> {
        match self {
            Input::Document(doc) => Some(doc),
            _ => None,
        }
    }
}

/// The mutable working record carried through the whole pipeline.
///
/// A blueprint is created once per pipeline run, threaded by ownership
/// through every phase, and handed back to the caller (or to downstream
/// execution phases) when the run ends. Phases mutate nothing outside the
/// blueprint value they receive and return, so partial state up to the last
/// completed phase is always valid and inspectable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Blueprint {
    /// The evolving input: text, then a parsed document, then drafted away.
    pub input: Input,

    /// Drafted operations, in source order.
    pub operations: Vec<Operation>,

    /// Drafted fragments, in source order.
    pub fragments: Vec<Fragment>,

    /// Drafted schema definitions, in source order.
    pub schema_definitions: Vec<SchemaDefinition>,

    /// Drafted directive definitions, in source order.
    pub directives: Vec<Directive>,

    /// Accumulated diagnostics plus the (downstream-populated) result.
    pub execution: Execution,

    /// The ordered phase list the driver resolved for this run, recorded
    /// before any phase executes so the plan stays inspectable after a Jump
    /// or Abort.
    pub initial_phases: Vec<PhaseId>,

    flags: Flags,
}

impl Blueprint {
    pub fn new(input: Input) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }
}

#[inherent]
impl Flagged for Blueprint {
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

impl From<&str> for Blueprint {
    fn from(text: &str) -> Self {
        Blueprint::new(Input::Text(text.to_string()))
    }
}

impl From<String> for Blueprint {
    fn from(text: String) -> Self {
        Blueprint::new(Input::Text(text))
    }
}

impl From<Source> for Blueprint {
    fn from(source: Source) -> Self {
        Blueprint::new(Input::Source(source))
    }
}

impl From<ast::Document> for Blueprint {
    fn from(document: ast::Document) -> Self {
        Blueprint::new(Input::Document(document))
    }
}

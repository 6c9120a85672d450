/// Raw input text plus an optional name for diagnostics.
///
/// A `Source` is created once at pipeline entry and never mutated. The name
/// is purely informational (e.g. a file name or a request id) and plays no
/// role in lexing or parsing.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Source {
    body: String,
    name: Option<String>,
}

impl Source {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: None,
        }
    }

    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: Some(name.into()),
        }
    }

    /// Returns the raw document text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the diagnostic name, if one was supplied.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Source::new(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Source::new(body)
    }
}

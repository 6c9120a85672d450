use indexmap::IndexMap;

/// A set of named markers with detail payloads, attachable to a
/// [`Blueprint`](crate::Blueprint) or to any drafted node.
///
/// Flags signal a detected condition (e.g. `no_operations`) without
/// themselves halting processing; only phases that read a flag act on it.
/// The mapping is insertion-ordered, and setting a flag that is already
/// present is a no-op: the original detail wins and the set of flags is
/// unchanged.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Flags {
    entries: IndexMap<String, String>,
}

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` with `detail`, unless `name` is already set.
    pub fn set(&mut self, name: impl Into<String>, detail: impl Into<String>) {
        self.entries.entry(name.into()).or_insert_with(|| detail.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the detail payload recorded for `name`, if the flag is set.
    pub fn detail(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates flags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Anything that carries a [`Flags`] mapping.
///
/// Implemented (via `#[inherent]`) by [`Blueprint`](crate::Blueprint) and by
/// every drafted node type, so the accessors are callable without importing
/// this trait while generic code can still bound on it.
pub trait Flagged {
    fn flags(&self) -> &Flags;
    fn flags_mut(&mut self) -> &mut Flags;
    fn set_flag(&mut self, name: &str, detail: &str);
    fn has_flag(&self, name: &str) -> bool;
}

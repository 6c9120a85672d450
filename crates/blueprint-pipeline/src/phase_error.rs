use crate::PhaseId;
use smallvec::SmallVec;

/// A source location in user-facing terms: 1-based line, and a column that
/// is 0 when the originating error path only knew the line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
}

/// A structured error recorded by a phase.
///
/// This is the sole error representation that crosses the boundary to
/// error-reporting collaborators (e.g. a result-formatting phase). Many may
/// accumulate per blueprint; each is immutable once constructed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, thiserror::Error)]
#[error("[{phase}] {message}")]
pub struct PhaseError {
    phase: PhaseId,
    message: String,
    /// Most errors carry exactly one location; some carry none (e.g. a
    /// token-limit failure) or several (e.g. duplicate definitions).
    locations: SmallVec<[ErrorLocation; 1]>,
}

impl PhaseError {
    pub fn new(phase: PhaseId, message: impl Into<String>) -> Self {
        Self {
            phase,
            message: message.into(),
            locations: SmallVec::new(),
        }
    }

    /// Appends a location to this error, builder-style.
    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.locations.push(ErrorLocation { line, column });
        self
    }

    /// The phase that recorded this error.
    pub fn phase(&self) -> PhaseId {
        self.phase
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn locations(&self) -> &[ErrorLocation] {
        &self.locations
    }
}

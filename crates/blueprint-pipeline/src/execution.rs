use crate::PhaseError;

/// The execution sub-record of a [`Blueprint`](crate::Blueprint):
/// accumulated diagnostics plus the eventual result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Execution {
    /// Structured errors recorded by phases, in recording order.
    pub validation_errors: Vec<PhaseError>,

    /// Populated by downstream execution phases; always `None` within this
    /// pipeline.
    pub result: Option<ExecutionResult>,
}

/// Placeholder shape for the value an execution engine would attach.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExecutionResult {
    pub data: Option<String>,
    pub errors: Vec<PhaseError>,
}

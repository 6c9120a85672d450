use crate::Blueprint;
use crate::PhaseOptions;

/// Identifies a phase within a pipeline, and serves as a Jump target.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct PhaseId(&'static str);

impl PhaseId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for PhaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// The result of running one phase.
///
/// This is a closed three-variant contract: the
/// [`Pipeline`](crate::Pipeline) driver obeys it without ever inspecting
/// error content or branching on concrete phase identity (except to match a
/// Jump target).
#[derive(Debug)]
pub enum Outcome {
    /// Continue with the next phase in sequence.
    Continue(Blueprint),

    /// Skip every phase up to the named target, then resume normal
    /// sequencing from the target.
    Jump(Blueprint, PhaseId),

    /// Stop the pipeline; the blueprint with its accumulated errors is
    /// surfaced to the caller as-is.
    Abort(Blueprint),
}

impl Outcome {
    /// The blueprint carried by this outcome, whichever variant it is.
    pub fn blueprint(&self) -> &Blueprint {
        match self {
            Outcome::Continue(blueprint)
            | Outcome::Jump(blueprint, _)
            | Outcome::Abort(blueprint) => blueprint,
        }
    }

    pub fn into_blueprint(self) -> Blueprint {
        match self {
            Outcome::Continue(blueprint)
            | Outcome::Jump(blueprint, _)
            | Outcome::Abort(blueprint) => blueprint,
        }
    }
}

/// A single pipeline stage.
///
/// Phases are pure with respect to everything but the blueprint value they
/// receive and return: no I/O, no shared mutable state between pipeline
/// invocations. Expected failures are recorded as
/// [`PhaseError`](crate::PhaseError)s on the blueprint, and the
/// continue/jump/abort decision is made from `options`, not hard-coded.
pub trait Phase {
    fn id(&self) -> PhaseId;

    fn run(&self, blueprint: Blueprint, options: &PhaseOptions) -> Outcome;
}

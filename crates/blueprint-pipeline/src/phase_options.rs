use crate::PhaseId;

/// Per-phase invocation configuration.
///
/// Options are read-only during a pipeline run and may be supplied fresh per
/// invocation; a phase only reads the keys it recognizes.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhaseOptions {
    /// Maximum token count the parse phase's lexer may produce. Unlimited
    /// when absent.
    pub token_limit: Option<usize>,

    /// Enables short-circuiting: failing phases Jump to their configured
    /// result phase instead of aborting (parse) or continuing (validation).
    pub jump_phases: bool,

    /// Jump target for the parse phase on failure, when `jump_phases` is
    /// set.
    pub result_phase: Option<PhaseId>,

    /// Jump target for validation phases on a violated check, when
    /// `jump_phases` is set.
    pub validation_result_phase: Option<PhaseId>,
}

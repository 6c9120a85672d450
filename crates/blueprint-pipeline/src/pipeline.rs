use crate::Blueprint;
use crate::Outcome;
use crate::Phase;
use crate::PhaseId;
use crate::PhaseOptions;

/// How a pipeline run ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Completion {
    /// Every phase ran and returned `Continue`.
    Completed,

    /// A phase jumped to `target`, and `target` was not among the remaining
    /// phases, so the run ended there. (A jump to a target that *is*
    /// present just resumes sequencing at the target and does not show up
    /// here.)
    Jumped(PhaseId),

    /// The named phase aborted the run.
    Aborted(PhaseId),
}

/// The blueprint plus how the run that produced it ended.
#[derive(Debug)]
pub struct PipelineRun {
    pub blueprint: Blueprint,
    pub completion: Completion,
}

/// An ordered list of phases and the driver that executes them.
///
/// The driver threads one [`Blueprint`] value through the phases in order
/// and implements the three-way [`Outcome`] contract: `Continue` advances,
/// `Jump` scans forward for the target phase, `Abort` stops. It never
/// inspects error content and never branches on concrete phase identity
/// except to match a Jump target. Independent invocations share no mutable
/// state.
#[derive(Default)]
pub struct Pipeline {
    phases: Vec<(Box<dyn Phase>, PhaseOptions)>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a phase with default options.
    pub fn with_phase(self, phase: impl Phase + 'static) -> Self {
        self.with_phase_options(phase, PhaseOptions::default())
    }

    /// Appends a phase with explicit invocation options.
    pub fn with_phase_options(mut self, phase: impl Phase + 'static, options: PhaseOptions) -> Self {
        self.phases.push((Box::new(phase), options));
        self
    }

    /// The ordered phase ids this pipeline will execute.
    pub fn phase_ids(&self) -> Vec<PhaseId> {
        self.phases.iter().map(|(phase, _)| phase.id()).collect()
    }

    /// Runs the pipeline against `input`.
    ///
    /// The input is first normalized into a [`Blueprint`] (raw text, a
    /// [`Source`](blueprint_parser::Source), or an existing blueprint all
    /// work), and the resolved phase list is recorded onto it before any
    /// phase executes. Each phase runs at most once, unless a Jump re-enters
    /// a target that appears again later in the list.
    pub fn run(&self, input: impl Into<Blueprint>) -> PipelineRun {
        let mut blueprint = input.into();
        blueprint.initial_phases = self.phase_ids();

        let mut idx = 0;
        while idx < self.phases.len() {
            let (phase, options) = &self.phases[idx];
            log::debug!("running phase `{}`", phase.id());

            match phase.run(blueprint, options) {
                Outcome::Continue(next) => {
                    blueprint = next;
                    idx += 1;
                }
                Outcome::Jump(next, target) => {
                    blueprint = next;
                    let ahead = self.phases[idx + 1..]
                        .iter()
                        .position(|(phase, _)| phase.id() == target);
                    match ahead {
                        Some(offset) => {
                            log::debug!(
                                "phase `{}` jumped to `{target}`, skipping {offset} phase(s)",
                                phase.id(),
                            );
                            idx += 1 + offset;
                        }
                        None => {
                            // The target is not among the remaining phases;
                            // the jump skips everything left.
                            log::debug!(
                                "phase `{}` jumped to `{target}`, which ends the run",
                                phase.id(),
                            );
                            return PipelineRun {
                                blueprint,
                                completion: Completion::Jumped(target),
                            };
                        }
                    }
                }
                Outcome::Abort(next) => {
                    log::debug!("phase `{}` aborted the run", phase.id());
                    return PipelineRun {
                        blueprint: next,
                        completion: Completion::Aborted(phase.id()),
                    };
                }
            }
        }

        PipelineRun {
            blueprint,
            completion: Completion::Completed,
        }
    }
}

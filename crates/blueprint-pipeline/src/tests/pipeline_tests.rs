use crate::tests::utils::new_log;
use crate::tests::utils::StubPhase;
use crate::Completion;
use crate::Pipeline;
use crate::PhaseId;

const ALPHA: PhaseId = PhaseId::new("alpha");
const BETA: PhaseId = PhaseId::new("beta");
const GAMMA: PhaseId = PhaseId::new("gamma");
const ELSEWHERE: PhaseId = PhaseId::new("elsewhere");

#[test]
fn continue_runs_every_phase_in_order() {
    let log = new_log();
    let pipeline = Pipeline::new()
        .with_phase(StubPhase::continuing(ALPHA, &log))
        .with_phase(StubPhase::continuing(BETA, &log))
        .with_phase(StubPhase::continuing(GAMMA, &log));

    let run = pipeline.run("");

    assert_eq!(run.completion, Completion::Completed);
    assert_eq!(*log.borrow(), vec![ALPHA, BETA, GAMMA]);
}

#[test]
fn initial_phases_are_recorded_before_any_phase_runs() {
    let log = new_log();
    let pipeline = Pipeline::new()
        .with_phase(StubPhase::aborting(ALPHA, &log))
        .with_phase(StubPhase::continuing(BETA, &log));

    let run = pipeline.run("");

    // The resolved plan is on the blueprint even though the first phase
    // aborted immediately.
    assert_eq!(run.blueprint.initial_phases, vec![ALPHA, BETA]);
    assert_eq!(run.completion, Completion::Aborted(ALPHA));
    assert_eq!(*log.borrow(), vec![ALPHA]);
}

#[test]
fn jump_skips_intermediate_phases() {
    let log = new_log();
    let pipeline = Pipeline::new()
        .with_phase(StubPhase::jumping(ALPHA, GAMMA, &log))
        .with_phase(StubPhase::continuing(BETA, &log))
        .with_phase(StubPhase::continuing(GAMMA, &log));

    let run = pipeline.run("");

    assert_eq!(run.completion, Completion::Completed);
    assert_eq!(*log.borrow(), vec![ALPHA, GAMMA]);
}

#[test]
fn jump_to_absent_target_ends_the_run() {
    let log = new_log();
    let pipeline = Pipeline::new()
        .with_phase(StubPhase::jumping(ALPHA, ELSEWHERE, &log))
        .with_phase(StubPhase::continuing(BETA, &log));

    let run = pipeline.run("");

    assert_eq!(run.completion, Completion::Jumped(ELSEWHERE));
    assert_eq!(*log.borrow(), vec![ALPHA]);
}

#[test]
fn jump_only_scans_forward() {
    // The target appears *before* the jumping phase, so it is not among the
    // remaining phases and the run ends.
    let log = new_log();
    let pipeline = Pipeline::new()
        .with_phase(StubPhase::continuing(GAMMA, &log))
        .with_phase(StubPhase::jumping(ALPHA, GAMMA, &log));

    let run = pipeline.run("");

    assert_eq!(run.completion, Completion::Jumped(GAMMA));
    assert_eq!(*log.borrow(), vec![GAMMA, ALPHA]);
}

#[test]
fn jump_can_reenter_a_later_duplicate_of_an_earlier_phase() {
    let log = new_log();
    let pipeline = Pipeline::new()
        .with_phase(StubPhase::continuing(ALPHA, &log))
        .with_phase(StubPhase::jumping(BETA, ALPHA, &log))
        .with_phase(StubPhase::continuing(ALPHA, &log));

    let run = pipeline.run("");

    assert_eq!(run.completion, Completion::Completed);
    assert_eq!(*log.borrow(), vec![ALPHA, BETA, ALPHA]);
}

#[test]
fn abort_stops_without_running_later_phases() {
    let log = new_log();
    let pipeline = Pipeline::new()
        .with_phase(StubPhase::continuing(ALPHA, &log))
        .with_phase(StubPhase::aborting(BETA, &log))
        .with_phase(StubPhase::continuing(GAMMA, &log));

    let run = pipeline.run("");

    assert_eq!(run.completion, Completion::Aborted(BETA));
    assert_eq!(*log.borrow(), vec![ALPHA, BETA]);
}

#[test]
fn phase_ids_reports_the_configured_order() {
    let log = new_log();
    let pipeline = Pipeline::new()
        .with_phase(StubPhase::continuing(BETA, &log))
        .with_phase(StubPhase::continuing(ALPHA, &log));

    assert_eq!(pipeline.phase_ids(), vec![BETA, ALPHA]);
}

#[test]
fn empty_pipeline_completes_with_an_untouched_blueprint() {
    let run = Pipeline::new().run("query Q { a }");

    assert_eq!(run.completion, Completion::Completed);
    assert!(run.blueprint.initial_phases.is_empty());
    assert_eq!(
        run.blueprint.input.source_text(),
        Some("query Q { a }"),
    );
}

#[test]
fn independent_runs_produce_equal_blueprints() {
    let log = new_log();
    let pipeline = Pipeline::new()
        .with_phase(StubPhase::continuing(ALPHA, &log))
        .with_phase(StubPhase::continuing(BETA, &log));

    let first = pipeline.run("{ a }");
    let second = pipeline.run("{ a }");

    assert_eq!(first.blueprint, second.blueprint);
    assert_eq!(first.completion, second.completion);
}

use crate::phases::ConvertPhase;
use crate::phases::ParsePhase;
use crate::Blueprint;
use crate::Outcome;
use crate::Phase;
use crate::PhaseId;
use crate::PhaseOptions;
use std::cell::RefCell;
use std::rc::Rc;

/// Invocation record shared by the scripted phases of one test.
pub type InvocationLog = Rc<RefCell<Vec<PhaseId>>>;

pub fn new_log() -> InvocationLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// A scripted phase: records its invocation on the shared log, then returns
/// a fixed outcome kind with the blueprint it received.
pub struct StubPhase {
    id: PhaseId,
    behavior: StubBehavior,
    log: InvocationLog,
}

enum StubBehavior {
    Continue,
    Jump(PhaseId),
    Abort,
}

impl StubPhase {
    pub fn continuing(id: PhaseId, log: &InvocationLog) -> Self {
        Self {
            id,
            behavior: StubBehavior::Continue,
            log: Rc::clone(log),
        }
    }

    pub fn jumping(id: PhaseId, target: PhaseId, log: &InvocationLog) -> Self {
        Self {
            id,
            behavior: StubBehavior::Jump(target),
            log: Rc::clone(log),
        }
    }

    pub fn aborting(id: PhaseId, log: &InvocationLog) -> Self {
        Self {
            id,
            behavior: StubBehavior::Abort,
            log: Rc::clone(log),
        }
    }
}

impl Phase for StubPhase {
    fn id(&self) -> PhaseId {
        self.id
    }

    fn run(&self, blueprint: Blueprint, _options: &PhaseOptions) -> Outcome {
        self.log.borrow_mut().push(self.id);
        match self.behavior {
            StubBehavior::Continue => Outcome::Continue(blueprint),
            StubBehavior::Jump(target) => Outcome::Jump(blueprint, target),
            StubBehavior::Abort => Outcome::Abort(blueprint),
        }
    }
}

/// Parses and drafts `text`, panicking on any failure along the way.
pub fn drafted(text: &str) -> Blueprint {
    let options = PhaseOptions::default();
    let Outcome::Continue(blueprint) = ParsePhase.run(Blueprint::from(text), &options) else {
        panic!("parse failed for {text:?}");
    };
    let Outcome::Continue(blueprint) = ConvertPhase.run(blueprint, &options) else {
        panic!("convert failed for {text:?}");
    };
    blueprint
}

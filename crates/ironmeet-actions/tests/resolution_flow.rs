//! Full request-to-report resolution cycles, driven with scripted draws.

use std::cell::RefCell;
use std::rc::Rc;

use rand::RngCore;

use ironmeet_actions::{
    ActionContext, ActionEngine, Consequence, EngineStep, GearConsequences, MoveConsequences,
    OutcomeDispatcher,
};
use ironmeet_dice::{RenownLedger, ResolveMode, RollRequest};

/// An RNG that produces the same raw value on every draw.
struct ScriptedRng(u32);

impl ScriptedRng {
    /// An RNG whose percentile draw is exactly `percent`.
    fn for_draw(percent: u32) -> Self {
        Self((((u64::from(percent) << 32) / 100) + 1) as u32)
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.0
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.0)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = self.0.to_le_bytes();
        for (idx, byte) in dest.iter_mut().enumerate() {
            *byte = bytes[idx % bytes.len()];
        }
    }
}

struct Renown {
    points: u32,
}

impl RenownLedger for Renown {
    fn has_renown(&self) -> bool {
        self.points > 0
    }

    fn spend(&mut self, cost: u32) {
        self.points = self.points.saturating_sub(cost);
    }
}

#[derive(Clone, Default)]
struct Recorder {
    events: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

impl MoveConsequences for Recorder {
    fn move_completed(&mut self, destination: &str) {
        self.events
            .borrow_mut()
            .push(format!("move-completed:{destination}"));
    }

    fn move_halted(&mut self, destination: &str) {
        self.events
            .borrow_mut()
            .push(format!("move-halted:{destination}"));
    }
}

impl GearConsequences for Recorder {
    fn gear_used(&mut self, item: &str) {
        self.events.borrow_mut().push(format!("gear-used:{item}"));
    }

    fn gear_compromised(&mut self, item: &str) {
        self.events
            .borrow_mut()
            .push(format!("gear-compromised:{item}"));
    }
}

fn engine_with_draw(percent: u32, recorder: &Recorder) -> ActionEngine<ScriptedRng> {
    let dispatcher = OutcomeDispatcher::new(Box::new(recorder.clone()), Box::new(recorder.clone()));
    ActionEngine::with_rng(ScriptedRng::for_draw(percent), dispatcher)
}

fn gear_request(mode: ResolveMode, ledger: &Renown) -> RollRequest<ActionContext> {
    RollRequest::new(70, mode, ActionContext::gear("signal flare"))
        .with_renown(ledger.has_renown(), 1)
}

fn report_of(step: EngineStep) -> ironmeet_actions::OutcomeReport {
    match step {
        EngineStep::Report(report) => report,
        EngineStep::AwaitingRenown(prompt) => panic!("unexpected suspension: {prompt:?}"),
    }
}

#[test]
fn ignored_success_uses_the_gear_quietly() {
    let recorder = Recorder::default();
    let mut ledger = Renown { points: 3 };
    let mut engine = engine_with_draw(50, &recorder);

    let report = report_of(engine.begin(gear_request(ResolveMode::Ignore, &ledger), &mut ledger));
    assert_eq!(
        report.consequence,
        Some(Consequence::GearPreserved {
            item: "signal flare".to_string()
        })
    );
    assert!(!report.narrative.contains("Renown"));
    assert_eq!(recorder.events(), vec!["gear-used:signal flare"]);
    assert_eq!(ledger.points, 3);
}

#[test]
fn ignored_failure_compromises_the_gear() {
    let recorder = Recorder::default();
    let mut ledger = Renown { points: 3 };
    let mut engine = engine_with_draw(85, &recorder);

    let report = report_of(engine.begin(gear_request(ResolveMode::Ignore, &ledger), &mut ledger));
    assert_eq!(
        report.consequence,
        Some(Consequence::GearCompromised {
            item: "signal flare".to_string()
        })
    );
    assert_eq!(recorder.events(), vec!["gear-compromised:signal flare"]);
    assert_eq!(ledger.points, 3, "ignore mode never spends");
}

#[test]
fn auto_failure_spends_and_narrates_renown_first() {
    let recorder = Recorder::default();
    let mut ledger = Renown { points: 3 };
    let mut engine = engine_with_draw(85, &recorder);

    let report = report_of(engine.begin(gear_request(ResolveMode::Auto, &ledger), &mut ledger));
    assert_eq!(
        report.consequence,
        Some(Consequence::GearPreserved {
            item: "signal flare".to_string()
        })
    );
    assert_eq!(recorder.events(), vec!["gear-used:signal flare"]);
    assert_eq!(ledger.points, 2);

    let renown_at = report.narrative.find("Renown spent").unwrap();
    let gear_at = report.narrative.find("The signal flare").unwrap();
    assert!(renown_at < gear_at, "spend line first: {}", report.narrative);
}

#[test]
fn declined_choice_keeps_the_failure() {
    let recorder = Recorder::default();
    let mut ledger = Renown { points: 3 };
    let mut engine = engine_with_draw(85, &recorder);

    match engine.begin(gear_request(ResolveMode::Roll, &ledger), &mut ledger) {
        EngineStep::AwaitingRenown(prompt) => {
            assert_eq!(prompt.roll, 85);
            assert_eq!(prompt.chance, 70);
            assert_eq!(prompt.renown_cost, 1);
        }
        EngineStep::Report(report) => panic!("expected suspension, got {report:?}"),
    }
    assert!(recorder.events().is_empty(), "nothing dispatches while suspended");

    let report = engine.confirm(false, &mut ledger);
    assert_eq!(
        report.consequence,
        Some(Consequence::GearCompromised {
            item: "signal flare".to_string()
        })
    );
    assert_eq!(recorder.events(), vec!["gear-compromised:signal flare"]);
    assert_eq!(ledger.points, 3, "declining spends nothing");
}

#[test]
fn accepted_choice_spends_and_flips() {
    let recorder = Recorder::default();
    let mut ledger = Renown { points: 3 };
    let mut engine = engine_with_draw(85, &recorder);

    let _ = engine.begin(gear_request(ResolveMode::Roll, &ledger), &mut ledger);
    let report = engine.confirm(true, &mut ledger);

    assert_eq!(
        report.consequence,
        Some(Consequence::GearPreserved {
            item: "signal flare".to_string()
        })
    );
    assert_eq!(ledger.points, 2);
    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.history()[0].roll, 85, "the failing draw stays on record");
    assert!(engine.history()[0].renown_spent);
}

#[test]
fn roll_mode_without_renown_fails_without_asking() {
    let recorder = Recorder::default();
    let mut ledger = Renown { points: 0 };
    let mut engine = engine_with_draw(85, &recorder);

    let report = report_of(engine.begin(gear_request(ResolveMode::Roll, &ledger), &mut ledger));
    assert_eq!(
        report.consequence,
        Some(Consequence::GearCompromised {
            item: "signal flare".to_string()
        })
    );
    assert!(!engine.is_awaiting_choice());
}

#[test]
fn move_cycle_carries_its_prelude() {
    let recorder = Recorder::default();
    let mut ledger = Renown { points: 3 };
    let mut engine = engine_with_draw(85, &recorder);

    let context = ActionContext::movement_with_prelude("the ridge", "Scouts report mud.");
    let request = RollRequest::new(70, ResolveMode::Auto, context).with_renown(true, 1);
    let report = report_of(engine.begin(request, &mut ledger));

    assert_eq!(
        report.consequence,
        Some(Consequence::MoveCompleted {
            destination: "the ridge".to_string()
        })
    );
    assert_eq!(recorder.events(), vec!["move-completed:the ridge"]);

    let narrative = &report.narrative;
    let prelude_at = narrative.find("Scouts report mud.").unwrap();
    let renown_at = narrative.find("Renown spent").unwrap();
    let outcome_at = narrative.find("succeeds").unwrap();
    assert!(prelude_at < renown_at && renown_at < outcome_at, "{narrative}");
}

#[test]
fn failed_move_halts_the_piece() {
    let recorder = Recorder::default();
    let mut ledger = Renown { points: 0 };
    let mut engine = engine_with_draw(85, &recorder);

    let request = RollRequest::new(70, ResolveMode::Ignore, ActionContext::movement("the ridge"));
    let report = report_of(engine.begin(request, &mut ledger));

    assert_eq!(
        report.consequence,
        Some(Consequence::MoveHalted {
            destination: "the ridge".to_string()
        })
    );
    assert_eq!(recorder.events(), vec!["move-halted:the ridge"]);
}

#[test]
fn out_of_order_driving_never_panics() {
    let recorder = Recorder::default();
    let mut ledger = Renown { points: 3 };
    let mut engine = engine_with_draw(85, &recorder);

    let report = engine.confirm(true, &mut ledger);
    assert!(report.consequence.is_none());
    assert!(!engine.cancel());

    // A suspended cycle rejects new requests but survives them.
    let _ = engine.begin(gear_request(ResolveMode::Roll, &ledger), &mut ledger);
    let rejected = report_of(engine.begin(gear_request(ResolveMode::Ignore, &ledger), &mut ledger));
    assert!(rejected.consequence.is_none());
    assert!(engine.is_awaiting_choice());

    // Cancel tears it down; nothing was dispatched or recorded.
    assert!(engine.cancel());
    assert!(recorder.events().is_empty());
    assert!(engine.history().is_empty());
    assert_eq!(ledger.points, 3);
}

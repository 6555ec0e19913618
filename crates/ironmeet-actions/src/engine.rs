//! The resolution facade the game talks to.
//!
//! [`ActionEngine`] wires the dice-layer resolver to the outcome dispatcher
//! and applies the recovery rules: every invalid-state error is logged and
//! turned into the generic fallback report, so a mis-driven UI can always
//! close gracefully and game content can never crash a resolution. Each
//! completed cycle is appended to a history the surrounding screens can
//! replay.

use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use ironmeet_dice::{
    ChoicePrompt, RenownLedger, ResolveMode, Resolution, Resolver, RollRequest, RollResult,
};

use crate::context::ActionContext;
use crate::dispatch::OutcomeDispatcher;
use crate::report::OutcomeReport;

/// Configuration for an action engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible resolution rolls.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// What the caller gets back from `begin`.
#[derive(Debug)]
pub enum EngineStep {
    /// The cycle finished (or was recovered); here is its report.
    Report(OutcomeReport),
    /// The cycle is suspended; ask the player whether to spend Renown,
    /// then call `confirm` or `cancel`.
    AwaitingRenown(ChoicePrompt),
}

/// One completed cycle, as remembered by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionRecord {
    /// The percentile draw.
    pub roll: u32,
    /// The chance the draw was measured against.
    pub chance: u32,
    /// The mode the cycle ran under.
    pub mode: ResolveMode,
    /// Final success after any mitigation.
    pub success: bool,
    /// Whether Renown paid for the success.
    pub renown_spent: bool,
    /// The narrative that was reported.
    pub narrative: String,
}

/// Request/response facade over the resolver and dispatcher.
pub struct ActionEngine<R: RngCore> {
    resolver: Resolver<ActionContext, R>,
    dispatcher: OutcomeDispatcher,
    history: Vec<ResolutionRecord>,
}

impl ActionEngine<StdRng> {
    /// Create an engine with a seeded standard RNG.
    pub fn new(config: &EngineConfig, dispatcher: OutcomeDispatcher) -> Self {
        Self::with_rng(StdRng::seed_from_u64(config.seed), dispatcher)
    }
}

impl<R: RngCore> ActionEngine<R> {
    /// Create an engine over a caller-supplied RNG.
    pub fn with_rng(rng: R, dispatcher: OutcomeDispatcher) -> Self {
        Self {
            resolver: Resolver::with_rng(rng),
            dispatcher,
            history: Vec::new(),
        }
    }

    /// Start a resolution cycle.
    ///
    /// Returns the finished report when the cycle resolves in one step, or
    /// the prompt for a suspended Renown decision. A request arriving while
    /// another cycle is suspended is rejected with the fallback report and
    /// the suspended cycle is left untouched.
    pub fn begin(
        &mut self,
        request: RollRequest<ActionContext>,
        ledger: &mut dyn RenownLedger,
    ) -> EngineStep {
        match self.resolver.begin(request, ledger) {
            Ok(Resolution::Complete(result)) => EngineStep::Report(self.finish(result)),
            Ok(Resolution::AwaitingChoice(prompt)) => EngineStep::AwaitingRenown(prompt),
            Err(error) => {
                tracing::warn!(%error, "request rejected; returning the fallback report");
                EngineStep::Report(OutcomeReport::fallback())
            }
        }
    }

    /// Finish a suspended cycle with the player's Renown decision.
    ///
    /// With no suspended cycle this is a logged no-op that returns the
    /// fallback report.
    pub fn confirm(&mut self, spend: bool, ledger: &mut dyn RenownLedger) -> OutcomeReport {
        match self.resolver.confirm(spend, ledger) {
            Ok(result) => self.finish(result),
            Err(error) => {
                tracing::warn!(%error, "confirm ignored; returning the fallback report");
                OutcomeReport::fallback()
            }
        }
    }

    /// Abandon a suspended cycle without dispatching an outcome. Returns
    /// whether anything was actually pending.
    pub fn cancel(&mut self) -> bool {
        self.resolver.cancel().is_some()
    }

    /// Whether a suspended cycle is waiting on the player.
    pub fn is_awaiting_choice(&self) -> bool {
        self.resolver.is_pending()
    }

    /// Every completed cycle so far, oldest first. Canceled and rejected
    /// cycles never appear here.
    pub fn history(&self) -> &[ResolutionRecord] {
        &self.history
    }

    /// Dispatch a finished roll and remember it.
    fn finish(&mut self, result: RollResult<ActionContext>) -> OutcomeReport {
        let (roll, chance, mode, success, renown_spent) = (
            result.roll,
            result.chance,
            result.mode,
            result.success,
            result.renown_spent,
        );
        let report = self.dispatcher.dispatch(result);
        self.history.push(ResolutionRecord {
            roll,
            chance,
            mode,
            success,
            renown_spent,
            narrative: report.narrative.clone(),
        });
        report
    }
}

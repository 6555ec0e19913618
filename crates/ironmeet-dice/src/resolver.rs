//! The resolution controller: one request, one outcome.
//!
//! [`Resolver`] owns the RNG and the single in-flight cycle. `begin` draws
//! once and applies the mitigation table; most cycles finish right there.
//! A Roll-mode failure with Renown available suspends instead, returning a
//! [`ChoicePrompt`] so the UI boundary can ask the player; `confirm`
//! finishes the suspended cycle and `cancel` abandons it without an
//! outcome. A new request is rejected while one is suspended.

use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::chance;
use crate::error::{ResolveError, ResolveResult};
use crate::mitigation::{self, MitigationCall, RenownLedger};
use crate::mode::ResolveMode;
use crate::roll::{RollRequest, RollResult};

/// Everything the UI boundary needs to ask the player about a suspended
/// roll: the failing draw (shown as fixed evidence), the chance it was
/// measured against, and what mitigation costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoicePrompt {
    /// The failing draw, 0 to 99.
    pub roll: u32,
    /// The chance the draw was measured against, after clamping.
    pub chance: u32,
    /// Renown cost of flipping the failure into a success.
    pub renown_cost: u32,
}

/// How `begin` finished.
#[derive(Debug)]
pub enum Resolution<C> {
    /// The cycle resolved in one step.
    Complete(RollResult<C>),
    /// The cycle is suspended awaiting a Renown decision.
    AwaitingChoice(ChoicePrompt),
}

/// A suspended Roll-mode cycle.
#[derive(Debug)]
struct Pending<C> {
    roll: u32,
    chance: u32,
    renown_cost: u32,
    context: C,
}

/// The resolution state machine. At most one cycle is in flight at a time.
#[derive(Debug)]
pub struct Resolver<C, R: RngCore> {
    rng: R,
    pending: Option<Pending<C>>,
}

impl<C> Resolver<C, StdRng> {
    /// Create a resolver with a seeded standard RNG.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<C, R: RngCore> Resolver<C, R> {
    /// Create a resolver over a caller-supplied RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng, pending: None }
    }

    /// Whether a suspended cycle is awaiting `confirm` or `cancel`.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a resolution cycle: draw once, then apply the mitigation
    /// table.
    ///
    /// Spends Renown through `ledger` when Auto mode mitigates. Returns
    /// [`ResolveError::RollInFlight`] without drawing if a cycle is
    /// already suspended.
    pub fn begin(
        &mut self,
        request: RollRequest<C>,
        ledger: &mut dyn RenownLedger,
    ) -> ResolveResult<Resolution<C>> {
        if self.pending.is_some() {
            tracing::warn!("roll requested while another awaits a renown decision");
            return Err(ResolveError::RollInFlight);
        }

        let chance = request.chance.min(100);
        let drawn = chance::roll(chance, &mut self.rng);

        match mitigation::decide(request.mode, drawn.success, request.renown_available) {
            MitigationCall::Resolved { success, spend } => {
                if spend {
                    ledger.spend(request.renown_cost);
                }
                tracing::debug!(
                    roll = drawn.value,
                    chance,
                    success,
                    spend,
                    "cycle resolved in one step"
                );
                Ok(Resolution::Complete(RollResult {
                    roll: drawn.value,
                    chance,
                    success,
                    mode: request.mode,
                    renown_spent: spend,
                    context: request.context,
                }))
            }
            MitigationCall::AwaitChoice => {
                let prompt = ChoicePrompt {
                    roll: drawn.value,
                    chance,
                    renown_cost: request.renown_cost,
                };
                self.pending = Some(Pending {
                    roll: drawn.value,
                    chance,
                    renown_cost: request.renown_cost,
                    context: request.context,
                });
                tracing::debug!(roll = drawn.value, chance, "cycle suspended on a failure");
                Ok(Resolution::AwaitingChoice(prompt))
            }
        }
    }

    /// Finish a suspended cycle with the player's decision.
    ///
    /// `spend == true` flips the failure into a success and deducts the
    /// cost from `ledger`; `false` keeps the failure. The recorded roll is
    /// the original failing draw either way; confirming never re-rolls.
    pub fn confirm(
        &mut self,
        spend: bool,
        ledger: &mut dyn RenownLedger,
    ) -> ResolveResult<RollResult<C>> {
        let Some(pending) = self.pending.take() else {
            tracing::warn!("confirm called with no roll awaiting a decision");
            return Err(ResolveError::NoPendingChoice);
        };
        if spend {
            ledger.spend(pending.renown_cost);
        }
        Ok(RollResult {
            roll: pending.roll,
            chance: pending.chance,
            success: spend,
            mode: ResolveMode::Roll,
            renown_spent: spend,
            context: pending.context,
        })
    }

    /// Abandon a suspended cycle without producing an outcome.
    ///
    /// Returns the abandoned context, or `None` when nothing was pending.
    /// The empty case is a no-op rather than a failure: the surrounding UI
    /// may tear down at any time.
    pub fn cancel(&mut self) -> Option<C> {
        let pending = self.pending.take();
        if pending.is_none() {
            tracing::debug!("cancel called with no roll awaiting a decision");
        }
        pending.map(|p| p.context)
    }
}

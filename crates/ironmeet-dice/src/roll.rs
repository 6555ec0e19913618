//! Roll requests and finished results.
//!
//! A [`RollRequest`] is the immutable input to one resolution cycle; a
//! [`RollResult`] is its single outcome. The context payload `C` describes
//! why the roll is happening (a move, a piece of gear); the engine treats
//! it as opaque and hands it back unchanged on the result.

use serde::{Deserialize, Serialize};

use crate::mode::ResolveMode;

/// Immutable input to a single resolution cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollRequest<C> {
    /// Percent chance of success, 0 to 100. Out-of-range values are
    /// clamped at evaluation time, not rejected.
    pub chance: u32,
    /// How failures may be mitigated.
    pub mode: ResolveMode,
    /// Whether the caller has at least one unit of Renown.
    pub renown_available: bool,
    /// Renown cost of mitigating this roll.
    pub renown_cost: u32,
    /// Why the roll is happening; passed through unchanged.
    pub context: C,
}

impl<C> RollRequest<C> {
    /// Build a request with no Renown backing. Callers that can mitigate
    /// add it with [`RollRequest::with_renown`].
    pub fn new(chance: u32, mode: ResolveMode, context: C) -> Self {
        Self {
            chance,
            mode,
            renown_available: false,
            renown_cost: 0,
            context,
        }
    }

    /// Record the caller's current Renown standing: whether any is left
    /// and what mitigating this roll would cost.
    pub fn with_renown(mut self, available: bool, cost: u32) -> Self {
        self.renown_available = available;
        self.renown_cost = cost;
        self
    }
}

/// The finished outcome of a resolution cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollResult<C> {
    /// The percentile draw, 0 to 99. Mitigation never re-rolls: on a
    /// mitigated success this is still the original failing draw.
    pub roll: u32,
    /// The chance the draw was measured against, after clamping.
    pub chance: u32,
    /// Final success after any mitigation.
    pub success: bool,
    /// The mode the cycle ran under.
    pub mode: ResolveMode,
    /// True when Renown was spent to flip a failure into this success.
    pub renown_spent: bool,
    /// The request's context payload, unchanged.
    pub context: C,
}

impl<C> RollResult<C> {
    /// True when the result is a success only because Renown paid for it.
    pub fn is_mitigated(&self) -> bool {
        self.success && self.renown_spent
    }
}

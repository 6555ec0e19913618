//! The Renown mitigation decision table.
//!
//! On a failed roll the acting player may be allowed to spend Renown to
//! convert the failure into a success. This module is the pure decision
//! table mapping (mode, raw result, Renown availability) to either a final
//! verdict or a suspension awaiting the player's choice. Spending never
//! happens on a roll that already succeeded.

use crate::mode::ResolveMode;

/// The externally-owned Renown balance.
///
/// The engine never holds the balance itself: it reads whether any Renown
/// is left and, when mitigation fires, issues a single decrement to the
/// owner. Atomicity across interleaved cycles is the owner's concern; the
/// resolver only ever runs one cycle at a time.
pub trait RenownLedger {
    /// Whether at least one unit of Renown is left to spend.
    fn has_renown(&self) -> bool;

    /// Deduct `cost` units. Called at most once per resolution cycle.
    fn spend(&mut self, cost: u32);
}

/// What the decision table says to do with a raw roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MitigationCall {
    /// The cycle is decided in one step.
    Resolved {
        /// Final success after any mitigation.
        success: bool,
        /// True when Renown pays to flip a failure into a success.
        spend: bool,
    },
    /// Suspend the cycle and ask the player whether to spend Renown.
    AwaitChoice,
}

/// Apply the mitigation decision table to a raw roll.
pub fn decide(mode: ResolveMode, raw_success: bool, renown_available: bool) -> MitigationCall {
    match (mode, raw_success, renown_available) {
        // An already-successful roll is never mitigated.
        (_, true, _) => MitigationCall::Resolved {
            success: true,
            spend: false,
        },
        // Without Renown, Auto and Roll degrade to Ignore for this cycle.
        (ResolveMode::Ignore, false, _) | (ResolveMode::Auto | ResolveMode::Roll, false, false) => {
            MitigationCall::Resolved {
                success: false,
                spend: false,
            }
        }
        (ResolveMode::Auto, false, true) => MitigationCall::Resolved {
            success: true,
            spend: true,
        },
        (ResolveMode::Roll, false, true) => MitigationCall::AwaitChoice,
    }
}

//! Dice-based action resolution for Ironmeet.
//!
//! Turns a percent chance of success into a final outcome in three steps:
//! a single percentile draw, a mode-dependent Renown mitigation decision,
//! and, for interactive Roll-mode failures, a suspended choice the player
//! confirms or cancels. The context payload describing *why* the roll
//! happened is generic and passes through the engine untouched; consequence
//! handling lives in `ironmeet-actions`.

pub mod chance;
pub mod error;
pub mod mitigation;
pub mod mode;
pub mod resolver;
pub mod roll;

pub use chance::ChanceRoll;
pub use error::{ResolveError, ResolveResult};
pub use mitigation::{MitigationCall, RenownLedger};
pub use mode::ResolveMode;
pub use resolver::{ChoicePrompt, Resolution, Resolver};
pub use roll::{RollRequest, RollResult};

#[cfg(test)]
pub(crate) mod teststub;

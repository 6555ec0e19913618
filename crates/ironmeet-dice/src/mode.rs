//! Resolution modes.
//!
//! The caller that initiates a roll picks one of three policies for how a
//! failure may be mitigated with Renown. When no Renown is available, Auto
//! and Roll degrade to the same behavior as Ignore for that cycle; that is
//! how the game treats an empty Renown pool uniformly across modes.

use serde::{Deserialize, Serialize};

/// Policy governing whether and how a failed roll may be mitigated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolveMode {
    /// Accept the raw result; mitigation is never offered. Used when the
    /// caller wants determinism and speed over interactivity.
    Ignore,
    /// Spend Renown automatically on failure when available, without
    /// prompting. Exists for bulk resolution where no interactive step is
    /// acceptable.
    Auto,
    /// Show the roll; on failure with Renown available, suspend and wait
    /// for the player to decide whether to spend.
    Roll,
}

impl ResolveMode {
    /// All modes, in the order they are offered to the player.
    pub fn all() -> &'static [Self] {
        &[Self::Ignore, Self::Auto, Self::Roll]
    }
}

impl std::fmt::Display for ResolveMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ignore => write!(f, "ignore"),
            Self::Auto => write!(f, "auto"),
            Self::Roll => write!(f, "roll"),
        }
    }
}

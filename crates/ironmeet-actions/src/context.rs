//! What triggered a roll.
//!
//! The context payload travels through the resolution engine untouched and
//! comes back on the finished result, where the dispatcher matches on it
//! exhaustively. Adding a new trigger kind is a compile-time-checked change
//! to this enum, not a stringly-typed payload convention.

use serde::{Deserialize, Serialize};

/// The action a roll is deciding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionContext {
    /// An attempted movement toward a map node.
    Move {
        /// Identifier of the destination node.
        destination: String,
        /// Narrative fragment set up before the roll, shown ahead of the
        /// outcome phrase (encounter text, scouting reports).
        prelude: Option<String>,
    },
    /// A piece of equipment being put to use.
    GearUse {
        /// Identifier of the item in use.
        item: String,
    },
}

impl ActionContext {
    /// A movement context with no narrative lead-in.
    pub fn movement(destination: impl Into<String>) -> Self {
        Self::Move {
            destination: destination.into(),
            prelude: None,
        }
    }

    /// A movement context carrying a pre-existing narrative fragment.
    pub fn movement_with_prelude(
        destination: impl Into<String>,
        prelude: impl Into<String>,
    ) -> Self {
        Self::Move {
            destination: destination.into(),
            prelude: Some(prelude.into()),
        }
    }

    /// A gear-use context.
    pub fn gear(item: impl Into<String>) -> Self {
        Self::GearUse { item: item.into() }
    }
}

impl std::fmt::Display for ActionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Move { destination, .. } => write!(f, "move to {destination}"),
            Self::GearUse { item } => write!(f, "use {item}"),
        }
    }
}

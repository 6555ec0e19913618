//! Outcome reports and consequence instructions.
//!
//! A finished cycle produces narrative text for the presentation layer and
//! a consequence instruction for the game-state layer. The engine never
//! applies map or inventory changes itself; it tells the owning collaborator
//! what to do.

use serde::{Deserialize, Serialize};

/// The game-state change a finished cycle calls for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Consequence {
    /// The move succeeded; apply it to the map.
    MoveCompleted {
        /// Identifier of the destination node.
        destination: String,
    },
    /// The move failed; the piece stays put.
    MoveHalted {
        /// Identifier of the destination that was not reached.
        destination: String,
    },
    /// The gear did its job and stays in the inventory.
    GearPreserved {
        /// Identifier of the item.
        item: String,
    },
    /// The gear is compromised; remove it from the inventory.
    GearCompromised {
        /// Identifier of the item to remove.
        item: String,
    },
}

impl std::fmt::Display for Consequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MoveCompleted { destination } => write!(f, "move completed: {destination}"),
            Self::MoveHalted { destination } => write!(f, "move halted: {destination}"),
            Self::GearPreserved { item } => write!(f, "gear preserved: {item}"),
            Self::GearCompromised { item } => write!(f, "gear compromised: {item}"),
        }
    }
}

/// What the caller gets back from a finished (or recovered) cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeReport {
    /// Narrative lines joined in their contractual order.
    pub narrative: String,
    /// The game-state instruction, or `None` when the cycle was recovered
    /// from an invalid state and nothing should change.
    pub consequence: Option<Consequence>,
}

impl OutcomeReport {
    /// The generic recovery report: shown when a cycle was driven out of
    /// order, so the surrounding UI can still close gracefully.
    pub fn fallback() -> Self {
        Self {
            narrative: "Something went wrong during resolution; nothing has changed.".to_string(),
            consequence: None,
        }
    }
}

impl std::fmt::Display for OutcomeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.narrative)
    }
}

//! Routing finished rolls to their consequence handlers.
//!
//! The dispatcher matches exhaustively on the action context, invokes the
//! matching handler, and assembles the narrative. Phrase order is a fixed
//! contract: a Move context's pre-existing fragment comes first, the Renown
//! spend line (when mitigation paid for the success) comes next, and the
//! outcome phrase comes last: the game always explains why the roll
//! changed before stating the consequence.

use ironmeet_dice::RollResult;

use crate::context::ActionContext;
use crate::report::{Consequence, OutcomeReport};

/// Applies map-side effects of resolved movement rolls.
pub trait MoveConsequences {
    /// The move succeeded; the piece advances to `destination`.
    fn move_completed(&mut self, destination: &str);

    /// The move failed; the piece stays where it was.
    fn move_halted(&mut self, destination: &str);
}

/// Applies inventory-side effects of resolved gear rolls.
pub trait GearConsequences {
    /// The gear did its job and stays in the inventory.
    fn gear_used(&mut self, item: &str);

    /// The gear is compromised; remove it from the inventory.
    fn gear_compromised(&mut self, item: &str);
}

/// When Renown pays for a success, this line precedes the outcome phrase.
const RENOWN_SPENT_LINE: &str = "Renown spent: the failure is overturned.";

fn move_completed_line(destination: &str) -> String {
    format!("The push toward {destination} succeeds.")
}

fn move_halted_line(destination: &str) -> String {
    format!("The push toward {destination} falters.")
}

fn gear_holds_line(item: &str) -> String {
    format!("The {item} does its work and holds together.")
}

fn gear_lost_line(item: &str) -> String {
    format!("The {item} gives out and is lost for good.")
}

/// Converts finished rolls into outcome reports and handler calls.
///
/// Constructed with the two consequence handlers it routes to; there is no
/// ambient registry to reach into.
pub struct OutcomeDispatcher {
    movement: Box<dyn MoveConsequences>,
    gear: Box<dyn GearConsequences>,
}

impl OutcomeDispatcher {
    /// Wire the dispatcher to its consequence handlers.
    pub fn new(movement: Box<dyn MoveConsequences>, gear: Box<dyn GearConsequences>) -> Self {
        Self { movement, gear }
    }

    /// Route one finished roll: invoke the matching handler and build the
    /// outcome report.
    pub fn dispatch(&mut self, result: RollResult<ActionContext>) -> OutcomeReport {
        let mitigated = result.is_mitigated();
        match result.context {
            ActionContext::Move {
                destination,
                prelude,
            } => {
                let mut lines = Vec::new();
                if let Some(prelude) = prelude {
                    lines.push(prelude);
                }
                if mitigated {
                    lines.push(RENOWN_SPENT_LINE.to_string());
                }
                let consequence = if result.success {
                    self.movement.move_completed(&destination);
                    lines.push(move_completed_line(&destination));
                    Consequence::MoveCompleted { destination }
                } else {
                    self.movement.move_halted(&destination);
                    lines.push(move_halted_line(&destination));
                    Consequence::MoveHalted { destination }
                };
                OutcomeReport {
                    narrative: lines.join("\n"),
                    consequence: Some(consequence),
                }
            }
            ActionContext::GearUse { item } => {
                let mut lines = Vec::new();
                if mitigated {
                    lines.push(RENOWN_SPENT_LINE.to_string());
                }
                let consequence = if result.success {
                    self.gear.gear_used(&item);
                    lines.push(gear_holds_line(&item));
                    Consequence::GearPreserved { item }
                } else {
                    self.gear.gear_compromised(&item);
                    lines.push(gear_lost_line(&item));
                    Consequence::GearCompromised { item }
                };
                OutcomeReport {
                    narrative: lines.join("\n"),
                    consequence: Some(consequence),
                }
            }
        }
    }
}

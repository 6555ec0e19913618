//! Action outcomes and consequence dispatch for Ironmeet.
//!
//! Sits on top of `ironmeet-dice`: instantiates the generic resolution
//! engine with the game's closed [`ActionContext`] payload (a move, a piece
//! of gear), routes finished rolls to the matching consequence handler, and
//! renders the fixed narrative phrases in their contractual order. The
//! [`engine::ActionEngine`] facade recovers every invalid-state error into
//! a generic outcome report so game content can never crash a resolution.

pub mod context;
pub mod dispatch;
pub mod engine;
pub mod report;

pub use context::ActionContext;
pub use dispatch::{GearConsequences, MoveConsequences, OutcomeDispatcher};
pub use engine::{ActionEngine, EngineConfig, EngineStep, ResolutionRecord};
pub use report::{Consequence, OutcomeReport};

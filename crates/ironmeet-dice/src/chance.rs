//! Percentile chance evaluation.
//!
//! Every contested action in Ironmeet resolves against a percent chance of
//! success: a single uniform draw in [0, 100) compared against the
//! threshold. The draw happens exactly once per resolution cycle; Renown
//! mitigation flips the success flag afterwards but never re-rolls, so the
//! recorded draw stays fixed evidence of what the dice actually showed.

use rand::RngCore;
use serde::{Deserialize, Serialize};

/// A single evaluated percentile draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChanceRoll {
    /// The value drawn, 0 to 99.
    pub value: u32,
    /// Whether the draw beat the threshold (`value < threshold`).
    pub success: bool,
}

/// Evaluate a percent chance of success with a single uniform draw.
///
/// `threshold` is a percentage; values above 100 are clamped rather than
/// rejected, since thresholds come from game content data. A threshold of
/// 0 can never succeed and a threshold of 100 always succeeds.
pub fn roll<R: RngCore>(threshold: u32, rng: &mut R) -> ChanceRoll {
    let threshold = threshold.min(100);
    let value = draw_percent(rng);
    ChanceRoll {
        value,
        success: value < threshold,
    }
}

/// Scale one full-width draw down to [0, 100) without rejection sampling.
fn draw_percent<R: RngCore>(rng: &mut R) -> u32 {
    ((u64::from(rng.next_u32()) * 100) >> 32) as u32
}

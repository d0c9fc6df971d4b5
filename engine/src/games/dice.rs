//! Dice roll: hit a chosen face, win 1.25x the bet.
//!
//! The multiplier is flat across targets: every face is a 1-in-6 draw, so a
//! custom target changes nothing about the odds and earns no different
//! payout.

use rand::Rng;
use tablestakes_types::economy::{GameOutcome, OutcomeDetail};

use super::payout;

/// Target used when the player does not name one.
pub const DEFAULT_TARGET: u8 = 6;

/// Roll one die (1-6).
pub fn roll(rng: &mut impl Rng) -> u8 {
    rng.gen_range(1..=6)
}

/// Resolve against a known roll. `target` must already be in 1..=6.
pub fn resolve(bet: u64, target: u8, rolled: u8, bps: u64) -> GameOutcome {
    let won = rolled == target;
    GameOutcome {
        won,
        payout: if won { payout(bet, bps) } else { 0 },
        detail: OutcomeDetail::Dice { rolled, target },
    }
}

pub fn play(bet: u64, target: u8, bps: u64, rng: &mut impl Rng) -> GameOutcome {
    resolve(bet, target, roll(rng), bps)
}

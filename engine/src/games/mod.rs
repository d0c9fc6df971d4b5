//! Game resolution.
//!
//! Every game is a pure function from (bet, player input, randomness) to a
//! [`GameOutcome`]; nothing here touches the ledger or the clock. Each game
//! module splits drawing from resolving so tests can force any draw.
//!
//! Multipliers are basis points of the bet (10_000 = 1.0x) and the payout
//! is floored, so `floor(bet * 1.1)` and `bet * 11_000 / 10_000` agree.

pub mod coin_flip;
pub mod dice;
pub mod slots;

#[cfg(test)]
mod integration_tests;

use rand::Rng;
use tablestakes_types::economy::{GameOutcome, GameParams, SlotSymbol, BPS_SCALE};

use crate::error::ValidationError;

/// Total credit for a winning bet at `bps` basis points, floored.
pub(crate) fn payout(bet: u64, bps: u64) -> u64 {
    ((bet as u128 * bps as u128) / BPS_SCALE as u128) as u64
}

/// Payouts for the three slot hit tiers.
#[derive(Clone, Copy, Debug)]
pub struct SlotsPaytable {
    pub jackpot_bps: u64,
    pub triple_bps: u64,
    pub double_bps: u64,
}

/// Everything resolution needs that comes from configuration.
#[derive(Clone, Debug)]
pub struct GameTables {
    pub coin_flip_bps: u64,
    pub dice_bps: u64,
    pub slots: SlotsPaytable,
    pub reel: Weighted<SlotSymbol>,
}

/// Validate game-specific parameters and resolve one game.
///
/// Parameter errors surface before any draw so the caller can reject the
/// request without charging the bet.
pub fn play(
    tables: &GameTables,
    bet: u64,
    params: &GameParams,
    rng: &mut impl Rng,
) -> Result<GameOutcome, ValidationError> {
    match params {
        GameParams::CoinFlip { choice } => {
            let choice = choice
                .parse()
                .map_err(|_| ValidationError::InvalidChoice(choice.clone()))?;
            Ok(coin_flip::play(bet, choice, tables.coin_flip_bps, rng))
        }
        GameParams::DiceRoll { target } => {
            let target = target.unwrap_or(dice::DEFAULT_TARGET);
            if !(1..=6).contains(&target) {
                return Err(ValidationError::InvalidTarget(target));
            }
            Ok(dice::play(bet, target, tables.dice_bps, rng))
        }
        GameParams::Slots => Ok(slots::play(bet, &tables.reel, &tables.slots, rng)),
    }
}

/// Draws labels with probability proportional to configured weight.
///
/// Built once from a `(label, weight)` table. Each draw takes a uniform
/// integer in `[0, total)` and selects the first bucket whose cumulative
/// weight exceeds it.
#[derive(Clone, Debug)]
pub struct Weighted<T: Copy> {
    cumulative: Vec<(T, u64)>,
    total: u64,
}

impl<T: Copy> Weighted<T> {
    /// Returns `None` for a table that is empty or sums to zero weight.
    /// Zero-weight labels are dropped; they can never be drawn.
    pub fn new(table: &[(T, u32)]) -> Option<Self> {
        let mut cumulative = Vec::with_capacity(table.len());
        let mut total = 0u64;
        for &(label, weight) in table {
            if weight == 0 {
                continue;
            }
            total += weight as u64;
            cumulative.push((label, total));
        }
        if total == 0 {
            return None;
        }
        Some(Self { cumulative, total })
    }

    pub fn pick(&self, rng: &mut impl Rng) -> T {
        let draw = rng.gen_range(0..self.total);
        for &(label, bound) in &self.cumulative {
            if draw < bound {
                return label;
            }
        }
        // The last bound equals `total`, so the loop always returns; this
        // keeps the compiler satisfied without a panic path.
        self.cumulative[self.cumulative.len() - 1].0
    }

    pub fn total_weight(&self) -> u64 {
        self.total
    }
}

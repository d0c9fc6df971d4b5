//! Economy configuration.
//!
//! Every limit and multiplier the engine enforces comes from here; nothing
//! is hardcoded at the call sites. Defaults mirror the constants in
//! `tablestakes-types`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tablestakes_types::economy::{
    GameKind, SlotSymbol, BPS_SCALE, COIN_FLIP_BPS, DEFAULT_SYMBOL_WEIGHTS, DICE_BPS,
    INITIAL_BALANCE, MAX_BET, MIN_BET, PLAY_COOLDOWN_SECS, SLOTS_DOUBLE_BPS, SLOTS_JACKPOT_BPS,
    SLOTS_TRIPLE_BPS,
};
use thiserror::Error;

/// Largest bet the settlement arithmetic accepts. Keeps `payout - bet`
/// comfortably inside an `i64` even at the maximum multiplier.
pub const MAX_SETTLEABLE_BET: u64 = u32::MAX as u64;

/// Largest accepted multiplier (100x).
pub const MAX_BPS: u64 = 100 * BPS_SCALE;

/// Configuration for a [`crate::Table`].
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_min_bet")]
    pub min_bet: u64,
    #[serde(default = "default_max_bet")]
    pub max_bet: u64,
    #[serde(default = "default_initial_balance")]
    pub initial_balance: u64,

    #[serde(default = "default_coin_flip_bps")]
    pub coin_flip_bps: u64,
    #[serde(default = "default_dice_bps")]
    pub dice_bps: u64,
    #[serde(default = "default_slots_jackpot_bps")]
    pub slots_jackpot_bps: u64,
    #[serde(default = "default_slots_triple_bps")]
    pub slots_triple_bps: u64,
    #[serde(default = "default_slots_double_bps")]
    pub slots_double_bps: u64,

    /// Cooldown seconds per command name. A missing entry means the command
    /// is unthrottled.
    #[serde(default = "default_cooldowns")]
    pub cooldowns: HashMap<String, u64>,

    /// Reel symbol weights. Higher weight = more common.
    #[serde(default = "default_symbol_weights")]
    pub symbol_weights: Vec<(SlotSymbol, u32)>,

    /// Requests the service actor holds before senders block.
    #[serde(default = "default_mailbox_size")]
    pub mailbox_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_bet: default_min_bet(),
            max_bet: default_max_bet(),
            initial_balance: default_initial_balance(),
            coin_flip_bps: default_coin_flip_bps(),
            dice_bps: default_dice_bps(),
            slots_jackpot_bps: default_slots_jackpot_bps(),
            slots_triple_bps: default_slots_triple_bps(),
            slots_double_bps: default_slots_double_bps(),
            cooldowns: default_cooldowns(),
            symbol_weights: default_symbol_weights(),
            mailbox_size: default_mailbox_size(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min_bet {min} exceeds max_bet {max}")]
    InvertedBetLimits { min: u64, max: u64 },
    #[error("max_bet {0} exceeds the settleable range")]
    BetLimitTooLarge(u64),
    #[error("{field} multiplier {value} is out of range")]
    MultiplierOutOfRange { field: &'static str, value: u64 },
    #[error("symbol table is empty or sums to zero weight")]
    EmptySymbolTable,
    #[error("symbol table is missing the jackpot symbol")]
    MissingJackpot,
    #[error("mailbox_size must be > 0")]
    ZeroMailbox,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_bet > self.max_bet {
            return Err(ConfigError::InvertedBetLimits {
                min: self.min_bet,
                max: self.max_bet,
            });
        }
        if self.max_bet > MAX_SETTLEABLE_BET {
            return Err(ConfigError::BetLimitTooLarge(self.max_bet));
        }

        for (field, value) in [
            ("coin_flip_bps", self.coin_flip_bps),
            ("dice_bps", self.dice_bps),
            ("slots_jackpot_bps", self.slots_jackpot_bps),
            ("slots_triple_bps", self.slots_triple_bps),
            ("slots_double_bps", self.slots_double_bps),
        ] {
            // A winning multiplier below 1.0x would make `payout - bet`
            // negative; the settlement math assumes wins never debit.
            if !(BPS_SCALE..=MAX_BPS).contains(&value) {
                return Err(ConfigError::MultiplierOutOfRange { field, value });
            }
        }

        if self.symbol_weights.iter().all(|(_, w)| *w == 0) {
            return Err(ConfigError::EmptySymbolTable);
        }
        if !self
            .symbol_weights
            .iter()
            .any(|(s, w)| *s == SlotSymbol::JACKPOT && *w > 0)
        {
            return Err(ConfigError::MissingJackpot);
        }

        if self.mailbox_size == 0 {
            return Err(ConfigError::ZeroMailbox);
        }

        Ok(())
    }
}

fn default_min_bet() -> u64 {
    MIN_BET
}

fn default_max_bet() -> u64 {
    MAX_BET
}

fn default_initial_balance() -> u64 {
    INITIAL_BALANCE
}

fn default_coin_flip_bps() -> u64 {
    COIN_FLIP_BPS
}

fn default_dice_bps() -> u64 {
    DICE_BPS
}

fn default_slots_jackpot_bps() -> u64 {
    SLOTS_JACKPOT_BPS
}

fn default_slots_triple_bps() -> u64 {
    SLOTS_TRIPLE_BPS
}

fn default_slots_double_bps() -> u64 {
    SLOTS_DOUBLE_BPS
}

fn default_cooldowns() -> HashMap<String, u64> {
    [
        GameKind::CoinFlip.command(),
        GameKind::DiceRoll.command(),
        GameKind::Slots.command(),
    ]
    .into_iter()
    .map(|command| (command.to_string(), PLAY_COOLDOWN_SECS))
    .collect()
}

fn default_symbol_weights() -> Vec<(SlotSymbol, u32)> {
    DEFAULT_SYMBOL_WEIGHTS.to_vec()
}

fn default_mailbox_size() -> usize {
    128
}

//! Wager pre-checks.

use crate::error::{EngineError, ValidationError};

/// Bet limits, checked in order: minimum, maximum, funds.
///
/// This is a fast pre-check for caller feedback. Under concurrency the
/// balance can move between this check and settlement, so the ledger's
/// `apply_delta` failure path remains the authoritative guard.
#[derive(Clone, Copy, Debug)]
pub struct Limits {
    pub min_bet: u64,
    pub max_bet: u64,
}

impl Limits {
    pub fn check(&self, amount: u64, balance: u64) -> Result<(), EngineError> {
        if amount < self.min_bet {
            return Err(ValidationError::BetBelowMinimum {
                amount,
                min: self.min_bet,
            }
            .into());
        }
        if amount > self.max_bet {
            return Err(ValidationError::BetAboveMaximum {
                amount,
                max: self.max_bet,
            }
            .into());
        }
        if balance < amount {
            return Err(EngineError::InsufficientFunds {
                have: balance,
                need: amount,
            });
        }
        Ok(())
    }
}

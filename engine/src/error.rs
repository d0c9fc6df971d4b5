use std::time::Duration;
use tablestakes_types::economy::GameKind;
use thiserror::Error;

use crate::store::StoreError;

/// Bad user input, rejected before any state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("bet {amount} is below the minimum of {min}")]
    BetBelowMinimum { amount: u64, min: u64 },
    #[error("bet {amount} is above the maximum of {max}")]
    BetAboveMaximum { amount: u64, max: u64 },
    #[error("invalid choice {0:?}: expected \"heads\" or \"tails\"")]
    InvalidChoice(String),
    #[error("invalid target {0}: expected a number between 1 and 6")]
    InvalidTarget(u8),
    #[error("parameters do not match game {0:?}")]
    MismatchedParams(GameKind),
}

/// Terminal failure of one request.
///
/// None of these leave partial state behind: validation and throttle
/// rejections happen before settlement, an insufficient-funds failure leaves
/// the row untouched, and a storage failure aborts the request for the
/// caller to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("insufficient funds: have {have}, need {need}")]
    InsufficientFunds { have: u64, need: u64 },
    #[error("throttled for another {}ms", remaining.as_millis())]
    Throttled { remaining: Duration },
    #[error(transparent)]
    Storage(#[from] StoreError),
}

//! Coin flip: call a fair coin, win 1.1x the bet.

use rand::Rng;
use tablestakes_types::economy::{CoinSide, GameOutcome, OutcomeDetail};

use super::payout;

/// Draw a fair coin.
pub fn toss(rng: &mut impl Rng) -> CoinSide {
    if rng.gen::<bool>() {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    }
}

/// Resolve against a known landed face.
pub fn resolve(bet: u64, choice: CoinSide, landed: CoinSide, bps: u64) -> GameOutcome {
    let won = choice == landed;
    GameOutcome {
        won,
        payout: if won { payout(bet, bps) } else { 0 },
        detail: OutcomeDetail::Coin { landed },
    }
}

pub fn play(bet: u64, choice: CoinSide, bps: u64, rng: &mut impl Rng) -> GameOutcome {
    resolve(bet, choice, toss(rng), bps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::seeded_rng;
    use tablestakes_types::economy::COIN_FLIP_BPS;

    #[test]
    fn test_correct_call_pays_total_return() {
        let outcome = resolve(100, CoinSide::Heads, CoinSide::Heads, COIN_FLIP_BPS);
        assert!(outcome.won);
        assert_eq!(outcome.payout, 110);
        assert_eq!(outcome.detail, OutcomeDetail::Coin { landed: CoinSide::Heads });
    }

    #[test]
    fn test_wrong_call_pays_nothing() {
        let outcome = resolve(100, CoinSide::Tails, CoinSide::Heads, COIN_FLIP_BPS);
        assert!(!outcome.won);
        assert_eq!(outcome.payout, 0);
    }

    #[test]
    fn test_small_bet_payout_floors() {
        // floor(9 * 1.1) = 9: the house keeps the fraction
        let outcome = resolve(9, CoinSide::Tails, CoinSide::Tails, COIN_FLIP_BPS);
        assert_eq!(outcome.payout, 9);
    }

    #[test]
    fn test_toss_hits_both_faces() {
        let mut rng = seeded_rng(3);
        let mut heads = 0usize;
        let mut tails = 0usize;
        for _ in 0..1_000 {
            match toss(&mut rng) {
                CoinSide::Heads => heads += 1,
                CoinSide::Tails => tails += 1,
            }
        }
        assert!(heads > 0 && tails > 0);
    }
}

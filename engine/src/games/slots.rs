//! Slot reel: three independent weighted draws, paid by match class.
//!
//! Resolution precedence, first match wins:
//! triple jackpot > any other triple > exactly two matching > miss.

use rand::Rng;
use tablestakes_types::economy::{GameOutcome, OutcomeDetail, SlotHit, SlotSymbol};

use super::{payout, SlotsPaytable, Weighted};

/// Spin three independent reels.
pub fn spin(reel: &Weighted<SlotSymbol>, rng: &mut impl Rng) -> [SlotSymbol; 3] {
    [reel.pick(rng), reel.pick(rng), reel.pick(rng)]
}

/// Classify a line of symbols.
pub fn classify(symbols: [SlotSymbol; 3]) -> SlotHit {
    let [a, b, c] = symbols;
    if a == b && b == c {
        if a == SlotSymbol::JACKPOT {
            SlotHit::Jackpot
        } else {
            SlotHit::Triple
        }
    } else if a == b || b == c || a == c {
        SlotHit::Double
    } else {
        SlotHit::Miss
    }
}

/// Resolve against known reels.
pub fn resolve(bet: u64, symbols: [SlotSymbol; 3], paytable: &SlotsPaytable) -> GameOutcome {
    let hit = classify(symbols);
    let payout = match hit {
        SlotHit::Jackpot => payout(bet, paytable.jackpot_bps),
        SlotHit::Triple => payout(bet, paytable.triple_bps),
        SlotHit::Double => payout(bet, paytable.double_bps),
        SlotHit::Miss => 0,
    };
    GameOutcome {
        won: hit != SlotHit::Miss,
        payout,
        detail: OutcomeDetail::Reels { symbols, hit },
    }
}

pub fn play(
    bet: u64,
    reel: &Weighted<SlotSymbol>,
    paytable: &SlotsPaytable,
    rng: &mut impl Rng,
) -> GameOutcome {
    resolve(bet, spin(reel, rng), paytable)
}

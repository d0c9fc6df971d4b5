use super::SlotSymbol;

/// Minimum accepted wager.
pub const MIN_BET: u64 = 0;

/// Maximum accepted wager.
pub const MAX_BET: u64 = 10_000;

/// Balance granted when an account row is first created.
pub const INITIAL_BALANCE: u64 = 0;

/// Basis-point scale for payout multipliers (10_000 = 1.0x).
pub const BPS_SCALE: u64 = 10_000;

/// Coin flip win multiplier (1.1x).
pub const COIN_FLIP_BPS: u64 = 11_000;

/// Dice roll win multiplier (1.25x), applied to every target.
pub const DICE_BPS: u64 = 12_500;

/// Three jackpot symbols (1.5x).
pub const SLOTS_JACKPOT_BPS: u64 = 15_000;

/// Three of any other symbol (1.3x).
pub const SLOTS_TRIPLE_BPS: u64 = 13_000;

/// Exactly two matching symbols (1.2x).
pub const SLOTS_DOUBLE_BPS: u64 = 12_000;

/// Seconds an account must wait between plays of the same game command.
pub const PLAY_COOLDOWN_SECS: u64 = 3;

/// Maximum length of a command name in a cooldown key.
pub const MAX_COMMAND_LENGTH: usize = 32;

/// Maximum accounts tracked per community roster.
pub const MAX_COMMUNITY_ACCOUNTS: usize = 1 << 20;

/// Default reel weights. Higher weight = more common; `Seven` is the rare
/// jackpot symbol.
pub const DEFAULT_SYMBOL_WEIGHTS: [(SlotSymbol, u32); 7] = [
    (SlotSymbol::Cherry, 12),
    (SlotSymbol::Lemon, 12),
    (SlotSymbol::Orange, 12),
    (SlotSymbol::Grape, 12),
    (SlotSymbol::Bell, 12),
    (SlotSymbol::Diamond, 18),
    (SlotSymbol::Seven, 3),
];

use bytes::{Buf, BufMut};
use commonware_codec::{Error, FixedSize, Read, ReadExt, Write};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three game variants the engine resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GameKind {
    CoinFlip = 0,
    DiceRoll = 1,
    Slots = 2,
}

impl GameKind {
    /// Command name used for cooldown scoping.
    pub fn command(&self) -> &'static str {
        match self {
            Self::CoinFlip => "flip",
            Self::DiceRoll => "dice",
            Self::Slots => "slots",
        }
    }
}

impl Write for GameKind {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for GameKind {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        match value {
            0 => Ok(Self::CoinFlip),
            1 => Ok(Self::DiceRoll),
            2 => Ok(Self::Slots),
            i => Err(Error::InvalidEnum(i)),
        }
    }
}

impl FixedSize for GameKind {
    const SIZE: usize = 1;
}

/// A coin face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoinSide {
    Heads,
    Tails,
}

/// The text was neither "heads" nor "tails".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidSide;

impl FromStr for CoinSide {
    type Err = InvalidSide;

    /// Case-insensitive; anything other than "heads"/"tails" is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "heads" => Ok(Self::Heads),
            "tails" => Ok(Self::Tails),
            _ => Err(InvalidSide),
        }
    }
}

impl fmt::Display for CoinSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heads => write!(f, "heads"),
            Self::Tails => write!(f, "tails"),
        }
    }
}

/// A reel symbol. `Seven` is the rare jackpot symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotSymbol {
    Cherry,
    Lemon,
    Orange,
    Grape,
    Bell,
    Diamond,
    Seven,
}

impl SlotSymbol {
    /// The symbol that triggers the jackpot tier when tripled.
    pub const JACKPOT: SlotSymbol = SlotSymbol::Seven;
}

impl fmt::Display for SlotSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cherry => "cherry",
            Self::Lemon => "lemon",
            Self::Orange => "orange",
            Self::Grape => "grape",
            Self::Bell => "bell",
            Self::Diamond => "diamond",
            Self::Seven => "seven",
        };
        write!(f, "{}", name)
    }
}

/// Game-specific wager parameters, as received from the command layer.
///
/// The coin choice arrives as raw text and the dice target unchecked; both
/// are validated by the engine before any balance is touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameParams {
    CoinFlip { choice: String },
    DiceRoll { target: Option<u8> },
    Slots,
}

impl GameParams {
    /// The game these parameters belong to.
    pub fn kind(&self) -> GameKind {
        match self {
            Self::CoinFlip { .. } => GameKind::CoinFlip,
            Self::DiceRoll { .. } => GameKind::DiceRoll,
            Self::Slots => GameKind::Slots,
        }
    }
}

/// How a spin resolved, in precedence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotHit {
    Jackpot,
    Triple,
    Double,
    Miss,
}

/// Symbolic description of a resolved game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutcomeDetail {
    Coin {
        landed: CoinSide,
    },
    Dice {
        rolled: u8,
        target: u8,
    },
    Reels {
        symbols: [SlotSymbol; 3],
        hit: SlotHit,
    },
}

/// Result of resolving one game.
///
/// `payout` is the total amount credited back on a win, principal included;
/// it is zero on a loss. The net ledger delta is the orchestrator's concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub won: bool,
    pub payout: u64,
    pub detail: OutcomeDetail,
}

impl fmt::Display for OutcomeDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coin { landed } => write!(f, "coin landed {}", landed),
            Self::Dice { rolled, target } => {
                write!(f, "rolled {} (target {})", rolled, target)
            }
            Self::Reels { symbols, hit } => {
                write!(
                    f,
                    "{} | {} | {} ({:?})",
                    symbols[0], symbols[1], symbols[2], hit
                )
            }
        }
    }
}

use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadExt, Write};

/// Per-account economy row, scoped to one community.
///
/// The balance is unsigned by construction; a debit that would drive it
/// below zero must be rejected by the caller, never clamped. The three
/// counters are running aggregates, not a transaction history.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Account {
    pub balance: u64,
    pub total_winnings: u64,
    pub total_losses: u64,
    pub games_played: u64,
}

impl Account {
    pub fn new(initial_balance: u64) -> Self {
        Self {
            balance: initial_balance,
            total_winnings: 0,
            total_losses: 0,
            games_played: 0,
        }
    }
}

impl Write for Account {
    fn write(&self, writer: &mut impl BufMut) {
        self.balance.write(writer);
        self.total_winnings.write(writer);
        self.total_losses.write(writer);
        self.games_played.write(writer);
    }
}

impl Read for Account {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            balance: u64::read(reader)?,
            total_winnings: u64::read(reader)?,
            total_losses: u64::read(reader)?,
            games_played: u64::read(reader)?,
        })
    }
}

impl EncodeSize for Account {
    fn encode_size(&self) -> usize {
        self.balance.encode_size()
            + self.total_winnings.encode_size()
            + self.total_losses.encode_size()
            + self.games_played.encode_size()
    }
}

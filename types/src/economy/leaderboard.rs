use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadRangeExt, Write};

use super::MAX_COMMUNITY_ACCOUNTS;
use crate::AccountId;

/// One leaderboard row, computed on read. Not persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub account: AccountId,
    pub balance: u64,
    pub rank: u32,
}

/// Insertion-ordered list of every account ever created in a community.
///
/// A key-value contract cannot enumerate a community's accounts, so the
/// ledger appends here exactly once per lazy creation. The order doubles as
/// the leaderboard tie-break: equal balances rank by who joined first.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Roster {
    pub accounts: Vec<AccountId>,
}

impl Roster {
    pub fn push(&mut self, account: AccountId) {
        self.accounts.push(account);
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Write for Roster {
    fn write(&self, writer: &mut impl BufMut) {
        self.accounts.write(writer);
    }
}

impl Read for Roster {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            accounts: Vec::<AccountId>::read_range(reader, 0..=MAX_COMMUNITY_ACCOUNTS)?,
        })
    }
}

impl EncodeSize for Roster {
    fn encode_size(&self) -> usize {
        self.accounts.encode_size()
    }
}

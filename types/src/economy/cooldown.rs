use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadExt, Write};
use std::time::Duration;

/// Throttle row for one (account, community, command) triple.
///
/// An absent row means "not on cooldown"; an expired row means the same and
/// may be pruned at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CooldownEntry {
    /// Unix milliseconds at which the cooldown lapses.
    pub expires_at: u64,
}

impl CooldownEntry {
    pub fn new(expires_at: u64) -> Self {
        Self { expires_at }
    }

    /// Whether the cooldown still blocks at `now_ms`.
    pub fn is_active(&self, now_ms: u64) -> bool {
        now_ms < self.expires_at
    }

    /// Time left until the cooldown lapses (zero once expired).
    pub fn remaining(&self, now_ms: u64) -> Duration {
        Duration::from_millis(self.expires_at.saturating_sub(now_ms))
    }
}

impl Write for CooldownEntry {
    fn write(&self, writer: &mut impl BufMut) {
        self.expires_at.write(writer);
    }
}

impl Read for CooldownEntry {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            expires_at: u64::read(reader)?,
        })
    }
}

impl EncodeSize for CooldownEntry {
    fn encode_size(&self) -> usize {
        self.expires_at.encode_size()
    }
}

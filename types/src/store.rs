//! Persisted keyspace for the engine's storage contract.
//!
//! Every durable row is addressed by a [`Key`] and holds a [`Value`]; the
//! storage backend only ever sees their encodings. Account and cooldown rows
//! are scoped per community, so two communities never collide.

use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, FixedSize, Read, ReadExt, Write};

use crate::economy::{
    command_encode_size, read_command, write_command, Account, CooldownEntry, Roster,
};
use crate::{AccountId, CommunityId};

/// Address of one durable row.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Economy row for one account in one community (tag 0).
    Account {
        account: AccountId,
        community: CommunityId,
    },
    /// Throttle row for one command (tag 1).
    Cooldown {
        account: AccountId,
        community: CommunityId,
        command: String,
    },
    /// Creation-ordered account roster for one community (tag 2).
    Roster(CommunityId),
}

impl Write for Key {
    fn write(&self, writer: &mut impl BufMut) {
        match self {
            Self::Account { account, community } => {
                0u8.write(writer);
                account.write(writer);
                community.write(writer);
            }
            Self::Cooldown {
                account,
                community,
                command,
            } => {
                1u8.write(writer);
                account.write(writer);
                community.write(writer);
                write_command(command, writer);
            }
            Self::Roster(community) => {
                2u8.write(writer);
                community.write(writer);
            }
        }
    }
}

impl Read for Key {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let key = match u8::read(reader)? {
            0 => Self::Account {
                account: AccountId::read(reader)?,
                community: CommunityId::read(reader)?,
            },
            1 => Self::Cooldown {
                account: AccountId::read(reader)?,
                community: CommunityId::read(reader)?,
                command: read_command(reader)?,
            },
            2 => Self::Roster(CommunityId::read(reader)?),
            i => return Err(Error::InvalidEnum(i)),
        };

        Ok(key)
    }
}

impl EncodeSize for Key {
    fn encode_size(&self) -> usize {
        u8::SIZE
            + match self {
                Self::Account { .. } => AccountId::SIZE + CommunityId::SIZE,
                Self::Cooldown { command, .. } => {
                    AccountId::SIZE + CommunityId::SIZE + command_encode_size(command)
                }
                Self::Roster(_) => CommunityId::SIZE,
            }
    }
}

/// Contents of one durable row. Tags match [`Key`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Account(Account),
    Cooldown(CooldownEntry),
    Roster(Roster),
}

impl Write for Value {
    fn write(&self, writer: &mut impl BufMut) {
        match self {
            Self::Account(account) => {
                0u8.write(writer);
                account.write(writer);
            }
            Self::Cooldown(entry) => {
                1u8.write(writer);
                entry.write(writer);
            }
            Self::Roster(roster) => {
                2u8.write(writer);
                roster.write(writer);
            }
        }
    }
}

impl Read for Value {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = match u8::read(reader)? {
            0 => Self::Account(Account::read(reader)?),
            1 => Self::Cooldown(CooldownEntry::read(reader)?),
            2 => Self::Roster(Roster::read(reader)?),
            i => return Err(Error::InvalidEnum(i)),
        };

        Ok(value)
    }
}

impl EncodeSize for Value {
    fn encode_size(&self) -> usize {
        u8::SIZE
            + match self {
                Self::Account(account) => account.encode_size(),
                Self::Cooldown(entry) => entry.encode_size(),
                Self::Roster(roster) => roster.encode_size(),
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commonware_codec::Encode;

    #[test]
    fn test_cooldown_key_includes_command() {
        let flip = Key::Cooldown {
            account: 7,
            community: 1,
            command: "flip".to_string(),
        };
        let slots = Key::Cooldown {
            account: 7,
            community: 1,
            command: "slots".to_string(),
        };

        // Same account, different commands: distinct rows
        assert_ne!(flip.encode(), slots.encode());

        let decoded = Key::read(&mut &flip.encode()[..]).unwrap();
        assert_eq!(decoded, flip);
    }

    #[test]
    fn test_value_rejects_unknown_tag() {
        assert!(Value::read(&mut &[42u8][..]).is_err());
        assert!(Key::read(&mut &[42u8][..]).is_err());
    }

    #[test]
    fn test_account_value_roundtrip() {
        let value = Value::Account(Account {
            balance: 1_000,
            total_winnings: 250,
            total_losses: 100,
            games_played: 12,
        });
        let encoded = value.encode();
        assert_eq!(encoded.len(), value.encode_size());
        assert_eq!(Value::read(&mut &encoded[..]).unwrap(), value);
    }
}

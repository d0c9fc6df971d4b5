//! Per-command throttle tracking.

use std::time::Duration;
use tablestakes_types::economy::CooldownEntry;
use tablestakes_types::store::{Key, Value};
use tablestakes_types::{AccountId, CommunityId};

use crate::store::{Store, StoreError};

/// Outcome of a throttle check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// The command may proceed; the window has been re-armed.
    Acquired,
    /// The command is still throttled.
    Throttled { remaining: Duration },
}

/// Durable throttle state per (account, community, command).
///
/// [`Tracker::try_acquire`] is a single check-and-set under the caller's
/// exclusive borrow: two racing invocations cannot both observe an idle
/// window. An absent row and an expired row are equivalent ("idle").
pub struct Tracker<S: Store> {
    store: S,
}

impl<S: Store> Tracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn key(account: AccountId, community: CommunityId, command: &str) -> Key {
        Key::Cooldown {
            account,
            community,
            command: command.to_string(),
        }
    }

    async fn load(
        &self,
        account: AccountId,
        community: CommunityId,
        command: &str,
    ) -> Result<Option<CooldownEntry>, StoreError> {
        match self
            .store
            .get(&Self::key(account, community, command))
            .await?
        {
            Some(Value::Cooldown(entry)) => Ok(Some(entry)),
            _ => Ok(None),
        }
    }

    /// If idle, arm a window of `duration` from `now_ms` and return
    /// `Acquired`; if still active, return `Throttled` without mutating.
    pub async fn try_acquire(
        &mut self,
        account: AccountId,
        community: CommunityId,
        command: &str,
        duration: Duration,
        now_ms: u64,
    ) -> Result<Gate, StoreError> {
        if let Some(entry) = self.load(account, community, command).await? {
            if entry.is_active(now_ms) {
                return Ok(Gate::Throttled {
                    remaining: entry.remaining(now_ms),
                });
            }
        }

        let expires_at = now_ms.saturating_add(duration.as_millis() as u64);
        self.store
            .insert(
                Self::key(account, community, command),
                Value::Cooldown(CooldownEntry::new(expires_at)),
            )
            .await?;
        Ok(Gate::Acquired)
    }

    /// Delete expired rows for the given commands, returning how many were
    /// dropped. Safe to run at any time.
    pub async fn prune(
        &mut self,
        account: AccountId,
        community: CommunityId,
        commands: &[&str],
        now_ms: u64,
    ) -> Result<usize, StoreError> {
        let mut pruned = 0;
        for command in commands {
            if let Some(entry) = self.load(account, community, command).await? {
                if !entry.is_active(now_ms) {
                    self.store
                        .delete(&Self::key(account, community, command))
                        .await?;
                    pruned += 1;
                }
            }
        }
        Ok(pruned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Memory;
    use commonware_runtime::{deterministic::Runner, Runner as _};

    const WINDOW: Duration = Duration::from_secs(3);

    #[test]
    fn test_acquire_then_throttled() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let mut tracker = Tracker::new(Memory::default());

            let first = tracker.try_acquire(1, 7, "flip", WINDOW, 1_000).await.unwrap();
            assert_eq!(first, Gate::Acquired);

            // One second later: still inside the window
            let second = tracker.try_acquire(1, 7, "flip", WINDOW, 2_000).await.unwrap();
            assert_eq!(
                second,
                Gate::Throttled {
                    remaining: Duration::from_millis(2_000)
                }
            );
        });
    }

    #[test]
    fn test_exactly_one_of_two_rapid_acquires_wins() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let mut tracker = Tracker::new(Memory::default());

            let a = tracker.try_acquire(1, 7, "slots", WINDOW, 500).await.unwrap();
            let b = tracker.try_acquire(1, 7, "slots", WINDOW, 500).await.unwrap();

            let acquired = [a, b]
                .iter()
                .filter(|gate| matches!(gate, Gate::Acquired))
                .count();
            assert_eq!(acquired, 1);
        });
    }

    #[test]
    fn test_expired_window_reacquires() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let mut tracker = Tracker::new(Memory::default());

            assert_eq!(
                tracker.try_acquire(1, 7, "dice", WINDOW, 0).await.unwrap(),
                Gate::Acquired
            );

            // Expiry is exclusive: at exactly expires_at the window is idle
            assert_eq!(
                tracker.try_acquire(1, 7, "dice", WINDOW, 3_000).await.unwrap(),
                Gate::Acquired
            );
        });
    }

    #[test]
    fn test_commands_and_accounts_are_independent() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let mut tracker = Tracker::new(Memory::default());

            assert_eq!(
                tracker.try_acquire(1, 7, "flip", WINDOW, 0).await.unwrap(),
                Gate::Acquired
            );
            // Different command, same account
            assert_eq!(
                tracker.try_acquire(1, 7, "dice", WINDOW, 0).await.unwrap(),
                Gate::Acquired
            );
            // Same command, different account
            assert_eq!(
                tracker.try_acquire(2, 7, "flip", WINDOW, 0).await.unwrap(),
                Gate::Acquired
            );
            // Same command, same account, different community
            assert_eq!(
                tracker.try_acquire(1, 8, "flip", WINDOW, 0).await.unwrap(),
                Gate::Acquired
            );
        });
    }

    #[test]
    fn test_prune_drops_only_expired_rows() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let mut tracker = Tracker::new(Memory::default());

            tracker.try_acquire(1, 7, "flip", WINDOW, 0).await.unwrap();
            tracker.try_acquire(1, 7, "slots", WINDOW, 2_000).await.unwrap();

            // At t=4s: "flip" (expired at 3s) goes, "slots" (expires at 5s) stays
            let pruned = tracker
                .prune(1, 7, &["flip", "slots"], 4_000)
                .await
                .unwrap();
            assert_eq!(pruned, 1);

            assert!(matches!(
                tracker.try_acquire(1, 7, "slots", WINDOW, 4_000).await.unwrap(),
                Gate::Throttled { .. }
            ));
            assert_eq!(
                tracker.try_acquire(1, 7, "flip", WINDOW, 4_000).await.unwrap(),
                Gate::Acquired
            );
        });
    }
}

//! Balance and aggregate-stat bookkeeping.

use tablestakes_types::economy::{Account, LeaderboardEntry, Roster};
use tablestakes_types::store::{Key, Value};
use tablestakes_types::{AccountId, CommunityId};
use tracing::debug;

use crate::error::EngineError;
use crate::store::{Store, StoreError};

/// Durable per-community balances and counters.
///
/// Every balance mutation funnels through [`Ledger::apply_delta`] or the
/// administrative [`Ledger::set_balance`]: a single read-modify-write of one
/// row under the caller's exclusive borrow. There is deliberately no
/// separate "read balance, write balance" surface — that split is how a
/// concurrent pair of plays double-spends.
pub struct Ledger<S: Store> {
    store: S,
    initial_balance: u64,
}

impl<S: Store> Ledger<S> {
    pub fn new(store: S, initial_balance: u64) -> Self {
        Self {
            store,
            initial_balance,
        }
    }

    async fn load(
        &self,
        account: AccountId,
        community: CommunityId,
    ) -> Result<Option<Account>, StoreError> {
        match self.store.get(&Key::Account { account, community }).await? {
            Some(Value::Account(row)) => Ok(Some(row)),
            _ => Ok(None),
        }
    }

    async fn roster(&self, community: CommunityId) -> Result<Roster, StoreError> {
        match self.store.get(&Key::Roster(community)).await? {
            Some(Value::Roster(roster)) => Ok(roster),
            _ => Ok(Roster::default()),
        }
    }

    async fn write(
        &mut self,
        account: AccountId,
        community: CommunityId,
        row: Account,
    ) -> Result<(), StoreError> {
        self.store
            .insert(Key::Account { account, community }, Value::Account(row))
            .await
    }

    /// Load the row, creating it at the initial balance on first reference.
    /// Creation appends to the community roster exactly once; the roster's
    /// order is the leaderboard tie-break.
    async fn load_or_create(
        &mut self,
        account: AccountId,
        community: CommunityId,
    ) -> Result<Account, StoreError> {
        if let Some(row) = self.load(account, community).await? {
            return Ok(row);
        }

        let row = Account::new(self.initial_balance);
        self.write(account, community, row.clone()).await?;

        let mut roster = self.roster(community).await?;
        roster.push(account);
        self.store
            .insert(Key::Roster(community), Value::Roster(roster))
            .await?;

        debug!(account, community, balance = row.balance, "created account");
        Ok(row)
    }

    /// Current balance, creating the account lazily.
    pub async fn balance(
        &mut self,
        account: AccountId,
        community: CommunityId,
    ) -> Result<u64, StoreError> {
        Ok(self.load_or_create(account, community).await?.balance)
    }

    /// Atomically add `delta` to the balance and return the new value.
    ///
    /// A debit that would drive the balance below zero is rejected with
    /// `InsufficientFunds` and the row is left unchanged — never clamped.
    pub async fn apply_delta(
        &mut self,
        account: AccountId,
        community: CommunityId,
        delta: i64,
    ) -> Result<u64, EngineError> {
        let mut row = self.load_or_create(account, community).await?;

        row.balance = if delta >= 0 {
            row.balance.saturating_add(delta as u64)
        } else {
            let debit = delta.unsigned_abs();
            row.balance
                .checked_sub(debit)
                .ok_or(EngineError::InsufficientFunds {
                    have: row.balance,
                    need: debit,
                })?
        };

        let new_balance = row.balance;
        self.write(account, community, row).await?;
        Ok(new_balance)
    }

    /// Fold one game into the aggregate counters. Independent of
    /// [`Ledger::apply_delta`]; the two are not a joint transaction.
    pub async fn record_result(
        &mut self,
        account: AccountId,
        community: CommunityId,
        winnings: u64,
        losses: u64,
    ) -> Result<(), StoreError> {
        let mut row = self.load_or_create(account, community).await?;
        row.total_winnings = row.total_winnings.saturating_add(winnings);
        row.total_losses = row.total_losses.saturating_add(losses);
        row.games_played = row.games_played.saturating_add(1);
        self.write(account, community, row).await
    }

    /// Full stats row, without lazy creation.
    pub async fn stats(
        &self,
        account: AccountId,
        community: CommunityId,
    ) -> Result<Option<Account>, StoreError> {
        self.load(account, community).await
    }

    /// Administrative override. Creates the row if needed and writes the
    /// balance through the same single-row path as [`Ledger::apply_delta`].
    pub async fn set_balance(
        &mut self,
        account: AccountId,
        community: CommunityId,
        value: u64,
    ) -> Result<u64, StoreError> {
        let mut row = self.load_or_create(account, community).await?;
        row.balance = value;
        self.write(account, community, row).await?;
        Ok(value)
    }

    /// Top balances: descending, at most `limit` rows, equal balances in
    /// creation order (the roster is creation-ordered and the sort is
    /// stable).
    pub async fn leaderboard(
        &self,
        community: CommunityId,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let roster = self.roster(community).await?;

        let mut rows = Vec::with_capacity(roster.len());
        for account in roster.accounts {
            if let Some(row) = self.load(account, community).await? {
                rows.push((account, row.balance));
            }
        }

        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows.truncate(limit);

        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(i, (account, balance))| LeaderboardEntry {
                account,
                balance,
                rank: (i + 1) as u32,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::FailStore;
    use crate::store::Memory;
    use commonware_runtime::{deterministic::Runner, Runner as _};

    const COMMUNITY: CommunityId = 7;

    fn ledger() -> Ledger<Memory> {
        Ledger::new(Memory::default(), 100)
    }

    #[test]
    fn test_lazy_creation_is_idempotent() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let mut ledger = ledger();

            assert_eq!(ledger.balance(1, COMMUNITY).await.unwrap(), 100);
            assert_eq!(ledger.balance(1, COMMUNITY).await.unwrap(), 100);

            // Re-reads must not re-append to the roster
            let board = ledger.leaderboard(COMMUNITY, 10).await.unwrap();
            assert_eq!(board.len(), 1);
        });
    }

    #[test]
    fn test_apply_delta_credits_and_debits() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let mut ledger = ledger();

            assert_eq!(ledger.apply_delta(1, COMMUNITY, 50).await.unwrap(), 150);
            assert_eq!(ledger.apply_delta(1, COMMUNITY, -150).await.unwrap(), 0);
        });
    }

    #[test]
    fn test_apply_delta_rejects_overdraft_unchanged() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let mut ledger = ledger();

            let result = ledger.apply_delta(1, COMMUNITY, -101).await;
            assert!(matches!(
                result,
                Err(EngineError::InsufficientFunds {
                    have: 100,
                    need: 101
                })
            ));

            // Balance untouched by the failed debit
            assert_eq!(ledger.balance(1, COMMUNITY).await.unwrap(), 100);
        });
    }

    #[test]
    fn test_record_result_accumulates() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let mut ledger = ledger();

            ledger.record_result(1, COMMUNITY, 25, 0).await.unwrap();
            ledger.record_result(1, COMMUNITY, 0, 40).await.unwrap();

            let stats = ledger.stats(1, COMMUNITY).await.unwrap().unwrap();
            assert_eq!(stats.total_winnings, 25);
            assert_eq!(stats.total_losses, 40);
            assert_eq!(stats.games_played, 2);
        });
    }

    #[test]
    fn test_stats_absent_without_creation() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let ledger = ledger();
            assert_eq!(ledger.stats(42, COMMUNITY).await.unwrap(), None);
        });
    }

    #[test]
    fn test_leaderboard_order_ties_and_limit() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let mut ledger = ledger();

            ledger.set_balance(1, COMMUNITY, 500).await.unwrap();
            ledger.set_balance(2, COMMUNITY, 500).await.unwrap();
            ledger.set_balance(3, COMMUNITY, 300).await.unwrap();

            let board = ledger.leaderboard(COMMUNITY, 10).await.unwrap();
            assert_eq!(board.len(), 3);

            // Tie between 1 and 2 resolves to creation order
            assert_eq!(board[0].account, 1);
            assert_eq!(board[1].account, 2);
            assert_eq!(board[2].account, 3);
            assert_eq!(board[0].rank, 1);
            assert_eq!(board[2].rank, 3);

            let truncated = ledger.leaderboard(COMMUNITY, 2).await.unwrap();
            assert_eq!(truncated.len(), 2);
        });
    }

    #[test]
    fn test_communities_are_isolated() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let mut ledger = ledger();

            ledger.set_balance(1, 1, 999).await.unwrap();
            assert_eq!(ledger.balance(1, 2).await.unwrap(), 100);
            assert_eq!(ledger.leaderboard(2, 10).await.unwrap().len(), 1);
        });
    }

    #[test]
    fn test_ledger_over_durable_store() {
        let executor = Runner::default();
        executor.start(|context| async move {
            let store = crate::mocks::create_adb(&context, "ledger").await.unwrap();
            let mut ledger = Ledger::new(store, 100);

            assert_eq!(ledger.balance(1, COMMUNITY).await.unwrap(), 100);
            assert_eq!(ledger.apply_delta(1, COMMUNITY, 50).await.unwrap(), 150);
            assert!(ledger.apply_delta(1, COMMUNITY, -200).await.is_err());
            assert_eq!(ledger.balance(1, COMMUNITY).await.unwrap(), 150);
        });
    }

    #[test]
    fn test_storage_failure_propagates() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let mut ledger = Ledger::new(FailStore, 100);

            assert!(ledger.balance(1, COMMUNITY).await.is_err());
            assert!(matches!(
                ledger.apply_delta(1, COMMUNITY, 1).await,
                Err(EngineError::Storage(_))
            ));
        });
    }
}

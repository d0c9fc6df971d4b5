//! Session orchestration: the only component that sequences side effects.

use commonware_runtime::Clock;
use rand::{CryptoRng, Rng};
use std::collections::HashMap;
use std::time::{Duration, UNIX_EPOCH};
use tablestakes_types::economy::{Account, GameKind, GameOutcome, GameParams, LeaderboardEntry};
use tablestakes_types::{AccountId, CommunityId};
use tracing::{debug, info};

use crate::config::{Config, ConfigError};
use crate::cooldown::{Gate, Tracker};
use crate::error::{EngineError, ValidationError};
use crate::games::{self, GameTables, SlotsPaytable, Weighted};
use crate::ledger::Ledger;
use crate::store::Store;
use crate::validate::Limits;

/// Completed play, returned to the command layer.
#[derive(Clone, Debug)]
pub struct Receipt {
    pub new_balance: u64,
    pub payout: u64,
    pub outcome: GameOutcome,
}

/// One community-facing table: throttling, validation, resolution, and
/// settlement for every play request.
///
/// All mutating methods take `&mut self`. Callers that need concurrent
/// access route requests through [`crate::service`], which serializes them
/// onto a single instance; that exclusivity is what makes the ledger's
/// read-modify-write and the tracker's check-and-set atomic per key.
///
/// The ledger delta and the stats counters are two separate row writes. A
/// crash between them leaves the balance settled but the counters one game
/// behind — accepted, not repaired here.
pub struct Table<E: Rng + CryptoRng + Clock, S: Store> {
    context: E,
    limits: Limits,
    initial_balance: u64,
    tables: GameTables,
    cooldowns: HashMap<String, Duration>,
    ledger: Ledger<S>,
    tracker: Tracker<S>,
}

impl<E: Rng + CryptoRng + Clock, S: Store> Table<E, S> {
    /// Build a table from a validated config. `ledger_store` and
    /// `cooldown_store` are owned exclusively by their components; nothing
    /// else touches those rows.
    pub fn new(
        context: E,
        config: Config,
        ledger_store: S,
        cooldown_store: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        // Validation guarantees a non-degenerate table
        let reel = Weighted::new(&config.symbol_weights).ok_or(ConfigError::EmptySymbolTable)?;

        Ok(Self {
            context,
            limits: Limits {
                min_bet: config.min_bet,
                max_bet: config.max_bet,
            },
            initial_balance: config.initial_balance,
            tables: GameTables {
                coin_flip_bps: config.coin_flip_bps,
                dice_bps: config.dice_bps,
                slots: SlotsPaytable {
                    jackpot_bps: config.slots_jackpot_bps,
                    triple_bps: config.slots_triple_bps,
                    double_bps: config.slots_double_bps,
                },
                reel,
            },
            cooldowns: config
                .cooldowns
                .iter()
                .map(|(command, secs)| (command.clone(), Duration::from_secs(*secs)))
                .collect(),
            ledger: Ledger::new(ledger_store, config.initial_balance),
            tracker: Tracker::new(cooldown_store),
        })
    }

    fn now_ms(&self) -> u64 {
        // A clock before the unix epoch reads as 0
        self.context
            .current()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }

    fn cooldown_for(&self, command: &str) -> Duration {
        self.cooldowns.get(command).copied().unwrap_or(Duration::ZERO)
    }

    /// Run one play request to completion or first rejection.
    pub async fn play(
        &mut self,
        account: AccountId,
        community: CommunityId,
        kind: GameKind,
        amount: u64,
        params: GameParams,
    ) -> Result<Receipt, EngineError> {
        let command = kind.command();

        // 1. Throttle gate. Arms the window; a rejected bet below still
        // consumes it, matching the per-command cadence players see.
        let now_ms = self.now_ms();
        let window = self.cooldown_for(command);
        let gate = self
            .tracker
            .try_acquire(account, community, command, window, now_ms)
            .await?;
        if let Gate::Throttled { remaining } = gate {
            debug!(account, community, command, remaining_ms = remaining.as_millis() as u64, "throttled");
            return Err(EngineError::Throttled { remaining });
        }

        // 2. Parameter and bet validation. Nothing has been charged yet.
        if params.kind() != kind {
            return Err(ValidationError::MismatchedParams(kind).into());
        }
        let balance = self.ledger.balance(account, community).await?;
        self.limits.check(amount, balance)?;

        // 3. Pure resolution (validates choice/target before drawing).
        let outcome = games::play(&self.tables, amount, &params, &mut self.context)?;

        // 4. Single atomic settlement. Payout is the total return, so the
        // net delta is payout - bet on a win and -bet on a loss. This can
        // still fail with InsufficientFunds if the balance moved since the
        // pre-check; nothing has been recorded in that case.
        let delta = if outcome.won {
            outcome.payout as i64 - amount as i64
        } else {
            -(amount as i64)
        };
        let new_balance = self.ledger.apply_delta(account, community, delta).await?;

        // 5. Aggregate counters.
        let (winnings, losses) = if outcome.won {
            (outcome.payout.saturating_sub(amount), 0)
        } else {
            (0, amount)
        };
        self.ledger
            .record_result(account, community, winnings, losses)
            .await?;

        info!(
            account,
            community,
            game = command,
            bet = amount,
            won = outcome.won,
            payout = outcome.payout,
            new_balance,
            "settled"
        );

        Ok(Receipt {
            new_balance,
            payout: outcome.payout,
            outcome,
        })
    }

    /// Current balance, creating the account lazily.
    pub async fn balance(
        &mut self,
        account: AccountId,
        community: CommunityId,
    ) -> Result<u64, EngineError> {
        Ok(self.ledger.balance(account, community).await?)
    }

    /// Stats row, absent if the account was never referenced.
    pub async fn stats(
        &self,
        account: AccountId,
        community: CommunityId,
    ) -> Result<Option<Account>, EngineError> {
        Ok(self.ledger.stats(account, community).await?)
    }

    /// Top balances for a community.
    pub async fn leaderboard(
        &self,
        community: CommunityId,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, EngineError> {
        Ok(self.ledger.leaderboard(community, limit).await?)
    }

    /// Administrative: write an exact balance. Bypasses bet and cooldown
    /// logic but still routes through the ledger's single-row path.
    pub async fn set_balance(
        &mut self,
        account: AccountId,
        community: CommunityId,
        value: u64,
    ) -> Result<u64, EngineError> {
        let new_balance = self.ledger.set_balance(account, community, value).await?;
        info!(account, community, new_balance, "balance set");
        Ok(new_balance)
    }

    /// Administrative: credit or debit a grant through the atomic path.
    /// A debit that would overdraw is rejected like any other.
    pub async fn grant(
        &mut self,
        account: AccountId,
        community: CommunityId,
        delta: i64,
    ) -> Result<u64, EngineError> {
        let new_balance = self.ledger.apply_delta(account, community, delta).await?;
        info!(account, community, delta, new_balance, "grant applied");
        Ok(new_balance)
    }

    /// Administrative: reset to the configured initial balance.
    pub async fn reset(
        &mut self,
        account: AccountId,
        community: CommunityId,
    ) -> Result<u64, EngineError> {
        let new_balance = self
            .ledger
            .set_balance(account, community, self.initial_balance)
            .await?;
        info!(account, community, new_balance, "balance reset");
        Ok(new_balance)
    }

    /// Drop expired cooldown rows for one account.
    pub async fn prune_cooldowns(
        &mut self,
        account: AccountId,
        community: CommunityId,
    ) -> Result<usize, EngineError> {
        let commands: Vec<String> = self.cooldowns.keys().cloned().collect();
        let refs: Vec<&str> = commands.iter().map(String::as_str).collect();
        let now_ms = self.now_ms();
        Ok(self
            .tracker
            .prune(account, community, &refs, now_ms)
            .await?)
    }
}

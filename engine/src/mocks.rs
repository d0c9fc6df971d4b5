//! Test fixtures: seeded randomness, canned configs, a durable store
//! constructor, and a permanently failing store.

use crate::config::Config;
use crate::games::{GameTables, SlotsPaytable, Weighted};
use crate::store::{Adb, Store, StoreError};
use anyhow::Context as _;
use commonware_runtime::{buffer::PoolRef, Clock, Metrics, Spawner, Storage};
use commonware_storage::{adb, translator::EightCap};
use commonware_utils::{NZUsize, NZU64};
use rand::{rngs::StdRng, SeedableRng};
use tablestakes_types::economy::{
    COIN_FLIP_BPS, DEFAULT_SYMBOL_WEIGHTS, DICE_BPS, SLOTS_DOUBLE_BPS, SLOTS_JACKPOT_BPS,
    SLOTS_TRIPLE_BPS,
};
use tablestakes_types::store::{Key, Value};

const TEST_BUFFER_POOL_PAGES: usize = 1024;
const TEST_BUFFER_POOL_PAGE_SIZE: usize = 1024;
const TEST_MMR_ITEMS_PER_BLOB: u64 = 1024;
const TEST_MMR_WRITE_BUFFER: usize = 1024;
const TEST_LOG_ITEMS_PER_SECTION: u64 = 1024;
const TEST_LOG_WRITE_BUFFER: usize = 1024;
const TEST_LOCATIONS_ITEMS_PER_BLOB: u64 = 1024;

/// Deterministic RNG for forced-draw tests.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Config with a workable test economy: players start with 500, bets run
/// 1..=1000, and each game carries the default 3-second cooldown.
pub fn test_config() -> Config {
    Config {
        min_bet: 1,
        max_bet: 1_000,
        initial_balance: 500,
        ..Config::default()
    }
}

/// Game tables at the default multipliers and weights.
pub fn test_tables() -> GameTables {
    GameTables {
        coin_flip_bps: COIN_FLIP_BPS,
        dice_bps: DICE_BPS,
        slots: SlotsPaytable {
            jackpot_bps: SLOTS_JACKPOT_BPS,
            triple_bps: SLOTS_TRIPLE_BPS,
            double_bps: SLOTS_DOUBLE_BPS,
        },
        reel: Weighted::new(&DEFAULT_SYMBOL_WEIGHTS).expect("default weights are valid"),
    }
}

/// Create a durable store over the runtime's storage, namespaced by
/// `prefix` so ledger and cooldown stores can share one runtime.
pub async fn create_adb<E: Spawner + Metrics + Storage + Clock>(
    context: &E,
    prefix: &str,
) -> anyhow::Result<Adb<E, EightCap>> {
    let buffer_pool = PoolRef::new(
        NZUsize!(TEST_BUFFER_POOL_PAGES),
        NZUsize!(TEST_BUFFER_POOL_PAGE_SIZE),
    );

    Adb::init(
        context.with_label(prefix),
        adb::any::variable::Config {
            mmr_journal_partition: format!("{prefix}-mmr-journal"),
            mmr_metadata_partition: format!("{prefix}-mmr-metadata"),
            mmr_items_per_blob: NZU64!(TEST_MMR_ITEMS_PER_BLOB),
            mmr_write_buffer: NZUsize!(TEST_MMR_WRITE_BUFFER),
            log_journal_partition: format!("{prefix}-log-journal"),
            log_items_per_section: NZU64!(TEST_LOG_ITEMS_PER_SECTION),
            log_write_buffer: NZUsize!(TEST_LOG_WRITE_BUFFER),
            log_compression: None,
            log_codec_config: (),
            locations_journal_partition: format!("{prefix}-locations-journal"),
            locations_items_per_blob: NZU64!(TEST_LOCATIONS_ITEMS_PER_BLOB),
            translator: EightCap,
            thread_pool: None,
            buffer_pool,
        },
    )
    .await
    .context("failed to initialize store ADB")
}

/// Store whose backend is down: every operation fails. Exercises the
/// storage-unavailable paths.
pub struct FailStore;

impl Store for FailStore {
    async fn get(&self, _: &Key) -> Result<Option<Value>, StoreError> {
        Err(StoreError("backend offline".to_string()))
    }

    async fn insert(&mut self, _: Key, _: Value) -> Result<(), StoreError> {
        Err(StoreError("backend offline".to_string()))
    }

    async fn delete(&mut self, _: &Key) -> Result<(), StoreError> {
        Err(StoreError("backend offline".to_string()))
    }
}

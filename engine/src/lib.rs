//! Community virtual-currency game engine.
//!
//! A [`Table`] composes the four stateful pieces behind every play request:
//! the [`ledger::Ledger`] (balances and aggregate counters), the
//! [`cooldown::Tracker`] (per-command throttling), the bet pre-checks in
//! [`validate`], and the pure game resolution in [`games`]. Storage is
//! abstracted behind [`Store`], with an in-memory backend and a durable
//! one built on `commonware-storage`.
//!
//! Concurrent callers go through [`service`]: a single actor owns the table
//! and drains requests one at a time, which is what makes balance updates
//! and cooldown check-and-sets atomic per key.

pub mod config;
pub mod cooldown;
pub mod error;
pub mod games;
pub mod ledger;
pub mod service;
pub mod store;
pub mod table;
pub mod validate;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use config::{Config, ConfigError};
pub use error::{EngineError, ValidationError};
pub use store::{Adb, Memory, Store, StoreError};
pub use table::{Receipt, Table};

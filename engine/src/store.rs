//! Storage contract for durable rows.
//!
//! The engine is storage-agnostic: it needs key-value rows, not an engine.
//! [`Memory`] backs tests and single-process deployments; [`Adb`] persists
//! rows through `commonware-storage` by hashing each encoded [`Key`].
//! Backend failures are surfaced as [`StoreError`] rather than degraded to
//! "row absent" — an unreadable ledger must abort the request, not zero it.

use commonware_codec::Encode;
use commonware_cryptography::{
    sha256::{Digest, Sha256},
    Hasher,
};
use commonware_runtime::{Clock, Metrics, Spawner, Storage};
use commonware_storage::{adb::any::variable::Any, translator::Translator};
use std::{collections::HashMap, future::Future};
use tablestakes_types::store::{Key, Value};
use thiserror::Error;
use tracing::warn;

/// Durable backend: an authenticated key-value database over the runtime's
/// storage, keyed by the digest of each encoded [`Key`].
pub type Adb<E, T> = Any<E, Digest, Value, Sha256, T>;

/// The persistence backend failed. Fatal for the current request; the
/// caller decides whether to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage unavailable: {0}")]
pub struct StoreError(pub String);

pub trait Store {
    fn get(&self, key: &Key) -> impl Future<Output = Result<Option<Value>, StoreError>> + Send;
    fn insert(
        &mut self,
        key: Key,
        value: Value,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
    fn delete(&mut self, key: &Key) -> impl Future<Output = Result<(), StoreError>> + Send;
}

impl<E: Spawner + Metrics + Clock + Storage, T: Translator + Send + Sync> Store for Adb<E, T>
where
    T::Key: Send + Sync,
{
    async fn get(&self, key: &Key) -> Result<Option<Value>, StoreError> {
        let key = Sha256::hash(&key.encode());
        self.get(&key).await.map_err(|e| {
            warn!("database error during get operation: {:?}", e);
            StoreError(e.to_string())
        })
    }

    async fn insert(&mut self, key: Key, value: Value) -> Result<(), StoreError> {
        let key = Sha256::hash(&key.encode());
        self.update(key, value).await.map_err(|e| {
            warn!("database error during insert operation: {:?}", e);
            StoreError(e.to_string())
        })
    }

    async fn delete(&mut self, key: &Key) -> Result<(), StoreError> {
        let key = Sha256::hash(&key.encode());
        self.delete(key).await.map(|_| ()).map_err(|e| {
            warn!("database error during delete operation: {:?}", e);
            StoreError(e.to_string())
        })
    }
}

/// In-memory backend.
#[derive(Default)]
pub struct Memory {
    rows: HashMap<Key, Value>,
}

impl Store for Memory {
    async fn get(&self, key: &Key) -> Result<Option<Value>, StoreError> {
        Ok(self.rows.get(key).cloned())
    }

    async fn insert(&mut self, key: Key, value: Value) -> Result<(), StoreError> {
        self.rows.insert(key, value);
        Ok(())
    }

    async fn delete(&mut self, key: &Key) -> Result<(), StoreError> {
        self.rows.remove(key);
        Ok(())
    }
}

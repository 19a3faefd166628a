//! Sharded, concurrency-safe map from identity to its live OTP record
//!
//! Identities are hashed onto a fixed set of independently locked shards.
//! Every operation holds exactly one shard lock for its whole duration and
//! never across an await point, so the operations are atomic per identity
//! and a slow caller only ever contends with identities in the same shard.

use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::OtpRecord;

/// Default number of shards
pub const DEFAULT_SHARD_COUNT: usize = otp_shared::config::otp::DEFAULT_STORE_SHARDS;

type Shard = HashMap<String, OtpRecord>;

/// In-memory OTP record store
pub struct CodeStore {
    shards: Vec<Mutex<Shard>>,
    hasher: RandomState,
}

impl CodeStore {
    /// Create a store with the default shard count
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARD_COUNT)
    }

    /// Create a store with `shard_count` shards (at least one)
    pub fn with_shards(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        Self {
            shards: (0..shard_count).map(|_| Mutex::new(HashMap::new())).collect(),
            hasher: RandomState::new(),
        }
    }

    /// Number of shards
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Return the current record for `identity`, if any
    pub fn get(&self, identity: &str) -> Option<OtpRecord> {
        self.lock_shard(identity).get(identity).cloned()
    }

    /// Insert or replace the record for `identity`
    pub fn put(&self, identity: &str, record: OtpRecord) {
        self.lock_shard(identity).insert(identity.to_string(), record);
    }

    /// Remove the record for `identity`; no-op if absent
    pub fn delete(&self, identity: &str) {
        self.lock_shard(identity).remove(identity);
    }

    /// Run `f` against the slot for `identity` while holding its shard lock
    ///
    /// `f` sees `None` when no record exists. Whatever the slot holds when `f`
    /// returns is written back: `Some` stores the record, `None` removes it.
    /// This is the check-and-set primitive the manager builds on.
    pub fn update<R, F>(&self, identity: &str, f: F) -> R
    where
        F: FnOnce(&mut Option<OtpRecord>) -> R,
    {
        let mut shard = self.lock_shard(identity);
        let mut slot = shard.remove(identity);
        let result = f(&mut slot);
        if let Some(record) = slot {
            shard.insert(identity.to_string(), record);
        }
        result
    }

    /// Number of live records across all shards
    pub fn len(&self) -> usize {
        self.shards
            .iter()
            .map(|shard| shard.lock().unwrap_or_else(PoisonError::into_inner).len())
            .sum()
    }

    /// Whether no records are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock_shard(&self, identity: &str) -> MutexGuard<'_, Shard> {
        let index = (self.hasher.hash_one(identity) % self.shards.len() as u64) as usize;
        // A panic while holding the lock cannot leave a record half-written,
        // so a poisoned shard is still consistent.
        self.shards[index]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CodeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CodeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeStore")
            .field("shards", &self.shards.len())
            .field("records", &self.len())
            .finish()
    }
}

//! In-memory record store.
//!
//! A thread-safe store that keeps records keyed by id behind an
//! `RwLock`. Intended for tests, examples, and scenarios where
//! persistence is not required.
//!
//! The store is cheaply cloneable; clones share the same underlying
//! map, so a caller can hand one clone to a directory and keep another
//! for inspection.
//!
//! # Example Usage
//!
//! ```rust
//! use user_directory::store::{InMemoryStore, RecordStore};
//! use user_directory::UserRecord;
//!
//! let store = InMemoryStore::new();
//! store.put(UserRecord::new(1, "Ivan", "123"));
//! assert!(store.contains(1));
//!
//! let was_deleted = store.delete(1);
//! assert!(was_deleted);
//! assert!(store.is_empty());
//! ```

use crate::record::{UserId, UserRecord};
use crate::store::RecordStore;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe in-memory store keyed by record id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Arc<RwLock<HashMap<UserId, UserRecord>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    // A poisoned lock still guards a coherent map; recover the guard.
    fn read_guard(&self) -> RwLockReadGuard<'_, HashMap<UserId, UserRecord>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, HashMap<UserId, UserRecord>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a record under its id, replacing any record already held
    /// under the same id.
    ///
    /// Returns the displaced record, if any.
    pub fn put(&self, record: UserRecord) -> Option<UserRecord> {
        self.write_guard().insert(record.id(), record)
    }

    /// Retrieve a copy of the record with the given id.
    pub fn get(&self, id: UserId) -> Option<UserRecord> {
        self.read_guard().get(&id).cloned()
    }

    /// Check whether a record with the given id is held.
    pub fn contains(&self, id: UserId) -> bool {
        self.read_guard().contains_key(&id)
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    /// Check whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    /// Remove all records.
    pub fn clear(&self) {
        self.write_guard().clear();
    }
}

impl RecordStore for InMemoryStore {
    fn delete(&self, id: UserId) -> bool {
        self.write_guard().remove(&id).is_some()
    }
}

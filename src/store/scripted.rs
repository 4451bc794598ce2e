//! Canned-answer store wrapper.
//!
//! [`ScriptedStore`] wraps a real store and overrides deletion results
//! for selected ids. Register an outcome per id and every other id
//! falls through to the wrapped store. This is the crate's built-in
//! test double for exercising delete delegation without a live
//! backend.

use crate::record::UserId;
use crate::store::RecordStore;
use std::collections::HashMap;

/// Store wrapper answering deletions from a canned table.
///
/// # Example Usage
///
/// ```rust
/// use user_directory::store::{InMemoryStore, RecordStore, ScriptedStore};
///
/// let store = ScriptedStore::new(InMemoryStore::new()).answer(1, true);
///
/// // Canned answer, regardless of what the inner store holds.
/// assert!(store.delete(1));
/// // Unregistered ids delegate to the inner store.
/// assert!(!store.delete(2));
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedStore<S> {
    answers: HashMap<UserId, bool>,
    inner: S,
}

impl<S: RecordStore> ScriptedStore<S> {
    /// Wrap a store with an empty answer table.
    pub fn new(inner: S) -> Self {
        Self {
            answers: HashMap::new(),
            inner,
        }
    }

    /// Register a canned outcome for the given id.
    pub fn answer(mut self, id: UserId, outcome: bool) -> Self {
        self.answers.insert(id, outcome);
        self
    }
}

impl<S: RecordStore> RecordStore for ScriptedStore<S> {
    fn delete(&self, id: UserId) -> bool {
        match self.answers.get(&id) {
            Some(&outcome) => outcome,
            None => self.inner.delete(id),
        }
    }
}

//! The user directory service.
//!
//! [`UserDirectory`] owns an ordered sequence of user records and
//! composes with an optional [`RecordStore`] for deletion. Reads and
//! writes go to the in-memory sequence; deletion is delegated to the
//! store and never touches the sequence.

use crate::error::{DirectoryError, DirectoryResult};
use crate::record::{UserId, UserRecord};
use crate::store::RecordStore;
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::fmt;

/// In-memory collection of user records with credential lookup and
/// delegated deletion.
///
/// The sequence preserves insertion order and accepts duplicate ids.
/// A directory may be constructed with or without a record store;
/// without one, [`delete_by_id`](Self::delete_by_id) fails with
/// [`DirectoryError::StoreUnavailable`].
///
/// The directory provides no synchronization. Callers sharing one
/// across threads must add their own locking.
///
/// # Example Usage
///
/// ```rust
/// use user_directory::{UserDirectory, UserRecord};
/// use user_directory::store::InMemoryStore;
///
/// let mut directory = UserDirectory::with_store(InMemoryStore::new());
/// directory.add(UserRecord::new(1, "Ivan", "123"));
///
/// let found = directory.authenticate(Some("Ivan"), Some("123"))?;
/// assert!(found.is_some());
/// # Ok::<(), user_directory::DirectoryError>(())
/// ```
pub struct UserDirectory {
    records: Vec<UserRecord>,
    store: Option<Box<dyn RecordStore>>,
}

impl UserDirectory {
    /// Create an empty directory with no record store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            store: None,
        }
    }

    /// Create an empty directory that delegates deletion to the given
    /// store.
    pub fn with_store(store: impl RecordStore + 'static) -> Self {
        Self {
            records: Vec::new(),
            store: Some(Box::new(store)),
        }
    }

    /// Start building a directory with seeded records and an optional
    /// store.
    pub fn builder() -> UserDirectoryBuilder {
        UserDirectoryBuilder::new()
    }

    /// All records currently held, in insertion order.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record to the end of the sequence.
    ///
    /// Returns `true`; the directory has no capacity bound. Duplicate
    /// ids are accepted.
    pub fn add(&mut self, record: UserRecord) -> bool {
        debug!("adding record id={}", record.id());
        self.records.push(record);
        true
    }

    /// Append records in the given order, equivalent to repeated
    /// [`add`](Self::add). An empty iterator is a no-op.
    pub fn add_all(&mut self, records: impl IntoIterator<Item = UserRecord>) {
        for record in records {
            self.add(record);
        }
    }

    /// Build a mapping from id to record covering every record held.
    ///
    /// When two records share an id, the one added later wins.
    /// Iteration order of the returned map is unspecified.
    pub fn index_by_id(&self) -> HashMap<UserId, UserRecord> {
        trace!("indexing {} records by id", self.records.len());
        self.records
            .iter()
            .map(|record| (record.id(), record.clone()))
            .collect()
    }

    /// Look up the first record matching the given credentials.
    ///
    /// Both credentials are required; `None` on either side fails with
    /// [`DirectoryError::MissingCredential`]. Matching is exact and
    /// case-sensitive, and the scan stops at the first hit, so records
    /// added earlier shadow later duplicates. Returns `Ok(None)` when
    /// no record matches.
    pub fn authenticate(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> DirectoryResult<Option<&UserRecord>> {
        let Some(username) = username else {
            warn!("authentication attempted without a username");
            return Err(DirectoryError::missing_credential("username"));
        };
        let Some(password) = password else {
            warn!("authentication attempted without a password");
            return Err(DirectoryError::missing_credential("password"));
        };

        trace!("authenticating username={username}");
        Ok(self
            .records
            .iter()
            .find(|record| record.matches_credentials(username, password)))
    }

    /// Delete the record with the given id through the record store.
    ///
    /// Pure pass-through: the store's verdict is returned unchanged and
    /// the in-memory sequence is left as-is, whether or not the id is
    /// present in it. Fails with [`DirectoryError::StoreUnavailable`]
    /// when the directory has no store.
    pub fn delete_by_id(&self, id: UserId) -> DirectoryResult<bool> {
        let Some(store) = &self.store else {
            warn!("delete_by_id({id}) called on a directory without a store");
            return Err(DirectoryError::StoreUnavailable);
        };

        debug!("delegating delete of id={id} to the record store");
        Ok(store.delete(id))
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UserDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDirectory")
            .field("records", &self.records)
            .field("has_store", &self.store.is_some())
            .finish()
    }
}

/// Builder for [`UserDirectory`].
///
/// # Example Usage
///
/// ```rust
/// use user_directory::{UserDirectory, UserRecord};
/// use user_directory::store::InMemoryStore;
///
/// let directory = UserDirectory::builder()
///     .store(InMemoryStore::new())
///     .records([
///         UserRecord::new(1, "Ivan", "123"),
///         UserRecord::new(2, "Petr", "456"),
///     ])
///     .build();
/// assert_eq!(directory.len(), 2);
/// ```
#[derive(Default)]
pub struct UserDirectoryBuilder {
    records: Vec<UserRecord>,
    store: Option<Box<dyn RecordStore>>,
}

impl UserDirectoryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delegate deletion to the given store.
    pub fn store(mut self, store: impl RecordStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Seed the directory with records, preserving their order.
    pub fn records(mut self, records: impl IntoIterator<Item = UserRecord>) -> Self {
        self.records.extend(records);
        self
    }

    /// Build the directory.
    pub fn build(self) -> UserDirectory {
        UserDirectory {
            records: self.records,
            store: self.store,
        }
    }
}

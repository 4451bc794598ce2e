//! Minimal in-process user directory.
//!
//! Holds a transient, ordered collection of user records and supports
//! insertion, bulk insertion, keyed index construction, credential
//! authentication, and deletion delegated to a pluggable
//! [`RecordStore`] backend.
//!
//! # Core Components
//!
//! - [`UserDirectory`] - the in-memory collection service
//! - [`UserRecord`] - immutable user entry (id, username, password)
//! - [`RecordStore`] - persistence capability consulted for deletion
//!
//! # Quick Start
//!
//! ```rust
//! use user_directory::{UserDirectory, UserRecord};
//! use user_directory::store::InMemoryStore;
//!
//! let mut directory = UserDirectory::with_store(InMemoryStore::new());
//! directory.add(UserRecord::new(1, "Ivan", "123"));
//! directory.add(UserRecord::new(2, "Petr", "456"));
//!
//! let ivan = directory.authenticate(Some("Ivan"), Some("123"))?;
//! assert!(ivan.is_some());
//!
//! let by_id = directory.index_by_id();
//! assert_eq!(by_id.len(), 2);
//! # Ok::<(), user_directory::DirectoryError>(())
//! ```
//!
//! Passwords are compared in plaintext and the directory provides no
//! synchronization; hashing and locking are the caller's concern.

pub mod directory;
pub mod error;
pub mod record;
pub mod store;

// Re-export commonly used types for convenience
pub use directory::{UserDirectory, UserDirectoryBuilder};
pub use error::{DirectoryError, DirectoryResult};
pub use record::{UserId, UserRecord};
pub use store::{InMemoryStore, RecordStore, ScriptedStore};

//! Record store abstraction.
//!
//! The directory keeps its own in-memory sequence for reads and
//! delegates deletion to a [`RecordStore`]. The two sides are
//! deliberately decoupled: deleting through the store never updates
//! the directory's sequence.
//!
//! Two implementations ship with the crate:
//!
//! * [`InMemoryStore`] - a real store keyed by record id
//! * [`ScriptedStore`] - a wrapper that answers deletions for selected
//!   ids from a canned table and delegates the rest

pub mod in_memory;
pub mod scripted;

pub use in_memory::InMemoryStore;
pub use scripted::ScriptedStore;

use crate::record::UserId;

/// Persistence capability consulted by the directory for deletion.
///
/// Implementations take `&self` and use interior mutability where they
/// mutate. The trait is object-safe so a test double can stand in for
/// a real backend.
pub trait RecordStore {
    /// Delete the record with the given id.
    ///
    /// Returns `true` if a record was removed, `false` if no record
    /// with that id existed.
    fn delete(&self, id: UserId) -> bool;
}

//! Record accessor trait for todo collections.
//!
//! [`TodoStore`] is the contract a collection backend fulfils: conjunctive
//! `find`, lookup by id, and insertion. The trait is sync-only; every
//! operation is individually atomic and no operation spans another.
//!
//! # Example
//!
//! ```rust
//! use todo_seeker::Query;
//! use todo_store::{InMemoryStore, NewTodo, TodoStore};
//!
//! let store = InMemoryStore::new();
//! let id = store.insert(NewTodo::new("Chris", true, "UMM", "pokemon")).unwrap();
//!
//! let done = store.find(&Query::new().and_eq("status", true)).unwrap();
//! assert_eq!(done.len(), 1);
//! assert_eq!(store.get(&id).unwrap().unwrap().owner, "Chris");
//! ```

use todo_seeker::Query;

use crate::error::{Result, StoreError};
use crate::record::{NewTodo, Todo, TodoId};

/// Trait for todo storage backends.
///
/// # Design Notes
///
/// - **Two-stage ID resolution**: `parse_id` validates the id shape before
///   `get` fetches the record, so a malformed id ([`StoreError::InvalidId`])
///   is never confused with an absent one (`Ok(None)`).
///
/// - **Stable ordering**: `find` returns records in insertion order, so the
///   same query against the same store state yields the same sequence.
///
/// - **No retries**: backend failures are returned unchanged.
pub trait TodoStore: Send + Sync {
    /// Returns every record satisfying all clauses of `query`.
    ///
    /// An empty query returns the whole collection. A malformed pattern is
    /// reported as [`StoreError::Query`] once it is evaluated.
    fn find(&self, query: &Query) -> Result<Vec<Todo>>;

    /// Retrieves a record by id, returning `None` if no record carries it.
    fn get(&self, id: &TodoId) -> Result<Option<Todo>>;

    /// Stores a new record under a freshly assigned id and returns the id.
    fn insert(&self, todo: NewTodo) -> Result<TodoId>;

    /// Parses an id string into a [`TodoId`].
    fn parse_id(&self, raw: &str) -> Result<TodoId> {
        raw.parse()
    }

    /// Parses `raw` and fetches the record it names.
    ///
    /// Malformed ids are an error; well-formed but absent ids are `Ok(None)`.
    fn lookup(&self, raw: &str) -> Result<Option<Todo>> {
        let id = self.parse_id(raw)?;
        self.get(&id)
    }

    /// Retrieves a record by id, returning an error if not found.
    fn resolve(&self, id: &TodoId) -> Result<Todo> {
        self.get(id)?.ok_or(StoreError::NotFound(*id))
    }

    /// Returns the whole collection.
    fn all(&self) -> Result<Vec<Todo>> {
        self.find(&Query::new())
    }
}

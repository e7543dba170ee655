//! Record access for todo collections.
//!
//! `todo-store` defines the [`TodoStore`] contract (find / get / insert) and
//! two backends:
//!
//! - [`InMemoryStore`] - a collection held in memory
//! - [`JsonFileStore`] - a collection persisted as a JSON array file
//!
//! Queries are [`todo_seeker::Query`] values; records expose their fields to
//! the query engine through [`todo_seeker::Queryable`].
//!
//! # Error Model
//!
//! | Situation | Result |
//! |-----------|--------|
//! | Well-formed id, no such record | `Ok(None)` from `get` / `lookup` |
//! | Malformed id | [`StoreError::InvalidId`] |
//! | Malformed pattern in a query | [`StoreError::Query`] |
//! | Backend failure | [`StoreError::Io`], [`StoreError::Serialization`], [`StoreError::Unavailable`] |

mod error;
mod json_file;
mod memory;
mod record;
mod store;

pub use error::{Result, StoreError};
pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use record::{parse_status_word, NewTodo, Todo, TodoId};
pub use store::TodoStore;

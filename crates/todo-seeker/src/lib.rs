//! Clause-based query engine for todo record collections.
//!
//! A [`Query`] is a conjunction of [`Clause`]s. Each clause names a field, an
//! [`Op`] and a [`ClauseValue`]; records expose their fields through an
//! accessor function (or the [`Queryable`] trait) returning [`Value`]s.
//!
//! # Quick Start
//!
//! ```rust
//! use todo_seeker::{Query, Value};
//!
//! struct Todo {
//!     owner: String,
//!     status: bool,
//! }
//!
//! fn accessor<'a>(todo: &'a Todo, field: &str) -> Value<'a> {
//!     match field {
//!         "owner" => Value::Text(&todo.owner),
//!         "status" => Value::Bool(todo.status),
//!         _ => Value::Missing,
//!     }
//! }
//!
//! let todos = vec![
//!     Todo { owner: "Chris".into(), status: true },
//!     Todo { owner: "Pat".into(), status: false },
//!     Todo { owner: "Jamie".into(), status: true },
//! ];
//!
//! let query = Query::new()
//!     .and_eq("status", true)
//!     .and_regex("owner", "^C")
//!     .build();
//!
//! let results = query.filter(&todos, accessor).unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].owner, "Chris");
//! ```
//!
//! # Query Semantics
//!
//! ```text
//! match = clause_1 ∧ clause_2 ∧ ... ∧ clause_n
//! ```
//!
//! An empty query matches every item. Because the clauses are only ever
//! AND-ed, their order never changes which items match.
//!
//! # Patterns
//!
//! Regex clauses carry a [`Pattern`]: the raw source string plus matching
//! options. The pattern is compiled the first time it is evaluated, so a
//! malformed pattern is reported by [`Query::matches`] / [`Query::filter`]
//! as [`SeekerError::InvalidPattern`], never while the query is built.
//! Matching is unanchored: the pattern may be found anywhere in the field.
//!
//! | Type | Operators |
//! |------|-----------|
//! | Text | `Eq`, `Regex` |
//! | Bool | `Eq` |

mod clause;
mod error;
mod op;
mod pattern;
mod query;
mod traits;
mod value;

// Re-export public API
pub use clause::{Clause, ClauseValue};
pub use error::{Result, SeekerError};
pub use op::Op;
pub use pattern::Pattern;
pub use query::Query;
pub use traits::Queryable;
pub use value::Value;

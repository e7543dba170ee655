//! Filtered access to a todo collection.
//!
//! The core of this crate is the [`filter`] module: it turns caller-supplied
//! parameters (`status`, `owner`, `body`, `category`) into a conjunctive
//! [`todo_seeker::Query`] that any [`todo_store::TodoStore`] can evaluate.
//!
//! ```rust
//! use todo_store::{InMemoryStore, NewTodo, TodoStore};
//! use todos::filter::{self, FilterRequest};
//!
//! let store = InMemoryStore::seeded(vec![
//!     NewTodo::new("Chris", true, "UMM", "pokemon"),
//!     NewTodo::new("Pat", false, "IBM", "groceries"),
//! ])
//! .unwrap();
//!
//! let request = FilterRequest::new().with("category", "[P, G]");
//! let found = store.find(&filter::build(&request)).unwrap();
//! assert_eq!(found.len(), 2);
//! ```
//!
//! The remaining modules make up the `todos` binary: layered [`config`],
//! [`output`] rendering and the [`cli`] commands.

pub mod cli;
pub mod config;
pub mod filter;
pub mod output;

pub use config::Config;
pub use filter::{BuilderOptions, FilterBuilder, FilterError, FilterField, FilterRequest};
pub use output::OutputMode;

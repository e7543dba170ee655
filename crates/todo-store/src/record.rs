//! Todo records and their identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use todo_seeker::{Queryable, Value};
use uuid::Uuid;

use crate::error::{Result, StoreError};

/// Store-assigned identifier of a todo.
///
/// Ids are random v4 UUIDs, rendered in hyphenated lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        TodoId(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for TodoId {
    fn from(uuid: Uuid) -> Self {
        TodoId(uuid)
    }
}

impl FromStr for TodoId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(TodoId)
            .map_err(|e| StoreError::InvalidId {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A stored todo document.
///
/// Serialized with the document-store key `_id` for the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: TodoId,
    pub owner: String,
    pub status: bool,
    pub body: String,
    pub category: String,
}

impl Todo {
    pub const OWNER: &'static str = "owner";
    pub const STATUS: &'static str = "status";
    pub const BODY: &'static str = "body";
    pub const CATEGORY: &'static str = "category";
}

impl Queryable for Todo {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            Todo::OWNER => Value::Text(&self.owner),
            Todo::STATUS => Value::Bool(self.status),
            Todo::BODY => Value::Text(&self.body),
            Todo::CATEGORY => Value::Text(&self.category),
            _ => Value::Missing,
        }
    }
}

/// The caller-supplied fields of a todo that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub owner: String,
    pub status: bool,
    pub body: String,
    pub category: String,
}

impl NewTodo {
    /// Creates a new todo from typed fields.
    pub fn new(
        owner: impl Into<String>,
        status: bool,
        body: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        NewTodo {
            owner: owner.into(),
            status,
            body: body.into(),
            category: category.into(),
        }
    }

    /// Creates a new todo from raw strings, parsing the status word.
    ///
    /// See [`parse_status_word`] for the accepted status spellings.
    pub fn from_raw(owner: &str, status: &str, body: &str, category: &str) -> Result<Self> {
        Ok(NewTodo::new(owner, parse_status_word(status)?, body, category))
    }

    /// Attaches an id, producing the stored form.
    pub fn with_id(self, id: TodoId) -> Todo {
        Todo {
            id,
            owner: self.owner,
            status: self.status,
            body: self.body,
            category: self.category,
        }
    }
}

/// Parses a status word supplied on insertion.
///
/// `true` and `complete` mean done, `false` and `incomplete` mean not done
/// (ASCII case-insensitive, surrounding whitespace ignored). Anything else is
/// rejected.
pub fn parse_status_word(raw: &str) -> Result<bool> {
    let word = raw.trim();
    if word.eq_ignore_ascii_case("true") || word.eq_ignore_ascii_case("complete") {
        Ok(true)
    } else if word.eq_ignore_ascii_case("false") || word.eq_ignore_ascii_case("incomplete") {
        Ok(false)
    } else {
        Err(StoreError::invalid_record(format!(
            "status must be one of true, false, complete, incomplete (got '{}')",
            raw
        )))
    }
}

//! Field values as seen by the query engine.

/// A record field, borrowed for the duration of a comparison.
///
/// Accessors map field names to values; names a record does not expose
/// (including its identifier) map to [`Value::Missing`], which no clause
/// matches.
///
/// ```
/// use todo_seeker::Value;
///
/// struct Todo {
///     owner: String,
///     status: bool,
/// }
///
/// fn accessor<'a>(todo: &'a Todo, field: &str) -> Value<'a> {
///     match field {
///         "owner" => Value::Text(&todo.owner),
///         "status" => Value::Bool(todo.status),
///         _ => Value::Missing,
///     }
/// }
///
/// let todo = Todo { owner: "Pat".into(), status: false };
/// assert_eq!(accessor(&todo, "owner").as_text(), Some("Pat"));
/// assert!(accessor(&todo, "_id").is_missing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Text(&'a str),
    Bool(bool),
    Missing,
}

impl<'a> Value<'a> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Missing, Into::into)
    }
}

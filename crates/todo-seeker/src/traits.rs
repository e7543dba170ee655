//! Records that expose named fields to queries.

use crate::value::Value;

/// A record whose fields can be read by name.
///
/// Implementing this gives a ready-made accessor for [`Query`] methods:
///
/// ```
/// use todo_seeker::{Query, Queryable, Value};
///
/// struct Todo {
///     owner: String,
///     status: bool,
/// }
///
/// impl Queryable for Todo {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "owner" => Value::Text(&self.owner),
///             "status" => Value::Bool(self.status),
///             _ => Value::Missing,
///         }
///     }
/// }
///
/// let todos = vec![
///     Todo { owner: "Chris".into(), status: true },
///     Todo { owner: "Pat".into(), status: false },
/// ];
///
/// let done = Query::new().and_eq("status", true);
/// assert_eq!(done.count(&todos, Todo::accessor).unwrap(), 1);
/// ```
///
/// [`Query`]: crate::Query
pub trait Queryable {
    /// Returns the named field, or [`Value::Missing`].
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Accessor function form of [`field_value`](Queryable::field_value).
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tag(&'static str);

    impl Queryable for Tag {
        fn field_value(&self, field: &str) -> Value<'_> {
            (field == "tag").then_some(self.0).into()
        }
    }

    #[test]
    fn accessor_delegates() {
        let tag = Tag("salad");
        assert_eq!(Tag::accessor(&tag, "tag"), Value::Text("salad"));
        assert_eq!(Tag::accessor(&tag, "owner"), Value::Missing);
    }
}

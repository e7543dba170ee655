//! Clause types for query predicates.
//!
//! A [`Clause`] represents a single filter predicate: a field name,
//! an operator, and a comparison value.

use crate::error::Result;
use crate::op::Op;
use crate::pattern::Pattern;
use crate::value::Value;

/// A single filter predicate.
///
/// # Example
///
/// ```
/// use todo_seeker::{Clause, Op, Value};
///
/// let clause = Clause::new("status", Op::Eq, true);
/// assert!(clause.matches(&Value::Bool(true)).unwrap());
///
/// let clause = Clause::regex("category", "[S]");
/// assert!(clause.matches(&Value::Text("Salad")).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// The field name to compare.
    pub field: String,
    /// The comparison operator.
    pub op: Op,
    /// The value to compare against.
    pub value: ClauseValue,
}

impl Clause {
    /// Creates a new clause.
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<ClauseValue>) -> Self {
        Clause {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Creates an equality clause.
    pub fn equals(field: impl Into<String>, value: impl Into<ClauseValue>) -> Self {
        Clause::new(field, Op::Eq, value)
    }

    /// Creates a regex clause.
    pub fn regex(field: impl Into<String>, pattern: impl Into<Pattern>) -> Self {
        Clause::new(field, Op::Regex, ClauseValue::Pattern(pattern.into()))
    }

    /// Evaluates this clause against a field value.
    ///
    /// Returns `Ok(false)` if the value doesn't match or the types are
    /// incompatible. Returns an error only when a pattern fails to compile.
    pub fn matches(&self, field_value: &Value<'_>) -> Result<bool> {
        if !self.op.applies_to(field_value) {
            return Ok(false);
        }
        match (&self.value, field_value) {
            (ClauseValue::Text(expected), Value::Text(s)) if self.op == Op::Eq => {
                Ok(*s == expected.as_str())
            }
            (ClauseValue::Bool(expected), Value::Bool(b)) => Ok(b == expected),
            (ClauseValue::Pattern(pattern), Value::Text(s)) if self.op == Op::Regex => {
                pattern.is_match(s)
            }
            _ => Ok(false),
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, self.value)
    }
}

/// Owned value for storage in a clause.
///
/// Unlike [`Value`], which borrows from the source record, `ClauseValue`
/// owns its data so it can be stored in query definitions.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseValue {
    /// Exact text.
    Text(String),
    /// Boolean value.
    Bool(bool),
    /// Uncompiled regular expression.
    Pattern(Pattern),
}

impl std::fmt::Display for ClauseValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClauseValue::Text(s) => write!(f, "{:?}", s),
            ClauseValue::Bool(b) => write!(f, "{}", b),
            ClauseValue::Pattern(p) => write!(f, "{}", p),
        }
    }
}

// Conversions from common types to ClauseValue

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::Text(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::Text(s.to_string())
    }
}

impl From<bool> for ClauseValue {
    fn from(b: bool) -> Self {
        ClauseValue::Bool(b)
    }
}

impl From<Pattern> for ClauseValue {
    fn from(p: Pattern) -> Self {
        ClauseValue::Pattern(p)
    }
}

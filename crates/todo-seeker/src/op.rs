//! Clause operators.

use std::fmt;

use crate::value::Value;

/// How a clause compares its value with a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Exact equality of text or booleans.
    Eq,
    /// Unanchored pattern search over text.
    Regex,
}

impl Op {
    /// Returns `true` if a field holding `value` can be compared with this
    /// operator at all. Missing fields are never comparable.
    pub fn applies_to(self, value: &Value<'_>) -> bool {
        match (self, value) {
            (_, Value::Missing) => false,
            (Op::Eq, _) => true,
            (Op::Regex, Value::Text(_)) => true,
            (Op::Regex, Value::Bool(_)) => false,
        }
    }

    /// Returns the operator name used in query descriptions.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Regex => "regex",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applicability() {
        assert!(Op::Eq.applies_to(&Value::Text("Sam")));
        assert!(Op::Eq.applies_to(&Value::Bool(false)));
        assert!(Op::Regex.applies_to(&Value::Text("Sam")));
        assert!(!Op::Regex.applies_to(&Value::Bool(true)));
        assert!(!Op::Eq.applies_to(&Value::Missing));
        assert!(!Op::Regex.applies_to(&Value::Missing));
    }

    #[test]
    fn display_names() {
        assert_eq!(Op::Eq.to_string(), "eq");
        assert_eq!(Op::Regex.to_string(), "regex");
    }
}

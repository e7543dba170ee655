//! Query builder and executor.
//!
//! The [`Query`] struct provides a fluent builder API for constructing
//! conjunctive queries and methods for executing them against collections.

use crate::clause::{Clause, ClauseValue};
use crate::error::Result;
use crate::op::Op;
use crate::pattern::Pattern;
use crate::value::Value;

/// A conjunction of clauses.
///
/// An item matches when every clause matches; an empty query matches
/// everything.
///
/// # Example
///
/// ```
/// use todo_seeker::{Pattern, Query};
///
/// let query = Query::new()
///     .and_eq("status", true)
///     .and_regex("category", Pattern::new("[S]").case_insensitive(true))
///     .build();
///
/// assert_eq!(query.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    clauses: Vec<Clause>,
}

impl Query {
    /// Creates a new empty query.
    ///
    /// An empty query matches all items.
    pub fn new() -> Self {
        Query::default()
    }

    // ========================================================================
    // Clause builders
    // ========================================================================

    /// Adds a clause.
    pub fn and(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds an already-constructed clause.
    pub fn and_clause(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Adds an equality clause.
    pub fn and_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Eq, value)
    }

    /// Adds a regex clause.
    ///
    /// The pattern is not compiled here; an invalid pattern is reported when
    /// the query is executed.
    pub fn and_regex(self, field: &str, pattern: impl Into<Pattern>) -> Self {
        self.and(field, Op::Regex, ClauseValue::Pattern(pattern.into()))
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Finalizes the query.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the clauses in the order they were added.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Returns the clause for a field, if there is one.
    pub fn clause_for(&self, field: &str) -> Option<&Clause> {
        self.clauses.iter().find(|clause| clause.field == field)
    }

    /// Returns the number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Returns `true` if this query has no clauses (matches everything).
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single item matches this query.
    ///
    /// Evaluation stops at the first clause that does not match, so a
    /// malformed pattern in a later clause is only reported for items that
    /// reach it.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> Result<bool>
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        for clause in &self.clauses {
            if !clause.matches(&accessor(item, &clause.field))? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Filters a slice, returning references to matching items in their
    /// original order.
    pub fn filter<'a, T, F>(&self, items: &'a [T], accessor: F) -> Result<Vec<&'a T>>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let mut results = Vec::new();
        for item in items {
            if self.matches(item, &accessor)? {
                results.push(item);
            }
        }
        Ok(results)
    }

    /// Filters and clones matching items.
    pub fn filter_cloned<T, F>(&self, items: &[T], accessor: F) -> Result<Vec<T>>
    where
        T: Clone,
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        Ok(self
            .filter(items, accessor)?
            .into_iter()
            .cloned()
            .collect())
    }

    /// Counts the number of matching items.
    pub fn count<T, F>(&self, items: &[T], accessor: F) -> Result<usize>
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        Ok(self.filter(items, accessor)?.len())
    }

    /// Finds the first matching item.
    pub fn find<'a, T, F>(&self, items: &'a [T], accessor: F) -> Result<Option<&'a T>>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        for item in items {
            if self.matches(item, &accessor)? {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.clauses.is_empty() {
            return write!(f, "*");
        }
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

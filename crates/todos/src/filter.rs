//! Query filter builder.
//!
//! Turns a [`FilterRequest`] (parameter name → raw string values, as decoded
//! from a query string) into a single conjunctive [`Query`]:
//!
//! | Parameter | Clause | Semantics |
//! |-----------|--------|-----------|
//! | `status` | exact boolean | `"true"` (any ASCII case) → `true`, anything else → `false` |
//! | `owner` | pattern | unanchored regex found anywhere in `owner` |
//! | `body` | pattern | unanchored regex found anywhere in `body` |
//! | `category` | pattern | unanchored regex found anywhere in `category` |
//!
//! Absent parameters add no clause, unrecognized names are ignored, and only
//! the first value of a repeated parameter is used. Patterns are passed
//! through as-is; a malformed one fails when the store evaluates the query,
//! never here.
//!
//! Clauses are emitted in the fixed order of the field table, so the same
//! request always yields the same query regardless of how its parameters
//! were collected.

use std::collections::HashMap;

use thiserror::Error;
use todo_seeker::{Clause, Pattern, Query};
use todo_store::Todo;

use crate::config::FilterConfig;

/// Errors from decoding filter parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A `name=value` pair without the `=`.
    #[error("filter '{0}' must have the form name=value")]
    MalformedPair(String),
}

// ============================================================================
// Request
// ============================================================================

/// Caller-supplied filter parameters: each name maps to one or more raw values.
///
/// A name mapped to an empty value list is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRequest {
    params: HashMap<String, Vec<String>>,
}

impl FilterRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value for `name`, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Appends a value for `name`.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.entry(name.into()).or_default().push(value.into());
    }

    /// Parses a `name=value` pair and appends it.
    ///
    /// Only the first `=` separates; the value may itself contain `=`.
    pub fn push_pair(&mut self, pair: &str) -> Result<(), FilterError> {
        let (name, value) = parse_pair(pair)?;
        self.push(name, value);
        Ok(())
    }

    /// Returns the first value supplied for `name`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.values(name).first().map(String::as_str)
    }

    /// Returns every value supplied for `name`.
    pub fn values(&self, name: &str) -> &[String] {
        self.params.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the parameter names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Returns `true` if no parameters were supplied.
    pub fn is_empty(&self) -> bool {
        self.params.values().all(Vec::is_empty)
    }
}

impl<K, V> FromIterator<(K, V)> for FilterRequest
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut request = FilterRequest::new();
        for (name, value) in iter {
            request.push(name, value);
        }
        request
    }
}

impl From<HashMap<String, Vec<String>>> for FilterRequest {
    fn from(params: HashMap<String, Vec<String>>) -> Self {
        FilterRequest { params }
    }
}

/// Splits a `name=value` pair at the first `=`.
pub fn parse_pair(pair: &str) -> Result<(String, String), FilterError> {
    match pair.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(FilterError::MalformedPair(pair.to_string())),
    }
}

// ============================================================================
// Field table
// ============================================================================

/// A recognized filter parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Owner,
    Status,
    Body,
    Category,
}

/// How a parameter's raw value becomes a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    /// The field must equal the parsed boolean.
    ExactBoolean,
    /// The raw value is an unanchored pattern searched for in the field.
    Substring,
}

type ClauseParser = fn(&'static str, &str, &BuilderOptions) -> Clause;

struct FieldRule {
    field: FilterField,
    kind: ClauseKind,
    parse: ClauseParser,
}

// Clause emission order.
const FIELD_RULES: [FieldRule; 4] = [
    FieldRule {
        field: FilterField::Status,
        kind: ClauseKind::ExactBoolean,
        parse: boolean_clause,
    },
    FieldRule {
        field: FilterField::Category,
        kind: ClauseKind::Substring,
        parse: pattern_clause,
    },
    FieldRule {
        field: FilterField::Owner,
        kind: ClauseKind::Substring,
        parse: pattern_clause,
    },
    FieldRule {
        field: FilterField::Body,
        kind: ClauseKind::Substring,
        parse: pattern_clause,
    },
];

impl FilterField {
    /// All recognized fields, in clause emission order.
    pub const ALL: [FilterField; 4] = [
        FilterField::Status,
        FilterField::Category,
        FilterField::Owner,
        FilterField::Body,
    ];

    /// Returns the parameter (and record field) name.
    pub fn name(self) -> &'static str {
        match self {
            FilterField::Owner => Todo::OWNER,
            FilterField::Status => Todo::STATUS,
            FilterField::Body => Todo::BODY,
            FilterField::Category => Todo::CATEGORY,
        }
    }

    /// Looks up a field by parameter name (exact, case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        FilterField::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Returns how this field's value is matched.
    pub fn kind(self) -> ClauseKind {
        rule_for(self).kind
    }
}

fn rule_for(field: FilterField) -> &'static FieldRule {
    // FIELD_RULES covers every variant
    &FIELD_RULES[FilterField::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or_default()]
}

/// Parses a raw filter value as a boolean.
///
/// Only `"true"` (ASCII case-insensitive) is `true`; every other string,
/// including `"yes"` and `" true"`, is `false`.
pub fn parse_filter_bool(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

fn boolean_clause(field: &'static str, raw: &str, _options: &BuilderOptions) -> Clause {
    Clause::equals(field, parse_filter_bool(raw))
}

fn pattern_clause(field: &'static str, raw: &str, options: &BuilderOptions) -> Clause {
    Clause::regex(
        field,
        Pattern::new(raw).case_insensitive(options.case_insensitive),
    )
}

// ============================================================================
// Builder
// ============================================================================

/// Options applied to every clause the builder emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderOptions {
    /// Whether pattern clauses ignore case.
    pub case_insensitive: bool,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        BuilderOptions {
            case_insensitive: true,
        }
    }
}

impl From<&FilterConfig> for BuilderOptions {
    fn from(config: &FilterConfig) -> Self {
        BuilderOptions {
            case_insensitive: config.case_insensitive,
        }
    }
}

/// Builds conjunctive queries from filter requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterBuilder {
    options: BuilderOptions,
}

impl FilterBuilder {
    /// Creates a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with the given options.
    pub fn with_options(options: BuilderOptions) -> Self {
        FilterBuilder { options }
    }

    /// Returns the builder's options.
    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    /// Builds the query for `request`. Never fails and performs no I/O.
    pub fn build(&self, request: &FilterRequest) -> Query {
        for name in request.names() {
            if FilterField::from_name(name).is_none() {
                tracing::debug!(parameter = name, "ignoring unrecognized filter parameter");
            }
        }

        let query = FIELD_RULES
            .iter()
            .filter_map(|rule| {
                let name = rule.field.name();
                let values = request.values(name);
                let raw = values.first()?;
                if values.len() > 1 {
                    tracing::debug!(
                        parameter = name,
                        ignored = values.len() - 1,
                        "using first value of repeated filter parameter"
                    );
                }
                Some((rule.parse)(name, raw, &self.options))
            })
            .fold(Query::new(), Query::and_clause);

        tracing::debug!(query = %query, "built filter query");
        query
    }
}

/// Builds the query for `request` with default options.
pub fn build(request: &FilterRequest) -> Query {
    FilterBuilder::new().build(request)
}

//! Parameterized predicates contributed to the host's order query.

use serde::{Deserialize, Serialize};

/// A value bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Int(i64),
    Float(f64),
    Text(String),
}

/// An opaque boolean fragment combined with other filters by the host.
///
/// Parameters are carried out-of-band and bound to `?` placeholders by the
/// storage engine; user input is never concatenated into the SQL text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    sql: String,
    params: Vec<SqlValue>,
}

impl Predicate {
    /// Build a fragment with its bound parameters.
    pub fn new(sql: impl Into<String>, params: Vec<SqlValue>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// A fragment with no parameters, e.g. the host's default clause.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::new(sql, Vec::new())
    }

    /// The SQL text, with `?` placeholders for every parameter.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bound parameters in placeholder order.
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }
}

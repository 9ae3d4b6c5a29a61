//! Raw SQL fragments handed to an external query builder.

use std::fmt;

use serde::Serialize;

/// An opaque, pre-rendered SQL fragment such as `excluded.email` or `values(email)`.
///
/// The fragment is inserted verbatim by whatever builder renders the final
/// statement; it carries no bind parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RawSql(String);

impl RawSql {
    /// Wrap a SQL string.
    pub fn new(sql: impl Into<String>) -> Self {
        Self(sql.into())
    }

    /// The SQL text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the fragment and return its SQL text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RawSql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RawSql {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RawSql> for String {
    fn from(sql: RawSql) -> Self {
        sql.0
    }
}

/// Build a [`RawSql`] fragment.
pub fn raw(sql: impl Into<String>) -> RawSql {
    RawSql::new(sql)
}

//! Upsert dialect families.
//!
//! Databases spell "update the conflicting row with the incoming values" in two ways:
//!
//! - [`OnConflict`]: PostgreSQL and SQLite,
//!   `INSERT ... ON CONFLICT (target) DO UPDATE SET col = excluded.col`
//! - [`OnDuplicateKey`]: MySQL and SingleStore,
//!   `INSERT ... ON DUPLICATE KEY UPDATE col = values(col)`
//!
//! Besides the value expression they differ in how an explicit `keep` list
//! interacts with key columns, see [`KeyPolicy`].

use crate::ident::quote_ident;
use crate::sql::RawSql;

/// How key columns and an explicit `keep` list interact when choosing SET columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Primary-key, unique, excluded and target columns never enter the SET
    /// clause, even when listed in `keep`.
    ProtectKeys,
    /// A non-empty `keep` list is used verbatim: kept columns are updated even
    /// when they are keys or excluded. Without `keep`, keys and excluded
    /// columns are skipped.
    KeepOverrides,
}

/// Dialect-specific parts of column selection.
pub trait UpsertDialect {
    /// Returns the name of the dialect family.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character.
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns the key-column policy of this dialect.
    fn key_policy(&self) -> KeyPolicy;

    /// Returns whether statements name their conflict target explicitly.
    fn supports_conflict_target(&self) -> bool;

    /// Expression referencing the incoming row's value for `column`.
    fn incoming_value(&self, column: &str) -> RawSql;
}

/// `ON CONFLICT ... DO UPDATE` (PostgreSQL, SQLite).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnConflict;

impl UpsertDialect for OnConflict {
    fn name(&self) -> &'static str {
        "ON CONFLICT"
    }

    fn key_policy(&self) -> KeyPolicy {
        KeyPolicy::ProtectKeys
    }

    fn supports_conflict_target(&self) -> bool {
        true
    }

    fn incoming_value(&self, column: &str) -> RawSql {
        RawSql::new(format!(
            "excluded.{}",
            quote_ident(column, self.identifier_quote())
        ))
    }
}

/// `ON DUPLICATE KEY UPDATE` (MySQL, SingleStore).
///
/// MySQL lets the update branch rewrite primary-key columns, so a column that is
/// explicitly kept is always updated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnDuplicateKey;

impl UpsertDialect for OnDuplicateKey {
    fn name(&self) -> &'static str {
        "ON DUPLICATE KEY"
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn key_policy(&self) -> KeyPolicy {
        KeyPolicy::KeepOverrides
    }

    fn supports_conflict_target(&self) -> bool {
        false
    }

    fn incoming_value(&self, column: &str) -> RawSql {
        RawSql::new(format!(
            "values({})",
            quote_ident(column, self.identifier_quote())
        ))
    }
}

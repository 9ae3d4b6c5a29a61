//! SET clause column selection.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::dialect::{KeyPolicy, UpsertDialect};
use crate::error::{UpsertError, UpsertResult};
use crate::options::UpsertOptions;
use crate::sql::RawSql;
use crate::table::{Column, Table};

/// Column name -> incoming-value expression for the update branch of an upsert.
///
/// Keys are unique. Iteration follows the order columns were selected in, but
/// equality compares entries as a map.
#[derive(Debug, Clone, Default)]
pub struct UpdateSet {
    entries: Vec<(String, RawSql)>,
}

impl UpdateSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry unless the column is already present.
    ///
    /// Returns `false` when the column was already in the set.
    pub fn insert(&mut self, column: impl Into<String>, expr: RawSql) -> bool {
        let column = column.into();
        if self.contains_key(&column) {
            return false;
        }
        self.entries.push((column, expr));
        true
    }

    pub fn get(&self, column: &str) -> Option<&RawSql> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, expr)| expr)
    }

    pub fn contains_key(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Column names in selection order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawSql)> {
        self.entries.iter().map(|(name, expr)| (name.as_str(), expr))
    }
}

impl PartialEq for UpdateSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, expr)| other.get(name) == Some(expr))
    }
}

impl Eq for UpdateSet {}

impl<K: Into<String>> FromIterator<(K, RawSql)> for UpdateSet {
    fn from_iter<I: IntoIterator<Item = (K, RawSql)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (column, expr) in iter {
            set.insert(column, expr);
        }
        set
    }
}

impl IntoIterator for UpdateSet {
    type Item = (String, RawSql);
    type IntoIter = std::vec::IntoIter<(String, RawSql)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for UpdateSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, expr) in self.iter() {
            map.serialize_entry(name, expr)?;
        }
        map.end()
    }
}

/// Why a candidate column was left out of the SET clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    PrimaryKey,
    Unique,
    Excluded,
    Target,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PrimaryKey => "primary key",
            Self::Unique => "unique",
            Self::Excluded => "excluded",
            Self::Target => "conflict target",
        })
    }
}

/// The outcome for one candidate column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDecision {
    pub column: Column,
    /// `None` when the column is written by the SET clause.
    pub skipped: Option<SkipReason>,
}

impl ColumnDecision {
    pub fn is_included(&self) -> bool {
        self.skipped.is_none()
    }
}

fn skip_reason(
    policy: KeyPolicy,
    column: &Column,
    options: &UpsertOptions,
    explicit_keep: bool,
) -> Option<SkipReason> {
    if policy == KeyPolicy::KeepOverrides && explicit_keep {
        return None;
    }
    if column.is_primary_key() {
        Some(SkipReason::PrimaryKey)
    } else if column.is_unique() {
        Some(SkipReason::Unique)
    } else if options.excludes(column.name()) {
        Some(SkipReason::Excluded)
    } else if options.targets(column.name()) {
        Some(SkipReason::Target)
    } else {
        None
    }
}

/// Decide, for every candidate column, whether it enters the SET clause.
///
/// Candidates are `options.keep` when non-empty (in the given order, duplicates
/// included), otherwise every column of `table` in declaration order.
pub fn explain_update_set<D: UpsertDialect + ?Sized>(
    dialect: &D,
    table: &Table,
    options: &UpsertOptions,
) -> UpsertResult<Vec<ColumnDecision>> {
    if !options.target.is_empty() && !dialect.supports_conflict_target() {
        return Err(UpsertError::TargetNotSupported {
            dialect: dialect.name(),
        });
    }
    options.validate(table)?;

    let policy = dialect.key_policy();
    let explicit_keep = !options.keep.is_empty();
    let candidates: Vec<&Column> = if explicit_keep {
        options
            .keep
            .iter()
            .map(|column| table.resolve(column))
            .collect::<UpsertResult<_>>()?
    } else {
        table.columns().iter().collect()
    };

    let decisions = candidates
        .into_iter()
        .map(|column| {
            let skipped = skip_reason(policy, column, options, explicit_keep);
            #[cfg(feature = "tracing")]
            if let Some(reason) = skipped {
                tracing::trace!(
                    target: "upsert_cols",
                    dialect = dialect.name(),
                    table = table.name(),
                    column = column.name(),
                    %reason,
                    "column left out of SET"
                );
            }
            ColumnDecision {
                column: column.clone(),
                skipped,
            }
        })
        .collect();

    Ok(decisions)
}

/// Compute the SET map for an upsert on `table`.
///
/// See [`KeyPolicy`] for how the dialect treats key columns and `keep`.
pub fn compute_update_set<D: UpsertDialect + ?Sized>(
    dialect: &D,
    table: &Table,
    options: &UpsertOptions,
) -> UpsertResult<UpdateSet> {
    let mut set = UpdateSet::new();
    for decision in explain_update_set(dialect, table, options)? {
        if decision.is_included() {
            let name = decision.column.name();
            set.insert(name, dialect.incoming_value(name));
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "upsert_cols",
        dialect = dialect.name(),
        table = table.name(),
        columns = set.len(),
        "computed update set"
    );

    Ok(set)
}

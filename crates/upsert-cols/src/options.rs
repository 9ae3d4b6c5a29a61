//! Column selection options.

use crate::error::UpsertResult;
use crate::table::{Column, Table};

/// Convert an input into a list of columns.
///
/// A single column becomes a one-element list, `None` becomes an empty list.
pub trait IntoColumns {
    fn into_columns(self) -> Vec<Column>;
}

impl IntoColumns for Column {
    fn into_columns(self) -> Vec<Column> {
        vec![self]
    }
}

impl IntoColumns for &Column {
    fn into_columns(self) -> Vec<Column> {
        vec![self.clone()]
    }
}

impl IntoColumns for Vec<Column> {
    fn into_columns(self) -> Vec<Column> {
        self
    }
}

impl IntoColumns for &Vec<Column> {
    fn into_columns(self) -> Vec<Column> {
        self.clone()
    }
}

impl IntoColumns for &[Column] {
    fn into_columns(self) -> Vec<Column> {
        self.to_vec()
    }
}

impl IntoColumns for Vec<&Column> {
    fn into_columns(self) -> Vec<Column> {
        self.into_iter().cloned().collect()
    }
}

impl<const N: usize> IntoColumns for [Column; N] {
    fn into_columns(self) -> Vec<Column> {
        self.into()
    }
}

impl<const N: usize> IntoColumns for [&Column; N] {
    fn into_columns(self) -> Vec<Column> {
        self.into_iter().cloned().collect()
    }
}

impl<T: IntoColumns> IntoColumns for Option<T> {
    fn into_columns(self) -> Vec<Column> {
        self.map(IntoColumns::into_columns).unwrap_or_default()
    }
}

/// How `exclude` affects an auto-detected conflict target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetExcludeMode {
    /// Excluded columns are dropped from the primary-key/unique target.
    #[default]
    Remove,
    /// Excluded columns are added to the primary-key/unique target.
    ///
    /// Earlier releases filtered the target through the same predicate as the
    /// SET columns, which pulled every excluded column into the target. Only
    /// use this to keep statements identical to those releases.
    Append,
}

/// Options for selecting upsert columns.
///
/// Every field defaults to empty; an empty `keep` means "all columns".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpsertOptions {
    /// Explicit conflict target. Overrides key auto-detection when non-empty.
    pub target: Vec<Column>,
    /// Columns to consider for the SET clause instead of every column.
    pub keep: Vec<Column>,
    /// Columns never written by the SET clause.
    pub exclude: Vec<Column>,
    /// Effect of `exclude` on the auto-detected target.
    pub target_exclude: TargetExcludeMode,
}

impl UpsertOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the conflict target.
    pub fn target(mut self, columns: impl IntoColumns) -> Self {
        self.target = columns.into_columns();
        self
    }

    /// Restrict the SET clause to these columns.
    pub fn keep(mut self, columns: impl IntoColumns) -> Self {
        self.keep = columns.into_columns();
        self
    }

    /// Leave these columns out of the SET clause.
    pub fn exclude(mut self, columns: impl IntoColumns) -> Self {
        self.exclude = columns.into_columns();
        self
    }

    /// Choose how `exclude` affects the auto-detected target.
    pub fn target_exclude(mut self, mode: TargetExcludeMode) -> Self {
        self.target_exclude = mode;
        self
    }

    /// Check that every listed column belongs to `table`.
    pub fn validate(&self, table: &Table) -> UpsertResult<()> {
        self.target
            .iter()
            .chain(&self.keep)
            .chain(&self.exclude)
            .try_for_each(|column| table.resolve(column).map(|_| ()))
    }

    pub(crate) fn excludes(&self, name: &str) -> bool {
        self.exclude.iter().any(|c| c.name() == name)
    }

    pub(crate) fn targets(&self, name: &str) -> bool {
        self.target.iter().any(|c| c.name() == name)
    }
}

//! Table and column metadata.
//!
//! A [`Table`] is an ordered list of [`Column`] handles. Each handle remembers the
//! name of the table it was taken from, which is how option lists are checked
//! for membership before any columns are selected.
//!
//! # Example
//!
//! ```
//! use upsert_cols::{ColumnDef, Table};
//!
//! let users = Table::new("users", [
//!     ColumnDef::new("id").primary_key(),
//!     ColumnDef::new("email").unique(),
//!     ColumnDef::new("name"),
//! ])?;
//!
//! assert_eq!(users.col("email")?.name(), "email");
//! assert!(users.col("missing").is_err());
//! # Ok::<(), upsert_cols::UpsertError>(())
//! ```

use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::error::{UpsertError, UpsertResult};
use crate::ident;

/// Metadata for a statically described table.
///
/// This trait is implemented by `#[derive(Table)]`.
pub trait TableMeta {
    /// The database table name.
    fn table_name() -> &'static str;

    /// Column definitions in declaration order.
    fn column_defs() -> &'static [ColumnDef<'static>];

    /// Build the runtime [`Table`] for this type.
    fn table() -> UpsertResult<Table> {
        Table::new(Self::table_name(), Self::column_defs().iter().copied())
    }
}

/// Definition of a single column, used to declare a [`Table`].
///
/// Composite primary keys and multi-column unique constraints are table-level
/// constraints, not column flags: leave them unflagged here and pass them as the
/// conflict target instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef<'a> {
    pub name: &'a str,
    pub primary_key: bool,
    pub unique: bool,
}

impl<'a> ColumnDef<'a> {
    pub const fn new(name: &'a str) -> Self {
        Self {
            name,
            primary_key: false,
            unique: false,
        }
    }

    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// A column handle obtained from a [`Table`].
///
/// Serializes as its bare name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    table: Arc<str>,
    name: Arc<str>,
    primary_key: bool,
    unique: bool,
}

impl Column {
    /// Name of the table this column belongs to.
    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Primary key or single-column unique constraint.
    pub fn is_key(&self) -> bool {
        self.primary_key || self.unique
    }
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// A table: a name and its columns in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: Arc<str>,
    columns: Vec<Column>,
}

impl Table {
    /// Create a table from column definitions.
    ///
    /// Fails on an empty or NUL-containing name, and on duplicate column names.
    pub fn new<'a>(
        name: &str,
        defs: impl IntoIterator<Item = ColumnDef<'a>>,
    ) -> UpsertResult<Self> {
        ident::validate("Table", name)?;
        let table: Arc<str> = Arc::from(name);

        let mut columns: Vec<Column> = Vec::new();
        for def in defs {
            ident::validate("Column", def.name)?;
            if columns.iter().any(|c| &*c.name == def.name) {
                return Err(UpsertError::DuplicateColumn {
                    table: name.to_string(),
                    column: def.name.to_string(),
                });
            }
            columns.push(Column {
                table: Arc::clone(&table),
                name: Arc::from(def.name),
                primary_key: def.primary_key,
                unique: def.unique,
            });
        }

        Ok(Self {
            name: table,
            columns,
        })
    }

    /// Build the table described by `T`.
    pub fn of<T: TableMeta>() -> UpsertResult<Self> {
        T::table()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Find a column by name.
    pub fn find(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| &*c.name == name)
    }

    /// Check if this table has a column with the given name.
    pub fn has_column(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Get a column by name, or `ColumnNotFound`.
    pub fn col(&self, name: &str) -> UpsertResult<&Column> {
        self.find(name)
            .ok_or_else(|| UpsertError::column_not_found(self.name(), name))
    }

    /// Get several columns by name, preserving the given order.
    pub fn cols(&self, names: &[&str]) -> UpsertResult<Vec<Column>> {
        names
            .iter()
            .map(|name| self.col(name).cloned())
            .collect()
    }

    /// Primary-key and unique columns in declaration order.
    pub fn key_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_key())
    }

    /// Resolve a handle against this table.
    ///
    /// The handle must come from a table with the same name and name one of its
    /// columns; the returned reference carries this table's flags.
    pub fn resolve(&self, column: &Column) -> UpsertResult<&Column> {
        if column.table() != self.name() {
            return Err(UpsertError::column_not_found(self.name(), column.name()));
        }
        self.col(column.name())
    }
}

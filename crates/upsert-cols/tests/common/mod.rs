#![allow(dead_code)]

use upsert_cols::{Column, ColumnDef, RawSql, Table, UpdateSet, raw};

/// `{int PK, int2, int3, int4}`
pub fn mock_table() -> Table {
    Table::new(
        "mock_table",
        [
            ColumnDef::new("int").primary_key(),
            ColumnDef::new("int2"),
            ColumnDef::new("int3"),
            ColumnDef::new("int4"),
        ],
    )
    .unwrap()
}

/// `{int PK, int2, int3 UNIQUE, int4}`
pub fn mock_table_unique() -> Table {
    Table::new(
        "mock_table_unique",
        [
            ColumnDef::new("int").primary_key(),
            ColumnDef::new("int2"),
            ColumnDef::new("int3").unique(),
            ColumnDef::new("int4"),
        ],
    )
    .unwrap()
}

/// `{id1, id2, val}` with a composite primary key on `(id1, id2)`.
///
/// Composite keys are table constraints, so no column carries a flag.
pub fn mock_table_composite() -> Table {
    Table::new(
        "mock_table_composite",
        [
            ColumnDef::new("id1"),
            ColumnDef::new("id2"),
            ColumnDef::new("val"),
        ],
    )
    .unwrap()
}

/// `{id PK, email UNIQUE, handle UNIQUE, name}`
pub fn mock_table_multi_unique() -> Table {
    Table::new(
        "mock_table_multi_unique",
        [
            ColumnDef::new("id").primary_key(),
            ColumnDef::new("email").unique(),
            ColumnDef::new("handle").unique(),
            ColumnDef::new("name"),
        ],
    )
    .unwrap()
}

pub fn set_of(entries: &[(&str, &str)]) -> UpdateSet {
    entries
        .iter()
        .map(|(name, expr)| (*name, raw(*expr)))
        .collect()
}

pub fn names(columns: &[Column]) -> Vec<&str> {
    columns.iter().map(Column::name).collect()
}

pub fn exprs(set: &UpdateSet) -> Vec<(&str, &str)> {
    set.iter().map(|(name, expr)| (name, RawSql::as_str(expr))).collect()
}

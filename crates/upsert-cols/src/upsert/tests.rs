//! Tests for the upsert module.

use crate::dialect::{OnConflict, OnDuplicateKey};
use crate::error::UpsertError;
use crate::options::{TargetExcludeMode, UpsertOptions};
use crate::sql::raw;
use crate::table::{Column, ColumnDef, Table};
use crate::upsert::*;

fn mock_table() -> Table {
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

fn mock_table_unique() -> Table {
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

fn excluded(names: &[&str]) -> UpdateSet {
    names
        .iter()
        .map(|n| (*n, raw(format!("excluded.{n}"))))
        .collect()
}

fn values(names: &[&str]) -> UpdateSet {
    names
        .iter()
        .map(|n| (*n, raw(format!("values({n})"))))
        .collect()
}

fn names(columns: &[Column]) -> Vec<&str> {
    columns.iter().map(Column::name).collect()
}

#[test]
fn test_set_defaults_to_non_key_columns() {
    let t = mock_table();
    let set = on_conflict_do_update_set(&t, &UpsertOptions::new()).unwrap();
    assert_eq!(set, excluded(&["int2", "int3", "int4"]));
}

#[test]
fn test_set_with_exclude() {
    let t = mock_table();
    let opts = UpsertOptions::new().exclude([t.col("int2").unwrap()]);
    let set = on_conflict_do_update_set(&t, &opts).unwrap();
    assert_eq!(set, excluded(&["int3", "int4"]));
}

#[test]
fn test_set_with_keep() {
    let t = mock_table();
    let opts = UpsertOptions::new().keep([t.col("int2").unwrap()]);
    let set = on_conflict_do_update_set(&t, &opts).unwrap();
    assert_eq!(set, excluded(&["int2"]));
}

#[test]
fn test_unique_table_target_and_set() {
    let t = mock_table_unique();
    let target = on_conflict_do_update_target(&t, &UpsertOptions::new()).unwrap();
    assert_eq!(names(&target), ["int", "int3"]);
    let set = on_conflict_do_update_set(&t, &UpsertOptions::new()).unwrap();
    assert_eq!(set, excluded(&["int2", "int4"]));
}

#[test]
fn test_duplicate_key_keeps_primary_key() {
    let t = mock_table();
    let opts = UpsertOptions::new().keep(t.col("int").unwrap());
    assert_eq!(
        on_duplicate_key_update_set(&t, &opts).unwrap(),
        values(&["int"])
    );
    assert!(on_conflict_do_update_set(&t, &opts).unwrap().is_empty());
}

#[test]
fn test_set_preserves_keep_order() {
    let t = mock_table();
    let opts = UpsertOptions::new().keep(t.cols(&["int4", "int2"]).unwrap());
    let set = on_conflict_do_update_set(&t, &opts).unwrap();
    assert_eq!(set.keys().collect::<Vec<_>>(), ["int4", "int2"]);
}

#[test]
fn test_set_deduplicates_keep() {
    let t = mock_table();
    let int2 = t.col("int2").unwrap();
    let opts = UpsertOptions::new().keep([int2, int2]);
    let set = on_conflict_do_update_set(&t, &opts).unwrap();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_config_set_and_target_are_disjoint() {
    let t = mock_table_unique();
    let config = on_conflict_do_update_config(&t, &UpsertOptions::new()).unwrap();
    let target = config.target.unwrap();
    assert!(target.iter().all(|c| !config.set.contains_key(c.name())));
}

#[test]
fn test_duplicate_key_config_has_no_target() {
    let t = mock_table();
    let config = on_duplicate_key_update_config(&t, &UpsertOptions::new()).unwrap();
    assert!(config.target.is_none());
    assert_eq!(config.set, values(&["int2", "int3", "int4"]));
}

#[test]
fn test_duplicate_key_rejects_target() {
    let t = mock_table();
    let opts = UpsertOptions::new().target(t.col("int2").unwrap());
    assert_eq!(
        on_duplicate_key_update_set(&t, &opts).unwrap_err(),
        UpsertError::TargetNotSupported {
            dialect: "ON DUPLICATE KEY"
        }
    );
}

#[test]
fn test_foreign_column_is_rejected() {
    let t = mock_table();
    let other = mock_table_unique();
    let opts = UpsertOptions::new().keep(other.col("int2").unwrap());
    let err = on_conflict_do_update_config(&t, &opts).unwrap_err();
    assert_eq!(err, UpsertError::column_not_found("mock_table", "int2"));
}

#[test]
fn test_explain_reports_reasons() {
    let t = mock_table_unique();
    let opts = UpsertOptions::new()
        .target(t.col("int2").unwrap())
        .exclude(t.col("int4").unwrap());
    let decisions = explain_update_set(&OnConflict, &t, &opts).unwrap();
    let reasons: Vec<(&str, Option<SkipReason>)> = decisions
        .iter()
        .map(|d| (d.column.name(), d.skipped))
        .collect();
    assert_eq!(
        reasons,
        [
            ("int", Some(SkipReason::PrimaryKey)),
            ("int2", Some(SkipReason::Target)),
            ("int3", Some(SkipReason::Unique)),
            ("int4", Some(SkipReason::Excluded)),
        ]
    );
}

#[test]
fn test_explain_keep_overrides_on_duplicate_key() {
    let t = mock_table_unique();
    let opts = UpsertOptions::new()
        .keep(t.cols(&["int", "int3"]).unwrap())
        .exclude(t.col("int3").unwrap());
    let decisions = explain_update_set(&OnDuplicateKey, &t, &opts).unwrap();
    assert!(decisions.iter().all(ColumnDecision::is_included));
}

#[test]
fn test_target_exclude_default_is_remove() {
    let t = mock_table_unique();
    let opts = UpsertOptions::new().exclude(t.col("int3").unwrap());
    let target = on_conflict_do_update_target(&t, &opts).unwrap();
    assert_eq!(names(&target), ["int"]);

    let legacy = opts.target_exclude(TargetExcludeMode::Append);
    let target = on_conflict_do_update_target(&t, &legacy).unwrap();
    assert_eq!(names(&target), ["int", "int3"]);
}

#[test]
fn test_dialect_as_trait_object() {
    let t = mock_table();
    let dialects: [&dyn crate::dialect::UpsertDialect; 2] = [&OnConflict, &OnDuplicateKey];
    let sizes: Vec<usize> = dialects
        .iter()
        .map(|d| compute_update_set(*d, &t, &UpsertOptions::new()).unwrap().len())
        .collect();
    assert_eq!(sizes, [3, 3]);
}

#[test]
fn test_repeated_calls_are_equal() {
    let t = mock_table_unique();
    let opts = UpsertOptions::new().exclude(t.col("int2").unwrap());
    let a = on_conflict_do_update_config(&t, &opts).unwrap();
    let b = on_conflict_do_update_config(&t, &opts).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_quoted_column_names() {
    let t = Table::new(
        "events",
        [ColumnDef::new("id").primary_key(), ColumnDef::new("createdAt")],
    )
    .unwrap();
    let pg = on_conflict_do_update_set(&t, &UpsertOptions::new()).unwrap();
    assert_eq!(pg.get("createdAt"), Some(&raw(r#"excluded."createdAt""#)));
    let my = on_duplicate_key_update_set(&t, &UpsertOptions::new()).unwrap();
    assert_eq!(my.get("createdAt"), Some(&raw("values(`createdAt`)")));
}

#[test]
fn test_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Table>();
    assert_send_sync::<Column>();
    assert_send_sync::<UpsertOptions>();
    assert_send_sync::<UpsertConfig>();
}

//! # upsert-cols
//!
//! Column selection for upsert statements.
//!
//! Given a table's column metadata, computes which columns an upsert should
//! overwrite when a conflict occurs, and which columns identify the conflict.
//! The output plugs into any query builder: a conflict target (column list)
//! and a SET map from column name to an expression that references the
//! incoming row.
//!
//! ## Features
//!
//! - **Two dialect families**: `ON CONFLICT ... DO UPDATE` (PostgreSQL, SQLite)
//!   and `ON DUPLICATE KEY UPDATE` (MySQL, SingleStore)
//! - **Safe defaults**: primary-key and unique columns are never overwritten
//!   unless the dialect allows it and they are kept explicitly
//! - **Checked options**: columns from another table are rejected
//! - **Derive**: `#[derive(Table)]` describes a table from a struct
//!
//! ## Example
//!
//! ```
//! use upsert_cols::{ColumnDef, Table, UpsertOptions, raw};
//!
//! let t = Table::new("mock_table", [
//!     ColumnDef::new("int").primary_key(),
//!     ColumnDef::new("int2"),
//!     ColumnDef::new("int3"),
//! ])?;
//!
//! let opts = UpsertOptions::new().exclude(t.col("int3")?);
//! let set = upsert_cols::on_conflict_do_update_set(&t, &opts)?;
//! assert_eq!(set.get("int2"), Some(&raw("excluded.int2")));
//! assert!(!set.contains_key("int3"));
//! # Ok::<(), upsert_cols::UpsertError>(())
//! ```

pub mod dialect;
pub mod error;
pub mod ident;
pub mod options;
pub mod prelude;
pub mod sql;
pub mod table;
pub mod upsert;

pub use dialect::{KeyPolicy, OnConflict, OnDuplicateKey, UpsertDialect};
pub use error::{UpsertError, UpsertResult};
pub use ident::quote_ident;
pub use options::{IntoColumns, TargetExcludeMode, UpsertOptions};
pub use sql::{RawSql, raw};
pub use table::{Column, ColumnDef, Table, TableMeta};

// Re-export upsert entry points for easy access
pub use upsert::{
    ColumnDecision, ConflictTarget, SkipReason, UpdateSet, UpsertConfig, build_upsert_config,
    compute_conflict_target, compute_update_set, explain_update_set, on_conflict_do_update_config,
    on_conflict_do_update_set, on_conflict_do_update_target, on_duplicate_key_update_config,
    on_duplicate_key_update_set,
};

#[cfg(feature = "derive")]
pub use upsert_cols_derive::Table;

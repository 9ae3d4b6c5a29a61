//! Upsert column selection.
//!
//! By default every column except primary-key and unique columns is updated.
//! `keep` narrows the candidates, `exclude` removes columns, and `target` names
//! the conflict target explicitly.
//!
//! Composite primary/unique keys are not detected automatically; pass them as
//! `target` (ON CONFLICT) or list the columns in `exclude` (ON DUPLICATE KEY).
//!
//! # Usage
//!
//! ```
//! use upsert_cols::{ColumnDef, Table, UpsertOptions, upsert};
//!
//! let users = Table::new("users", [
//!     ColumnDef::new("id").primary_key(),
//!     ColumnDef::new("email").unique(),
//!     ColumnDef::new("name"),
//!     ColumnDef::new("bio"),
//! ])?;
//!
//! // ON CONFLICT (id, email) DO UPDATE SET name = excluded.name, bio = excluded.bio
//! let config = upsert::on_conflict_do_update_config(&users, &UpsertOptions::new())?;
//! assert_eq!(config.target_names(), Some(vec!["id", "email"]));
//! assert_eq!(config.set.keys().collect::<Vec<_>>(), ["name", "bio"]);
//!
//! // ON DUPLICATE KEY UPDATE name = values(name)
//! let opts = UpsertOptions::new().keep(users.col("name")?);
//! let set = upsert::on_duplicate_key_update_set(&users, &opts)?;
//! assert_eq!(set.get("name").map(|s| s.as_str()), Some("values(name)"));
//! # Ok::<(), upsert_cols::UpsertError>(())
//! ```

mod config;
mod set;
mod target;

#[cfg(test)]
mod tests;

pub use config::{UpsertConfig, build_upsert_config};
pub use set::{ColumnDecision, SkipReason, UpdateSet, compute_update_set, explain_update_set};
pub use target::{ConflictTarget, compute_conflict_target};

use crate::dialect::{OnConflict, OnDuplicateKey};
use crate::error::UpsertResult;
use crate::options::UpsertOptions;
use crate::table::Table;

/// SET map for `ON CONFLICT ... DO UPDATE` (PostgreSQL, SQLite).
///
/// Key columns and target columns are never updated, even when kept.
pub fn on_conflict_do_update_set(table: &Table, options: &UpsertOptions) -> UpsertResult<UpdateSet> {
    compute_update_set(&OnConflict, table, options)
}

/// Conflict target for `ON CONFLICT ... DO UPDATE` (PostgreSQL, SQLite).
pub fn on_conflict_do_update_target(
    table: &Table,
    options: &UpsertOptions,
) -> UpsertResult<ConflictTarget> {
    compute_conflict_target(table, options)
}

/// Target and SET map for `ON CONFLICT ... DO UPDATE` (PostgreSQL, SQLite).
pub fn on_conflict_do_update_config(
    table: &Table,
    options: &UpsertOptions,
) -> UpsertResult<UpsertConfig> {
    build_upsert_config(&OnConflict, table, options)
}

/// SET map for `ON DUPLICATE KEY UPDATE` (MySQL, SingleStore).
///
/// An explicit `keep` list is used as given, including key columns.
pub fn on_duplicate_key_update_set(
    table: &Table,
    options: &UpsertOptions,
) -> UpsertResult<UpdateSet> {
    compute_update_set(&OnDuplicateKey, table, options)
}

/// Config for `ON DUPLICATE KEY UPDATE` (MySQL, SingleStore); `target` is always `None`.
pub fn on_duplicate_key_update_config(
    table: &Table,
    options: &UpsertOptions,
) -> UpsertResult<UpsertConfig> {
    build_upsert_config(&OnDuplicateKey, table, options)
}

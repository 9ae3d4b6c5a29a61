//! Complete upsert configuration.

use serde::Serialize;

use super::set::{UpdateSet, compute_update_set};
use super::target::{ConflictTarget, compute_conflict_target};
use crate::dialect::UpsertDialect;
use crate::error::UpsertResult;
use crate::options::UpsertOptions;
use crate::table::{Column, Table};

/// Conflict target plus SET map, ready for a query builder's upsert call.
///
/// Serializes as `{"target": [...], "set": {...}}`; `target` is omitted for
/// dialects that infer it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpsertConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<ConflictTarget>,
    pub set: UpdateSet,
}

impl UpsertConfig {
    /// Target column names, if the dialect has a conflict target.
    pub fn target_names(&self) -> Option<Vec<&str>> {
        self.target
            .as_ref()
            .map(|target| target.iter().map(Column::name).collect())
    }
}

/// Build the conflict target (when the dialect takes one) and the SET map.
pub fn build_upsert_config<D: UpsertDialect + ?Sized>(
    dialect: &D,
    table: &Table,
    options: &UpsertOptions,
) -> UpsertResult<UpsertConfig> {
    let target = if dialect.supports_conflict_target() {
        Some(compute_conflict_target(table, options)?)
    } else {
        None
    };
    let set = compute_update_set(dialect, table, options)?;
    Ok(UpsertConfig { target, set })
}

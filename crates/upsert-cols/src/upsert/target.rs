//! Conflict target resolution.

use crate::error::UpsertResult;
use crate::options::{TargetExcludeMode, UpsertOptions};
use crate::table::{Column, Table};

/// Columns identifying the conflicting row, in statement order.
pub type ConflictTarget = Vec<Column>;

/// Compute the conflict target for an `ON CONFLICT` upsert on `table`.
///
/// A non-empty `options.target` is returned as given. Otherwise the target is
/// every primary-key and unique column in declaration order, with `exclude`
/// applied according to [`TargetExcludeMode`]. The result can be empty when
/// every key column is excluded.
///
/// Composite keys are not column flags and are never auto-detected; pass them
/// as `target`.
pub fn compute_conflict_target(
    table: &Table,
    options: &UpsertOptions,
) -> UpsertResult<ConflictTarget> {
    options.validate(table)?;

    if !options.target.is_empty() {
        return Ok(options.target.clone());
    }

    let mode = options.target_exclude;
    #[cfg(feature = "tracing")]
    if mode == TargetExcludeMode::Append && !options.exclude.is_empty() {
        tracing::debug!(
            target: "upsert_cols",
            table = table.name(),
            "excluded columns appended to conflict target"
        );
    }

    let target: ConflictTarget = table
        .columns()
        .iter()
        .filter(|column| {
            let excluded = options.excludes(column.name());
            match mode {
                TargetExcludeMode::Remove => column.is_key() && !excluded,
                TargetExcludeMode::Append => column.is_key() || excluded,
            }
        })
        .cloned()
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "upsert_cols",
        table = table.name(),
        columns = target.len(),
        "computed conflict target"
    );

    Ok(target)
}

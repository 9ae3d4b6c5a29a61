//! Convenient imports for typical `upsert-cols` usage.
//!
//! ```
//! use upsert_cols::prelude::*;
//! ```

pub use crate::{
    Column, ColumnDef, IntoColumns, RawSql, Table, TableMeta, UpdateSet, UpsertConfig,
    UpsertError, UpsertOptions, UpsertResult, raw,
};

pub use crate::{
    on_conflict_do_update_config, on_conflict_do_update_set, on_conflict_do_update_target,
    on_duplicate_key_update_config, on_duplicate_key_update_set,
};

//! Derive macros for upsert-cols
//!
//! Provides `#[derive(Table)]`, which describes a database table from a struct.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod table;

/// Derive `TableMeta` for a struct.
///
/// # Example
///
/// ```ignore
/// use upsert_cols::{Table, TableMeta};
///
/// #[derive(Table)]
/// #[orm(table = "users")]
/// struct User {
///     #[orm(id)]
///     id: i64,
///     #[orm(unique)]
///     email: String,
///     #[orm(column = "display_name")]
///     name: String,
/// }
///
/// let users = User::table()?;
/// ```
///
/// # Generated
///
/// - `impl TableMeta` - table name and column definitions in field order
/// - `TABLE: &'static str` - Table name
/// - `COL_*: &'static str` - Column name constants
///
/// # Attributes
///
/// - `#[orm(table = "name")]` - Specify table name (required)
/// - `#[orm(id)]` / `#[orm(primary_key)]` - Mark field as primary key
/// - `#[orm(unique)]` - Mark field as a single-column unique key
/// - `#[orm(column = "name")]` - Map field to different column name
#[proc_macro_derive(Table, attributes(orm))]
pub fn derive_table(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    table::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

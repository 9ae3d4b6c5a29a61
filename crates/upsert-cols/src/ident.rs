//! Column and table identifier handling.
//!
//! Names are validated when a [`Table`](crate::Table) is built and quoted on demand
//! when they are rendered into a raw SQL fragment.
//!
//! - Plain names match `[a-z_][a-z0-9_$]*` and are emitted as-is
//! - Anything else is wrapped in the dialect quote character, doubling embedded quotes
//!
//! # Example
//! ```
//! use upsert_cols::ident::quote_ident;
//!
//! assert_eq!(quote_ident("email", '"'), "email");
//! assert_eq!(quote_ident("createdAt", '"'), r#""createdAt""#);
//! assert_eq!(quote_ident("createdAt", '`'), "`createdAt`");
//! ```

use std::borrow::Cow;

use crate::error::{UpsertError, UpsertResult};

/// Check that `name` can be used as a table or column name.
///
/// `kind` names the thing being validated in the error message.
pub(crate) fn validate(kind: &str, name: &str) -> UpsertResult<()> {
    if name.is_empty() {
        return Err(UpsertError::validation(format!(
            "{kind} name cannot be empty"
        )));
    }
    if name.contains('\0') {
        return Err(UpsertError::validation(format!(
            "{kind} name cannot contain NUL character"
        )));
    }
    Ok(())
}

/// Whether `name` can be emitted without quoting.
///
/// Upper-case letters force quoting because unquoted identifiers are case-folded
/// by PostgreSQL.
pub fn is_plain(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c == '$' || c.is_ascii_lowercase() || c.is_ascii_digit())
}

/// Render `name` as a SQL identifier using `quote` when it is not plain.
pub fn quote_ident(name: &str, quote: char) -> Cow<'_, str> {
    if is_plain(name) {
        return Cow::Borrowed(name);
    }
    let mut out = String::with_capacity(name.len() + 2);
    out.push(quote);
    for ch in name.chars() {
        if ch == quote {
            out.push(quote);
        }
        out.push(ch);
    }
    out.push(quote);
    Cow::Owned(out)
}

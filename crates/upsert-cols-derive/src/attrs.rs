//! Attribute parsing for the Table derive macro.
//!
//! Handles struct-level `#[orm(table = "...")]` and field-level
//! `#[orm(id, unique, column = "...")]` attributes.

use syn::ext::IdentExt;
use syn::{DeriveInput, Error, LitStr, Result};

/// Parsed field-level attributes.
#[derive(Default)]
pub(crate) struct FieldAttr {
    pub primary_key: bool,
    pub unique: bool,
    pub column: Option<LitStr>,
}

impl FieldAttr {
    /// Merge every `#[orm(...)]` attribute on `field`.
    pub(crate) fn from_field(field: &syn::Field) -> Result<Self> {
        let mut out = Self::default();
        for attr in &field.attrs {
            if !attr.path().is_ident("orm") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("id") || meta.path.is_ident("primary_key") {
                    out.primary_key = true;
                    Ok(())
                } else if meta.path.is_ident("unique") {
                    out.unique = true;
                    Ok(())
                } else if meta.path.is_ident("column") {
                    let lit: LitStr = meta.value()?.parse()?;
                    check_name(&lit, "column name")?;
                    out.column = Some(lit);
                    Ok(())
                } else {
                    Err(meta.error(
                        "unknown field attribute, expected `id`, `primary_key`, `unique` or `column`",
                    ))
                }
            })?;
        }
        Ok(out)
    }

    /// Column name: the `column` override or the field name.
    pub(crate) fn column_name(&self, ident: &syn::Ident) -> String {
        match &self.column {
            Some(lit) => lit.value(),
            None => ident.unraw().to_string(),
        }
    }
}

/// Extract table name from struct-level `#[orm(table = "...")]` attribute.
pub(crate) fn get_table_name(input: &DeriveInput) -> Result<String> {
    let mut table: Option<LitStr> = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("orm") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("table") {
                let lit: LitStr = meta.value()?.parse()?;
                check_name(&lit, "table name")?;
                table = Some(lit);
                Ok(())
            } else {
                Err(meta.error("unknown struct attribute, expected `table`"))
            }
        })?;
    }
    table.map(|lit| lit.value()).ok_or_else(|| {
        Error::new_spanned(
            &input.ident,
            "Table requires #[orm(table = \"table_name\")] attribute",
        )
    })
}

fn check_name(lit: &LitStr, what: &str) -> Result<()> {
    let value = lit.value();
    if value.is_empty() {
        return Err(Error::new(lit.span(), format!("{what} must not be empty")));
    }
    if value.contains('\0') {
        return Err(Error::new(
            lit.span(),
            format!("{what} must not contain NUL character"),
        ));
    }
    Ok(())
}

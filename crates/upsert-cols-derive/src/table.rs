//! Table derive macro implementation

use std::collections::HashSet;

use heck::ToShoutySnakeCase;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Error, Fields, Result};

use crate::attrs::{FieldAttr, get_table_name};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let table_name = get_table_name(&input)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(Error::new_spanned(
                    &input,
                    "Table can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(Error::new_spanned(
                &input,
                "Table can only be derived for structs",
            ));
        }
    };

    let mut seen = HashSet::with_capacity(fields.len());
    let mut column_defs = Vec::with_capacity(fields.len());
    let mut column_consts = Vec::with_capacity(fields.len());

    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let attr = FieldAttr::from_field(field)?;
        let column = attr.column_name(ident);

        if !seen.insert(column.clone()) {
            return Err(Error::new_spanned(
                field,
                format!("duplicate column '{column}' in table '{table_name}'"),
            ));
        }

        let primary_key = attr.primary_key;
        let unique = attr.unique;
        column_defs.push(quote! {
            ::upsert_cols::ColumnDef {
                name: #column,
                primary_key: #primary_key,
                unique: #unique,
            }
        });

        let const_ident = format_ident!(
            "COL_{}",
            ident.unraw().to_string().to_shouty_snake_case()
        );
        column_consts.push(quote! {
            pub const #const_ident: &'static str = #column;
        });
    }

    Ok(quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            pub const TABLE: &'static str = #table_name;
            #(#column_consts)*
        }

        impl #impl_generics ::upsert_cols::TableMeta for #name #ty_generics #where_clause {
            fn table_name() -> &'static str {
                #table_name
            }

            fn column_defs() -> &'static [::upsert_cols::ColumnDef<'static>] {
                const COLUMNS: &[::upsert_cols::ColumnDef<'static>] = &[#(#column_defs),*];
                COLUMNS
            }
        }
    })
}

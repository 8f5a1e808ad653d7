//! Input gathering for `#[derive(Describe)]`.
//!
//! Collects the struct identifier, generics, fields, and all attribute
//! metadata in one pass so expansion fails fast on invalid input.

use syn::{Data, DeriveInput, Fields, Visibility};

use super::{FieldAttrs, StructAttrs, parse_field_attrs, parse_struct_attrs};

pub(crate) struct ParsedField {
    pub ident: syn::Ident,
    pub ty: syn::Type,
    /// Any visibility other than private.
    pub exported: bool,
    pub attrs: FieldAttrs,
}

pub(crate) struct ParsedInput {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub fields: Vec<ParsedField>,
    pub struct_attrs: StructAttrs,
}

pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Describe requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Describe can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        fields.push(ParsedField {
            ident,
            ty: field.ty.clone(),
            exported: !matches!(field.vis, Visibility::Inherited),
            attrs: parse_field_attrs(&field.attrs)?,
        });
    }

    Ok(ParsedInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        fields,
        struct_attrs,
    })
}

//! Attribute parsing for `#[derive(Describe)]`.
//!
//! Container attributes accept `crate = "path"`. Field attributes record
//! every `key = "value"` pair as a tag, in declaration order, and accept the
//! bare word `embed`. Doc comments become the `doc` tag unless one is given
//! explicitly.

use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, ExprLit, Lit, Meta, MetaNameValue, Token};

mod input;
mod literals;

pub(crate) use input::{ParsedField, ParsedInput, parse_input};
use literals::lit_str;

/// Tag key that receives the field's doc comment.
const DOC_TAG: &str = "doc";

#[derive(Default)]
pub(crate) struct StructAttrs {
    /// Overrides the runtime crate path for dependency aliasing.
    pub crate_path: Option<syn::Path>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct FieldAttrs {
    pub tags: Vec<(String, String)>,
    pub embed: bool,
}

/// Iterates every `#[sflags(...)]` attribute and applies `f` to each entry.
fn parse_sflags<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("sflags")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_sflags(attrs, |meta| {
        if meta.path.is_ident("crate") {
            out.crate_path = Some(lit_str(meta, "crate")?.parse::<syn::Path>()?);
            Ok(())
        } else {
            Err(meta.error("unsupported sflags container attribute, expected `crate = \"...\"`"))
        }
    })?;
    Ok(out)
}

pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_sflags(attrs, |meta| {
        let Some(ident) = meta.path.get_ident() else {
            return Err(meta.error("expected an identifier key"));
        };
        let key = ident.unraw().to_string();
        if key == "embed" && !meta.input.peek(Token![=]) {
            if out.embed {
                return Err(meta.error("duplicate `embed`"));
            }
            out.embed = true;
            return Ok(());
        }
        if out.tags.iter().any(|(existing, _)| *existing == key) {
            return Err(meta.error(format!("duplicate sflags key `{key}`")));
        }
        let value = lit_str(meta, &key)?.value();
        out.tags.push((key, value));
        Ok(())
    })?;

    let explicit_doc = out.tags.iter().any(|(key, _)| key == DOC_TAG);
    if !explicit_doc && let Some(doc) = doc_comment(attrs) {
        out.tags.push((DOC_TAG.to_owned(), doc));
    }
    Ok(out)
}

/// Joins the non-empty lines of a field's doc comment with spaces.
fn doc_comment(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(MetaNameValue {
                value: Expr::Lit(ExprLit {
                    lit: Lit::Str(text),
                    ..
                }),
                ..
            }) => Some(text.value().trim().to_owned()),
            _ => None,
        })
        .filter(|line| !line.is_empty())
        .collect();
    (!lines.is_empty()).then(|| lines.join(" "))
}

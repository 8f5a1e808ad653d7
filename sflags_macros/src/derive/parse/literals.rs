//! Literal parsing helpers for `#[sflags(...)]` attributes.

use syn::meta::ParseNestedMeta;
use syn::{Lit, LitStr};

/// Parses the string literal assigned to `key`.
///
/// ```ignore
/// // #[sflags(flag = "port p")]
/// let value = lit_str(&meta, "flag")?.value();
/// assert_eq!(value, "port p");
/// ```
pub(super) fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    let literal = meta.value()?.parse::<Lit>()?;
    match literal {
        Lit::Str(text) => Ok(text),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string"),
        )),
    }
}

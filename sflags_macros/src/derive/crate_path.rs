//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[sflags(crate = "...")]` container attribute into
//! the path generated code uses to reach the runtime crate, so a renamed
//! `sflags` dependency still resolves `Describe`, `Field` and friends.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolves the runtime crate path from the parsed container attribute.
///
/// Defaults to the absolute path `::sflags`. With
/// `#[sflags(crate = "...")]` the returned tokens name the alias instead,
/// exactly as written.
///
/// # Examples
///
/// ```rust,ignore
/// let default = resolve(None);
/// assert_eq!(default.to_string(), ":: sflags");
///
/// let path: syn::Path = syn::parse_str("flags")?;
/// assert_eq!(resolve(Some(&path)).to_string(), "flags");
/// ```
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::sflags }, |path| quote! { #path })
}

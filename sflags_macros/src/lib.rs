//! Procedural macros for `sflags`.
//!
//! `#[derive(Describe)]` lets the flag walker enumerate a struct's fields
//! together with their tags and live storage. Field tags are written as
//! `#[sflags(key = "value", ...)]`; the bare word `embed` marks an embedded
//! field whose children may be flattened into the enclosing scope.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `sflags::Describe`.
///
/// Also implements `sflags::Flaggable`, so the struct can be nested inside
/// other configuration structs.
#[proc_macro_derive(Describe, attributes(sflags))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

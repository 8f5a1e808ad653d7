//! Expansion pipeline for `#[derive(Describe)]`: parse the input, then
//! generate the trait implementations.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod crate_path;
mod generate;
mod parse;

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    Ok(generate::describe_impl(&parsed))
}

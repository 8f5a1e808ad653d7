//! Code generation for `#[derive(Describe)]`.
//!
//! The generated `fields` destructures `self` so every field is borrowed
//! mutably and disjointly, then pairs each borrow with its static metadata.
//! A field whose type implements `Flaggable` keeps its handle; any other
//! type resolves to `None` through the autoref probe and is omitted by the
//! walker instead of failing to compile.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

use super::crate_path;
use super::parse::{ParsedField, ParsedInput};

pub(crate) fn describe_impl(input: &ParsedInput) -> TokenStream {
    let krate = crate_path::resolve(input.struct_attrs.crate_path.as_ref());
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let bindings = input.fields.iter().map(|field| &field.ident);
    let entries = input.fields.iter().map(|field| field_entry(&krate, field));

    quote! {
        impl #impl_generics #krate::Describe for #ident #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<#krate::Field<'_>> {
                let Self { #(#bindings),* } = self;
                ::std::vec![#(#entries),*]
            }
        }

        impl #impl_generics #krate::Flaggable for #ident #ty_generics #where_clause {
            fn slot(&mut self) -> #krate::Slot<'_> {
                #krate::Slot::Nested(self)
            }
        }
    }
}

fn field_entry(krate: &TokenStream, field: &ParsedField) -> TokenStream {
    let ident = &field.ident;
    let ty = &field.ty;
    let name = ident.unraw().to_string();
    let exported = field.exported;
    let embedded = field.attrs.embed;
    let tags = field.attrs.tags.iter().map(|(key, value)| quote! { (#key, #value) });

    quote! {
        #krate::Field::new(
            #krate::FieldMeta {
                name: #name,
                type_name: ::core::any::type_name::<#ty>(),
                exported: #exported,
                embedded: #embedded,
                tags: &[#(#tags),*],
            },
            {
                use #krate::__private::{ResolveFlaggable as _, ResolveUnsupported as _};
                #krate::__private::Probe(#ident).resolve()
            },
        )
    }
}

//! Implementation of the `#[derive(Equality)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use crate::fields::{equality_bound, struct_members, with_bound};

/// Main implementation of the Equality derive macro.
pub fn derive_equality_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand_equality(&input))
}

fn expand_equality(input: &DeriveInput) -> TokenStream2 {
    let members = match struct_members(input, "Equality") {
        Ok(members) => members,
        Err(error) => return error,
    };

    let name = &input.ident;
    let generics = with_bound(&input.generics, &equality_bound());
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::seqkit::capability::Equality for #name #type_generics #where_clause {
            #[inline]
            fn equals(&self, other: &Self) -> bool {
                true #(&& ::seqkit::capability::Equality::equals(&self.#members, &other.#members))*
            }
        }
    }
}

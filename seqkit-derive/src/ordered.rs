//! Implementation of the `#[derive(Ordered)]` macro.
//!
//! The generated `partial_compare` walks the fields in declaration order and
//! returns at the first pair that is not `Equal`. An incomparable pair makes
//! the whole comparison `None`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use crate::fields::{ordered_bound, struct_members, with_bound};

/// Main implementation of the Ordered derive macro.
pub fn derive_ordered_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand_ordered(&input))
}

fn expand_ordered(input: &DeriveInput) -> TokenStream2 {
    let members = match struct_members(input, "Ordered") {
        Ok(members) => members,
        Err(error) => return error,
    };

    let name = &input.ident;
    let generics = with_bound(&input.generics, &ordered_bound());
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::seqkit::capability::Ordered for #name #type_generics #where_clause {
            fn partial_compare(
                &self,
                other: &Self,
            ) -> ::core::option::Option<::core::cmp::Ordering> {
                #(
                    match ::seqkit::capability::Ordered::partial_compare(
                        &self.#members,
                        &other.#members,
                    )? {
                        ::core::cmp::Ordering::Equal => {}
                        decided => return ::core::option::Option::Some(decided),
                    }
                )*
                ::core::option::Option::Some(::core::cmp::Ordering::Equal)
            }
        }
    }
}

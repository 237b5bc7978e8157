//! Shared helpers for the capability derives.

use proc_macro2::TokenStream as TokenStream2;
use syn::{Data, DeriveInput, GenericParam, Generics, Member, parse_quote};

/// Returns the members of a struct in declaration order, or a compile
/// error naming the derive for enums and unions.
pub fn struct_members(
    input: &DeriveInput,
    derive_name: &str,
) -> Result<Vec<Member>, TokenStream2> {
    match &input.data {
        Data::Struct(data_struct) => Ok(data_struct.fields.members().collect()),
        Data::Enum(_) => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{derive_name} can only be derived for structs, not enums."),
        )
        .to_compile_error()),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{derive_name} cannot be derived for unions."),
        )
        .to_compile_error()),
    }
}

/// Adds `bound` to every type parameter.
pub fn with_bound(generics: &Generics, bound: &syn::TypeParamBound) -> Generics {
    let mut generics = generics.clone();
    for parameter in &mut generics.params {
        if let GenericParam::Type(type_parameter) = parameter {
            type_parameter.bounds.push(bound.clone());
        }
    }
    generics
}

pub fn equality_bound() -> syn::TypeParamBound {
    parse_quote!(::seqkit::capability::Equality)
}

pub fn ordered_bound() -> syn::TypeParamBound {
    parse_quote!(::seqkit::capability::Ordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;
    use rstest::rstest;

    #[rstest]
    fn test_struct_members_named_and_tuple() {
        let named: DeriveInput = parse_quote! { struct Point { x: i32, y: i32 } };
        let tuple: DeriveInput = parse_quote! { struct Pair(u8, u8, u8); };
        let unit: DeriveInput = parse_quote! { struct Marker; };

        let count = |input: &DeriveInput| struct_members(input, "Equality").map(|members| members.len());
        assert_eq!(count(&named).ok(), Some(2));
        assert_eq!(count(&tuple).ok(), Some(3));
        assert_eq!(count(&unit).ok(), Some(0));
    }

    #[rstest]
    fn test_struct_members_rejects_enum() {
        let input: DeriveInput = parse_quote! { enum Shape { Circle, Square } };
        let error = struct_members(&input, "Ordered").unwrap_err().to_string();
        assert!(error.contains("Ordered can only be derived for structs"));
    }

    #[rstest]
    fn test_with_bound_adds_bound_to_type_parameters() {
        let input: DeriveInput = parse_quote! {
            struct Wrapper<'a, T, const N: usize> {
                value: &'a [T; N],
            }
        };
        let bounded = with_bound(&input.generics, &equality_bound());
        let rendered = bounded.to_token_stream().to_string();
        assert!(rendered.contains("capability :: Equality"));
        assert_eq!(bounded.type_params().count(), 1);
        assert_eq!(bounded.lifetimes().count(), 1);
    }
}

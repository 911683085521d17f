//! Procedural macros for Correlation.
//!
//! * `#[correlation_repository]` - marks an enum for repository generation

use proc_macro::TokenStream;
use quote::quote;
use syn::Item;

/// Marks an enum whose constants should be looked up by getter value.
///
/// The attribute only checks the enum: it must not be generic and every
/// variant must be a unit variant. The repository itself is written by the
/// build-time generator and pulled in with `include!`.
///
/// ```ignore
/// #[correlation_repository]
/// pub enum Status {
///     Active,
///     Retired,
/// }
/// ```
#[proc_macro_attribute]
pub fn correlation_repository(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand_repository_marker(attr.into(), item.into()).into()
}

/// Check the marked item and re-emit it, preceded by a `compile_error!` per problem.
fn expand_repository_marker(
    attr: proc_macro2::TokenStream,
    item: proc_macro2::TokenStream,
) -> proc_macro2::TokenStream {
    let input = match syn::parse2::<Item>(item) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let mut errors = Vec::new();
    if !attr.is_empty() {
        errors.push(
            syn::Error::new_spanned(&attr, "#[correlation_repository] takes no arguments")
                .to_compile_error(),
        );
    }

    match &input {
        Item::Enum(item_enum) => {
            if let Err(err) = analysis::check_marked_enum(item_enum) {
                errors.push(err.to_compile_error());
            }
        }
        other => errors.push(
            syn::Error::new_spanned(other, "#[correlation_repository] can only be applied to enums")
                .to_compile_error(),
        ),
    }

    quote! {
        #(#errors)*
        #input
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn expand(attr: proc_macro2::TokenStream, item: proc_macro2::TokenStream) -> String {
        expand_repository_marker(attr, item).to_string()
    }

    #[test]
    fn test_unit_enum_passes_through() {
        let item = quote! {
            #[derive(Debug)]
            pub enum Status { Active, Retired }
        };
        let out = expand(quote! {}, item.clone());

        assert!(!out.contains("compile_error"));
        assert_eq!(out, item.to_string());
    }

    #[test]
    fn test_arguments_rejected() {
        let out = expand(quote! { strict }, quote! { enum Status { Active } });

        assert!(out.contains("compile_error"));
        assert!(out.contains("takes no arguments"));
        assert!(out.contains("enum Status"));
    }

    #[test]
    fn test_non_enum_rejected() {
        let out = expand(quote! {}, quote! { struct Status { code: u8 } });

        assert!(out.contains("compile_error"));
        assert!(out.contains("can only be applied to enums"));
        assert!(out.contains("struct Status"));
    }

    #[test]
    fn test_generic_enum_rejected() {
        let out = expand(quote! {}, quote! { enum Wrapper<T> { Empty } });

        assert!(out.contains("compile_error"));
        assert!(out.contains("must not be generic"));
    }

    #[test]
    fn test_data_variant_rejected() {
        let out = expand(quote! {}, quote! { enum Shape { Point, Circle(u32) } });

        assert!(out.contains("compile_error"));
        assert!(out.contains("Shape::Circle"));
    }

    #[test]
    fn test_unparsable_item_reports_parse_error() {
        let out = expand(quote! {}, quote! { enum });

        assert!(out.contains("compile_error"));
    }
}

//! Marker detection and enum shape checks.
//!
//! Shared with the `#[correlation_repository]` attribute so that misuse is
//! reported at compile time with the same wording the generator uses.

use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, Fields, Ident, ItemEnum};

use crate::AnalysisError;

/// An [`AnalysisError`] together with the span it points at.
#[derive(Debug)]
pub struct ShapeError {
    /// What is wrong with the enum
    pub error: AnalysisError,
    /// Where it is wrong
    pub span: Span,
}

impl ShapeError {
    /// Render as a `compile_error!` invocation at the offending span.
    pub fn to_compile_error(&self) -> proc_macro2::TokenStream {
        syn::Error::new(self.span, self.error.to_string()).to_compile_error()
    }
}

impl From<ShapeError> for AnalysisError {
    fn from(err: ShapeError) -> Self { err.error }
}

/// Whether any attribute's last path segment equals `marker`.
///
/// Both `#[correlation_repository]` and
/// `#[correlation::correlation_repository]` match.
pub fn has_marker(attrs: &[Attribute], marker: &str) -> bool {
    attrs.iter().any(|attr| attr.path().segments.last().is_some_and(|seg| seg.ident == marker))
}

/// Check that a marked enum can back a repository and return its variants.
///
/// The enum must not be generic and every variant must be a unit variant:
/// the generated code lists every constant in a `static`, which is only
/// possible when each variant can be named without data.
pub fn check_marked_enum(item: &ItemEnum) -> Result<Vec<Ident>, ShapeError> {
    let enum_name = item.ident.to_string();

    if !item.generics.params.is_empty() {
        let span = item.generics.span();
        return Err(ShapeError {
            error: AnalysisError::GenericEnum { enum_name, line: span.start().line },
            span,
        });
    }

    let mut variants = Vec::with_capacity(item.variants.len());
    for variant in &item.variants {
        if !matches!(variant.fields, Fields::Unit) {
            let span = variant.span();
            return Err(ShapeError {
                error: AnalysisError::NonUnitVariant {
                    enum_name,
                    variant: variant.ident.to_string(),
                    line: span.start().line,
                },
                span,
            });
        }
        variants.push(variant.ident.clone());
    }

    Ok(variants)
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn test_has_marker() {
        let item: ItemEnum = parse_quote! {
            #[derive(Debug)]
            #[correlation::correlation_repository]
            enum Marked { A }
        };
        assert!(has_marker(&item.attrs, "correlation_repository"));
        assert!(!has_marker(&item.attrs, "repository"));

        let plain: ItemEnum = parse_quote! {
            #[derive(Debug)]
            enum Plain { A }
        };
        assert!(!has_marker(&plain.attrs, "correlation_repository"));
    }

    #[test]
    fn test_unit_variants_accepted() {
        let item: ItemEnum = parse_quote! {
            enum Planet { Mercury, Venus = 2, Earth }
        };
        let variants = check_marked_enum(&item).expect("unit enum should pass");
        let names: Vec<String> = variants.iter().map(|v| v.to_string()).collect();
        assert_eq!(names, vec!["Mercury", "Venus", "Earth"]);
    }

    #[test]
    fn test_empty_enum_accepted() {
        let item: ItemEnum = parse_quote! { enum Never {} };
        assert!(check_marked_enum(&item).expect("empty enum should pass").is_empty());
    }

    #[test]
    fn test_tuple_variant_rejected() {
        let item: ItemEnum = parse_quote! {
            enum Shape { Point, Circle(f64) }
        };
        let err = check_marked_enum(&item).expect_err("tuple variant should fail");
        match err.error {
            AnalysisError::NonUnitVariant { enum_name, variant, .. } => {
                assert_eq!(enum_name, "Shape");
                assert_eq!(variant, "Circle");
            }
            other => panic!("Expected NonUnitVariant, got {:?}", other),
        }
    }

    #[test]
    fn test_struct_variant_rejected() {
        let item: ItemEnum = parse_quote! {
            enum Shape { Rect { w: u32, h: u32 } }
        };
        assert!(check_marked_enum(&item).is_err());
    }

    #[test]
    fn test_generic_enum_rejected() {
        let item: ItemEnum = parse_quote! {
            enum Wrapper<T> { Empty, Phantom }
        };
        let err = check_marked_enum(&item).expect_err("generic enum should fail");
        assert!(matches!(err.error, AnalysisError::GenericEnum { .. }));
        assert!(err.to_compile_error().to_string().contains("compile_error"));
    }
}

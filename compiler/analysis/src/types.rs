//! Return type normalisation.
//!
//! Index maps live in `static`s and key on values read from `'static`
//! constants, so every lifetime in a getter's return type can be widened to
//! `'static`. `Self` is replaced by the enum name because the generated code
//! sits outside the enum's `impl` blocks.

use proc_macro2::Span;
use quote::ToTokens;
use syn::visit_mut::{self, VisitMut};
use syn::{Ident, Lifetime, Type, TypePath, TypeReference};

struct ReturnTypeNormalizer<'a> {
    enum_ident: &'a Ident,
    unnameable: bool,
}

impl VisitMut for ReturnTypeNormalizer<'_> {
    fn visit_type_mut(&mut self, ty: &mut Type) {
        if matches!(ty, Type::ImplTrait(_) | Type::Infer(_)) {
            self.unnameable = true;
            return;
        }
        visit_mut::visit_type_mut(self, ty);
    }

    fn visit_type_reference_mut(&mut self, reference: &mut TypeReference) {
        if reference.lifetime.is_none() {
            reference.lifetime = Some(Lifetime::new("'static", Span::call_site()));
        }
        visit_mut::visit_type_reference_mut(self, reference);
    }

    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        if lifetime.ident != "static" {
            lifetime.ident = Ident::new("static", lifetime.ident.span());
        }
    }

    fn visit_type_path_mut(&mut self, path: &mut TypePath) {
        if path.qself.is_none() {
            if let Some(first) = path.path.segments.first_mut() {
                if first.ident == "Self" {
                    first.ident = self.enum_ident.clone();
                }
            }
        }
        visit_mut::visit_type_path_mut(self, path);
    }
}

/// Render a getter return type as it will appear in generated code.
///
/// Returns `None` when the type contains `impl Trait` or `_`, which cannot
/// be spelled as a map key type.
pub fn normalize_return_type(ty: &Type, enum_ident: &Ident) -> Option<String> {
    let mut ty = ty.clone();
    let mut normalizer = ReturnTypeNormalizer { enum_ident, unnameable: false };
    normalizer.visit_type_mut(&mut ty);
    if normalizer.unnameable {
        return None;
    }
    Some(tidy_type_tokens(&ty.to_token_stream().to_string()))
}

/// Whether a rendered type mentions `f32` or `f64` anywhere.
pub fn contains_float(ty: &str) -> bool {
    ty.split(|c: char| !(c.is_alphanumeric() || c == '_')).any(|word| word == "f32" || word == "f64")
}

/// Collapse token-stream spacing into the way types are normally written.
///
/// `& 'static str` becomes `&'static str`, `Option < Vec < u8 > >` becomes
/// `Option<Vec<u8>>` and `(u8 , u16)` becomes `(u8, u16)`.
pub fn tidy_type_tokens(tokens: &str) -> String {
    let mut out = String::with_capacity(tokens.len());
    let mut prev: Option<&str> = None;

    for token in tokens.split_whitespace() {
        if let Some(prev) = prev {
            if needs_space(prev, token) {
                out.push(' ');
            }
        }
        out.push_str(token);
        prev = Some(token);
    }

    out
}

fn needs_space(prev: &str, next: &str) -> bool {
    if matches!(prev, "<" | "(" | "[" | "&" | "::" | "*" | "!") || prev.ends_with("::") {
        return false;
    }
    if matches!(next, ">" | "," | ";" | ")" | "]" | "::" | "<") || next.starts_with("::") {
        return false;
    }
    if next.starts_with('(') {
        // `Fn (u8)` and `fn (u8)` but not `&'static (u8, u16)`
        return !(prev.starts_with(|c: char| c.is_alphanumeric() || c == '_'));
    }
    true
}

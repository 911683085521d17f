//! Getter recognition.
//!
//! A getter is a method whose name starts with the configured prefix, whose
//! only input is `&self`, and which returns a value. Everything else in an
//! `impl` block is ignored.

use ir::{AccessorDescriptor, NamingConventions};
use syn::spanned::Spanned;
use syn::{FnArg, GenericParam, Ident, ImplItemFn, ReturnType, Type};

use crate::types::{contains_float, normalize_return_type};
use crate::{AnalysisError, Result};

fn skip(enum_ident: &Ident, method: &str, reason: &str) -> Result<Option<AccessorDescriptor>> {
    tracing::debug!("skipping `{}::{}`: {}", enum_ident, method, reason);
    Ok(None)
}

fn takes_only_shared_self(method: &ImplItemFn) -> bool {
    let mut inputs = method.sig.inputs.iter();
    let receiver = match (inputs.next(), inputs.next()) {
        (Some(FnArg::Receiver(receiver)), None) => receiver,
        _ => return false,
    };
    matches!(&*receiver.ty, Type::Reference(r) if r.mutability.is_none())
}

/// Turn a method into an accessor descriptor if it looks like a getter.
///
/// Returns `Ok(None)` for methods that are not getters. Fails when a
/// getter's return type cannot be named or cannot be hashed.
pub fn accessor_from_method(
    method: &ImplItemFn,
    enum_ident: &Ident,
    naming: &NamingConventions,
) -> Result<Option<AccessorDescriptor>> {
    let method_name = method.sig.ident.to_string();
    let Some(field_name) = naming.field_name(&method_name) else {
        return Ok(None);
    };

    if method.sig.asyncness.is_some() {
        return skip(enum_ident, &method_name, "async");
    }
    if method.sig.unsafety.is_some() {
        return skip(enum_ident, &method_name, "unsafe");
    }
    if method.sig.generics.params.iter().any(|p| !matches!(p, GenericParam::Lifetime(_))) {
        return skip(enum_ident, &method_name, "generic");
    }
    if !takes_only_shared_self(method) {
        return skip(enum_ident, &method_name, "not a `&self`-only method");
    }

    let ty = match &method.sig.output {
        ReturnType::Default => return skip(enum_ident, &method_name, "returns `()`"),
        ReturnType::Type(_, ty) => ty,
    };
    if matches!(&**ty, Type::Tuple(t) if t.elems.is_empty()) {
        return skip(enum_ident, &method_name, "returns `()`");
    }

    let return_type = normalize_return_type(ty, enum_ident).ok_or_else(|| {
        AnalysisError::UnnameableReturnType {
            enum_name: enum_ident.to_string(),
            method: method_name.clone(),
            line: ty.span().start().line,
        }
    })?;
    if contains_float(&return_type) {
        return Err(AnalysisError::UnhashableReturnType {
            enum_name: enum_ident.to_string(),
            method: method_name,
            ty: return_type,
            line: ty.span().start().line,
        });
    }

    tracing::trace!("getter `{}::{}` -> {}", enum_ident, method_name, return_type);
    Ok(Some(AccessorDescriptor::new(method_name.clone(), field_name.to_string(), return_type)))
}

use ir::{EnumModel, IndexField, LookupDef, NamingConventions};

/// Parameter name of every generated lookup.
pub const LOOKUP_PARAM: &str = "code";

const STRING_PATHS: [&str; 3] = ["String", "std::string::String", "::std::string::String"];

/// Parameter type for a lookup over keys of type `key_type`.
///
/// `&'static T` keys are looked up with a `&T` and `String` keys with a
/// `&str`, so callers can pass borrowed runtime values. Every other key is
/// taken by value. The flag tells whether the parameter is already a borrow.
pub fn lookup_param_type(key_type: &str) -> (String, bool) {
    if STRING_PATHS.contains(&key_type) {
        return ("&str".to_string(), true);
    }
    match key_type.strip_prefix("&'static ") {
        Some(rest) if !rest.starts_with("mut ") => (format!("&{}", rest), true),
        _ => (key_type.to_string(), false),
    }
}

/// One lookup per index, in index order.
pub fn make_lookups(
    indexes: &[IndexField],
    model: &EnumModel,
    naming: &NamingConventions,
) -> Vec<LookupDef> {
    let lookups: Vec<LookupDef> = indexes
        .iter()
        .map(|index| {
            let (param_type, borrowed) = lookup_param_type(&index.key_type);
            LookupDef {
                fn_name: naming.lookup_name(&index.accessor.field_name),
                param_name: LOOKUP_PARAM.to_string(),
                param_type,
                borrowed,
                index: index.static_name.clone(),
            }
        })
        .collect();

    tracing::trace!(
        "{}: lookups {}",
        model.qualified_name(),
        lookups.iter().map(|l| l.fn_name.as_str()).collect::<Vec<_>>().join(", ")
    );
    lookups
}

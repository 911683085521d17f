use ir::{EnumModel, IndexField, NamingConventions};

use crate::utils::to_screaming_snake_case;

/// Name of the static holding every constant of `enum_name`.
pub fn variants_static_name(enum_name: &str) -> String {
    format!("{}_VARIANTS", to_screaming_snake_case(enum_name))
}

/// One index per accessor, in accessor order.
///
/// Statics are prefixed with the enum name so several repositories can be
/// included into the same module.
pub fn make_indexes(model: &EnumModel, naming: &NamingConventions) -> Vec<IndexField> {
    let prefix = to_screaming_snake_case(&model.name);
    model
        .accessors
        .iter()
        .map(|accessor| IndexField {
            static_name: format!(
                "{}_{}{}",
                prefix,
                to_screaming_snake_case(&accessor.field_name),
                naming.index_suffix
            ),
            key_type: accessor.return_type.clone(),
            accessor: accessor.clone(),
        })
        .collect()
}

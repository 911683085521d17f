//! Repository planning and rendering.
//!
//! The rendered file is meant to be `include!`d in the module that declares
//! the enum, so it refers to the enum and its getters by bare name and spells
//! out every std path.

use std::collections::HashMap;

use ir::{EnumModel, NamingConventions, RepositoryDef};

use crate::generators::doc_comment::{lookup_docs, repository_docs};
use crate::generators::{make_indexes, make_lookups, variants_static_name};
use crate::utils::{module_file_name, to_snake_case};
use crate::{CodeGenerator, CodegenError, Result};

/// Lower an enum model into everything needed to render its repository.
pub fn plan_repository(model: &EnumModel, naming: &NamingConventions) -> RepositoryDef {
    let indexes = make_indexes(model, naming);
    let lookups = make_lookups(&indexes, model, naming);
    RepositoryDef {
        name: naming.repository_name(&model.name),
        visibility: model.visibility.clone(),
        enum_name: model.name.clone(),
        variants: model.variants.clone(),
        variants_static: variants_static_name(&model.name),
        indexes,
        lookups,
        module_path: model.module_path.clone(),
    }
}

/// Relative path of the file generated for `model`.
///
/// Nested enums get one directory per enclosing module, e.g.
/// `catalog/v1/planet_repository.rs`.
pub fn repository_file_name(model: &EnumModel) -> String {
    module_file_name(&model.module_path, &format!("{}_repository", to_snake_case(&model.name)))
}

fn visibility_prefix(visibility: &str) -> String {
    if visibility.is_empty() {
        String::new()
    } else {
        format!("{} ", visibility)
    }
}

/// Render a planned repository as Rust source.
pub fn render_repository(def: &RepositoryDef, source: Option<&str>) -> String {
    let enum_name = &def.enum_name;
    let mut out = String::from("// @generated by correlation-codegen. Do not edit.\n");
    if let Some(source) = source {
        out.push_str(&format!("// Source: {}\n", source));
    }
    out.push('\n');

    /* ---------- constants ---------- */
    let variants = def
        .variants
        .iter()
        .map(|variant| format!("    {}::{},\n", enum_name, variant))
        .collect::<String>();
    out.push_str(&format!(
        "#[allow(dead_code)]\nstatic {name}: [{enum_name}; {len}] = [\n{variants}];\n\n",
        name = def.variants_static,
        enum_name = enum_name,
        len = def.variants.len(),
        variants = variants,
    ));

    /* ---------- indexes ---------- */
    for index in &def.indexes {
        out.push_str(&format!(
            r#"#[allow(dead_code)]
static {name}: ::std::sync::LazyLock<
    ::std::collections::HashMap<{key}, &'static {enum_name}>,
> = ::std::sync::LazyLock::new(|| {{
    {variants_static}
        .iter()
        .map(|constant| (constant.{getter}(), constant))
        .collect()
}});

"#,
            name = index.static_name,
            key = index.key_type,
            enum_name = enum_name,
            variants_static = def.variants_static,
            getter = index.accessor.method_name,
        ));
    }

    /* ---------- repository type ---------- */
    out.push_str(&repository_docs(def, source));
    out.push_str(&format!("{}struct {};\n", visibility_prefix(&def.visibility), def.name));

    /* ---------- lookups ---------- */
    // lookups[i] reads indexes[i]; `plan_repository` builds them pairwise
    debug_assert_eq!(def.lookups.len(), def.indexes.len());
    if !def.lookups.is_empty() {
        out.push_str(&format!("\n#[allow(dead_code)]\nimpl {} {{\n", def.name));
        for (i, (lookup, index)) in def.lookups.iter().zip(&def.indexes).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let key = if lookup.borrowed {
                lookup.param_name.clone()
            } else {
                format!("&{}", lookup.param_name)
            };
            out.push_str(&lookup_docs(enum_name, lookup, index));
            out.push_str(&format!(
                r#"    pub fn {fn_name}({param}: {param_ty}) -> Option<&'static {enum_name}> {{
        {index}.get({key}).copied()
    }}
"#,
                fn_name = lookup.fn_name,
                param = lookup.param_name,
                param_ty = lookup.param_type,
                enum_name = enum_name,
                index = lookup.index,
                key = key,
            ));
        }
        out.push_str("}\n");
    }

    out
}

/// Emits one repository file per marked enum.
#[derive(Debug, Clone, Default)]
pub struct RepositoryGenerator {
    naming: NamingConventions,
}

impl RepositoryGenerator {
    /// Create a generator with the given naming conventions
    pub fn new(naming: NamingConventions) -> Self { Self { naming } }
}

impl CodeGenerator for RepositoryGenerator {
    fn generate(&self, enums: &[EnumModel]) -> Vec<(String, String)> {
        enums
            .iter()
            .map(|model| {
                let def = plan_repository(model, &self.naming);
                let source = model.source.as_ref().map(|p| p.display().to_string());
                let rendered = render_repository(&def, source.as_deref());
                tracing::debug!(
                    "{} -> {} ({} lookup(s))",
                    model.qualified_name(),
                    def.name,
                    def.lookups.len()
                );
                (repository_file_name(model), rendered)
            })
            .collect()
    }

    fn validate(&self, enums: &[EnumModel]) -> Result<()> {
        let mut files: HashMap<String, String> = HashMap::new();
        for model in enums {
            let file = repository_file_name(model);
            let qualified = model.qualified_name();
            if let Some(first) = files.get(&file) {
                return Err(CodegenError::FileCollision {
                    file,
                    first: first.clone(),
                    second: qualified,
                });
            }
            files.insert(file, qualified.clone());

            // `get_f` and `get_F` would both become `<ENUM>_F_INDEX`
            let mut statics: HashMap<String, String> = HashMap::new();
            for index in make_indexes(model, &self.naming) {
                if let Some(first) = statics.get(&index.static_name) {
                    return Err(CodegenError::IndexCollision {
                        enum_name: qualified,
                        index: index.static_name,
                        first: first.clone(),
                        second: index.accessor.method_name,
                    });
                }
                statics.insert(index.static_name, index.accessor.method_name);
            }
        }
        Ok(())
    }
}

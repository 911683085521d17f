//! Walks a parsed file and builds an [`EnumModel`] per marked enum.

use ir::{EnumModel, NamingConventions};
use quote::ToTokens;
use syn::{File, Ident, ImplItem, Item, ItemEnum, ItemImpl, Type};

use crate::getter::accessor_from_method;
use crate::shape::{check_marked_enum, has_marker};
use crate::types::tidy_type_tokens;
use crate::Result;

/// Source scanner parameterised by naming conventions.
#[derive(Debug, Clone)]
pub struct SourceScanner<'a> {
    naming: &'a NamingConventions,
}

impl<'a> SourceScanner<'a> {
    /// Create a scanner using `naming`
    pub fn new(naming: &'a NamingConventions) -> Self { Self { naming } }

    /// Scan every item of `file`, descending into inline modules.
    pub fn scan_file(&self, file: &File) -> Result<Vec<EnumModel>> {
        let mut models = Vec::new();
        let mut module_path = Vec::new();
        self.scan_items(&file.items, &mut module_path, &mut models)?;
        Ok(models)
    }

    fn scan_items(
        &self,
        items: &[Item],
        module_path: &mut Vec<String>,
        models: &mut Vec<EnumModel>,
    ) -> Result<()> {
        for item in items {
            match item {
                Item::Enum(item_enum)
                    if has_marker(&item_enum.attrs, &self.naming.marker_attribute) =>
                {
                    let model = self.model_enum(item_enum, items, module_path)?;
                    models.push(model);
                }
                Item::Mod(item_mod) => {
                    if let Some((_, content)) = &item_mod.content {
                        module_path.push(item_mod.ident.to_string());
                        self.scan_items(content, module_path, models)?;
                        module_path.pop();
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn model_enum(
        &self,
        item_enum: &ItemEnum,
        siblings: &[Item],
        module_path: &[String],
    ) -> Result<EnumModel> {
        let variants = check_marked_enum(item_enum)?;
        let enum_ident = &item_enum.ident;

        let mut accessors = Vec::new();
        for item_impl in inherent_impls(siblings, enum_ident) {
            for impl_item in &item_impl.items {
                if let ImplItem::Fn(method) = impl_item {
                    if let Some(accessor) = accessor_from_method(method, enum_ident, self.naming)? {
                        accessors.push(accessor);
                    }
                }
            }
        }

        tracing::debug!(
            "enum `{}`: {} variant(s), {} getter(s)",
            enum_ident,
            variants.len(),
            accessors.len()
        );

        let mut model = EnumModel::new(
            enum_ident.to_string(),
            variants.iter().map(Ident::to_string).collect(),
            accessors,
        );
        model.visibility = tidy_type_tokens(&item_enum.vis.to_token_stream().to_string());
        model.module_path = module_path.to_vec();
        Ok(model)
    }
}

/// Inherent `impl` blocks in `items` whose self type names `enum_ident`.
fn inherent_impls<'i>(
    items: &'i [Item],
    enum_ident: &'i Ident,
) -> impl Iterator<Item = &'i ItemImpl> {
    items.iter().filter_map(move |item| match item {
        Item::Impl(item_impl)
            if item_impl.trait_.is_none()
                && item_impl.generics.params.is_empty()
                && self_type_is(&item_impl.self_ty, enum_ident) =>
        {
            Some(item_impl)
        }
        _ => None,
    })
}

fn self_type_is(ty: &Type, ident: &Ident) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|seg| seg.ident == *ident && seg.arguments.is_empty()),
        Type::Paren(paren) => self_type_is(&paren.elem, ident),
        _ => false,
    }
}

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Correlation source analysis
//!
//! Parses Rust source with `syn`, selects enums carrying the marker attribute
//! and collects the getters declared on them in inherent `impl` blocks of the
//! same module. The result is a list of [`ir::EnumModel`]s ready for code
//! generation.

use std::path::Path;

use ir::{EnumModel, NamingConventions};
use thiserror::Error;

pub mod getter;
pub mod scanner;
pub mod shape;
pub mod types;
pub mod validator;

pub use getter::accessor_from_method;
pub use scanner::SourceScanner;
pub use shape::{check_marked_enum, has_marker, ShapeError};
pub use types::{contains_float, normalize_return_type, tidy_type_tokens};
pub use validator::{ModelValidator, ValidationReport};

/// Errors produced while analysing a source file.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The file is not valid Rust.
    #[error("failed to parse source: {error}")]
    Parse {
        /// Line of the parse error
        line: usize,
        /// Underlying parser error
        #[source]
        error: syn::Error,
    },
    /// Marked enums cannot be generic.
    #[error("enum `{enum_name}` has generic parameters; marked enums must not be generic")]
    GenericEnum {
        /// Enum identifier
        enum_name: String,
        /// Line of the generics
        line: usize,
    },
    /// Marked enums can only hold unit variants.
    #[error("variant `{enum_name}::{variant}` carries data; marked enums may only have unit variants")]
    NonUnitVariant {
        /// Enum identifier
        enum_name: String,
        /// Offending variant
        variant: String,
        /// Line of the variant
        line: usize,
    },
    /// A getter returns a type that cannot be named as a map key.
    #[error("getter `{enum_name}::{method}` returns `impl Trait`, which cannot be used as an index key type")]
    UnnameableReturnType {
        /// Enum identifier
        enum_name: String,
        /// Getter name
        method: String,
        /// Line of the return type
        line: usize,
    },
    /// A getter returns a float, which has no `Hash` or `Eq` impl.
    #[error("getter `{enum_name}::{method}` returns `{ty}`; floating point values cannot be index keys")]
    UnhashableReturnType {
        /// Enum identifier
        enum_name: String,
        /// Getter name
        method: String,
        /// Normalized return type
        ty: String,
        /// Line of the return type
        line: usize,
    },
}

impl AnalysisError {
    /// One-based source line the error points at.
    pub fn line(&self) -> usize {
        match self {
            AnalysisError::Parse { line, .. }
            | AnalysisError::GenericEnum { line, .. }
            | AnalysisError::NonUnitVariant { line, .. }
            | AnalysisError::UnnameableReturnType { line, .. }
            | AnalysisError::UnhashableReturnType { line, .. } => *line,
        }
    }
}

/// Convenient result type for analysis functions in this crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Module path a file contributes to the enums it declares.
///
/// `billing.rs` gives `billing`, `billing/mod.rs` gives `billing`, and crate
/// roots (`lib.rs`, `main.rs`) give nothing.
pub fn file_module_path(origin: &Path) -> Vec<String> {
    let Some(stem) = origin.file_stem().and_then(|stem| stem.to_str()) else {
        return Vec::new();
    };
    match stem {
        "lib" | "main" => Vec::new(),
        "mod" => origin
            .parent()
            .and_then(|parent| parent.file_name())
            .and_then(|name| name.to_str())
            .map(|name| vec![name.to_string()])
            .unwrap_or_default(),
        other => vec![other.to_string()],
    }
}

/// Analyse one source file.
///
/// `origin` is recorded on every returned model and used in log lines; the
/// file is not read from disk. Its [`file_module_path`] is prepended to every
/// model's module path, so same-named enums in different files stay apart.
pub fn analyze_source(
    source: &str,
    origin: &Path,
    naming: &NamingConventions,
) -> Result<Vec<EnumModel>> {
    let file = syn::parse_file(source).map_err(|error| AnalysisError::Parse {
        line: error.span().start().line,
        error,
    })?;

    let models = SourceScanner::new(naming).scan_file(&file)?;
    tracing::info!("{}: {} marked enum(s)", origin.display(), models.len());

    let file_module = file_module_path(origin);
    Ok(models
        .into_iter()
        .map(|mut model| {
            model.source = Some(origin.to_path_buf());
            let inline = std::mem::take(&mut model.module_path);
            model.module_path = file_module.iter().cloned().chain(inline).collect();
            model
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    const ANNOTATED: &str = r#"
        #[correlation_repository]
        pub enum AnnotatedClass {
            First,
            Second,
        }

        impl AnnotatedClass {
            pub fn get_f(&self) -> i64 {
                match self {
                    AnnotatedClass::First => 1,
                    AnnotatedClass::Second => 2,
                }
            }

            pub fn get_s(&self) -> &str {
                match self {
                    AnnotatedClass::First => "10",
                    AnnotatedClass::Second => "20",
                }
            }
        }
    "#;

    #[test]
    fn test_analyze_source() {
        let models =
            analyze_source(ANNOTATED, Path::new("src/model.rs"), &NamingConventions::default())
                .expect("source should analyse");

        assert_eq!(models.len(), 1);
        let model = &models[0];
        assert_eq!(model.name, "AnnotatedClass");
        assert_eq!(model.qualified_name(), "model::AnnotatedClass");
        assert_eq!(model.variants, vec!["First".to_string(), "Second".to_string()]);
        assert_eq!(model.source, Some(PathBuf::from("src/model.rs")));

        let fields: Vec<&str> = model.accessors.iter().map(|a| a.field_name.as_str()).collect();
        assert_eq!(fields, vec!["f", "s"]);
        assert_eq!(model.accessors[0].return_type, "i64");
        assert_eq!(model.accessors[1].return_type, "&'static str");
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = analyze_source(
            "enum Broken {\n    A,\n    B(\n}\n",
            Path::new("broken.rs"),
            &NamingConventions::default(),
        )
        .expect_err("invalid source should fail");

        assert!(matches!(err, AnalysisError::Parse { .. }));
        assert!(err.line() >= 1);
    }

    #[test]
    fn test_file_module_path() {
        assert_eq!(file_module_path(Path::new("src/billing.rs")), vec!["billing".to_string()]);
        assert_eq!(file_module_path(Path::new("src/billing/mod.rs")), vec!["billing".to_string()]);
        assert!(file_module_path(Path::new("src/lib.rs")).is_empty());
        assert!(file_module_path(Path::new("main.rs")).is_empty());
    }

    #[test]
    fn test_same_enum_in_two_files_gets_distinct_paths() {
        let source = "#[correlation_repository]\npub enum Status { A }\n";
        let naming = NamingConventions::default();
        let billing = analyze_source(source, Path::new("src/billing.rs"), &naming)
            .expect("billing should analyse");
        let shipping = analyze_source(source, Path::new("src/shipping.rs"), &naming)
            .expect("shipping should analyse");

        assert_eq!(billing[0].qualified_name(), "billing::Status");
        assert_eq!(shipping[0].qualified_name(), "shipping::Status");
    }

    #[test]
    fn test_float_getter_reports_line() {
        let source = "#[correlation_repository]\npub enum Tax { Low }\n\nimpl Tax {\n    fn get_rate(&self) -> f64 { 0.1 }\n}\n";
        let err = analyze_source(source, Path::new("tax.rs"), &NamingConventions::default())
            .expect_err("float key should fail");

        match &err {
            AnalysisError::UnhashableReturnType { enum_name, method, ty, .. } => {
                assert_eq!(enum_name, "Tax");
                assert_eq!(method, "get_rate");
                assert_eq!(ty, "f64");
            }
            other => panic!("Expected UnhashableReturnType, got {:?}", other),
        }
        assert_eq!(err.line(), 5);
    }

    #[test]
    fn test_unmarked_source_yields_nothing() {
        let models = analyze_source(
            "pub enum Plain { A }\nimpl Plain { fn get_x(&self) -> u8 { 0 } }",
            Path::new("plain.rs"),
            &NamingConventions::default(),
        )
        .expect("source should analyse");
        assert!(models.is_empty());
    }
}

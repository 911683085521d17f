//! Model validation
//!
//! Cross-checks the models gathered from every input before code generation.
//! Problems that would make the generated code fail to compile are errors;
//! suspicious but harmless input is reported as a warning.

use std::collections::HashMap;

use ir::EnumModel;

/// Outcome of [`ModelValidator::validate`].
#[derive(Debug, Default, Clone)]
pub struct ValidationReport {
    /// Problems that stop generation
    pub errors: Vec<String>,
    /// Problems worth logging
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Whether generation may proceed
    pub fn is_ok(&self) -> bool { self.errors.is_empty() }
}

/// Model validator
#[derive(Debug, Default)]
pub struct ModelValidator;

impl ModelValidator {
    /// Create a new model validator
    pub fn new() -> Self { Self }

    /// Validate models collected from one or more files.
    pub fn validate(&self, models: &[EnumModel]) -> ValidationReport {
        let mut report = ValidationReport::default();

        // 1) The same enum may not be marked in two inputs: both would be
        //    written to the same generated file.
        let mut seen: HashMap<String, &EnumModel> = HashMap::new();
        for model in models {
            let qualified = model.qualified_name();
            if let Some(first) = seen.get(&qualified) {
                report.errors.push(format!(
                    "Duplicate marked enum `{}` (in {} and {})",
                    qualified,
                    describe_source(first),
                    describe_source(model)
                ));
            } else {
                seen.insert(qualified, model);
            }
        }

        // 2) A repository with no getters or no variants is legal but useless.
        for model in models {
            if model.accessors.is_empty() {
                report.warnings.push(format!(
                    "Enum `{}` has no getters; its repository will have no lookups",
                    model.qualified_name()
                ));
            }
            if model.variants.is_empty() {
                report.warnings.push(format!(
                    "Enum `{}` has no variants; every lookup will return None",
                    model.qualified_name()
                ));
            }
        }

        report
    }
}

fn describe_source(model: &EnumModel) -> String {
    model
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<unknown>".to_string())
}

//! Pipeline orchestration for the main entry points.
//!
//! This module coordinates analysis, validation, code generation and writing.

use std::fs;
use std::path::{Path, PathBuf};

use analysis::ModelValidator;
use codegen::{CodeGenerator, RepositoryGenerator};
use config::{Config, LoggingConfig};
use ir::{EnumModel, NamingConventions, RepositoryIR, IR_VERSION};

use crate::{PipelineError, Result};

/// Install the stderr subscriber at the configured level.
///
/// `CORRELATION_LOG` overrides the level when set.
pub fn init_logging(config: &LoggingConfig) { logging::init(&config.level) }

/// Run the whole pipeline for the inputs named in `config`.
///
/// # Returns
///
/// The paths of every generated file, including ones left untouched because
/// their content did not change.
pub fn compile(config: &Config) -> Result<Vec<PathBuf>> {
    let models = analyze_inputs(&config.codegen.inputs, &config.naming)?;
    generate_into(&models, &config.codegen.output_dir, &config.naming, config.codegen.format)
}

/// Generate repositories from an IR file written by [`dump_ir`].
///
/// The models are validated again, since the file may have been edited.
pub fn compile_from_ir(
    ir_path: &Path,
    out_dir: &Path,
    naming: &NamingConventions,
    format: bool,
) -> Result<Vec<PathBuf>> {
    let ir = RepositoryIR::from_file(ir_path)
        .map_err(|source| PipelineError::Read { path: ir_path.to_path_buf(), source })?;
    if ir.version() != IR_VERSION {
        tracing::warn!(
            "{} was written for IR {}, this build reads {}",
            ir_path.display(),
            ir.version(),
            IR_VERSION
        );
    }

    let models = ir.enums();
    validate_models(models)?;
    generate_into(models, out_dir, naming, format)
}

/// Analyse every input file and validate the combined result.
pub fn analyze_inputs(inputs: &[PathBuf], naming: &NamingConventions) -> Result<Vec<EnumModel>> {
    if inputs.is_empty() {
        tracing::warn!("no input files given");
    }

    let mut models = Vec::new();
    for path in inputs {
        let source = fs::read_to_string(path)
            .map_err(|source| PipelineError::Read { path: path.clone(), source })?;
        let found = analysis::analyze_source(&source, path, naming)
            .map_err(|error| PipelineError::Analysis { path: path.clone(), error })?;
        models.extend(found);
    }

    validate_models(&models)?;
    Ok(models)
}

fn validate_models(models: &[EnumModel]) -> Result<()> {
    let report = ModelValidator::new().validate(models);
    for warning in &report.warnings {
        tracing::warn!("{}", warning);
    }
    if !report.is_ok() {
        return Err(PipelineError::Validation(report.errors));
    }
    Ok(())
}

/// Generate and write repositories for already analysed models.
pub fn generate_into(
    models: &[EnumModel],
    out_dir: &Path,
    naming: &NamingConventions,
    format: bool,
) -> Result<Vec<PathBuf>> {
    let generator = RepositoryGenerator::new(naming.clone());
    generator.validate(models)?;

    let files = generator.generate(models);
    let written = codegen::write_generated(out_dir, &files, format)?;
    tracing::info!("{} repositor(ies) in {}", written.len(), out_dir.display());

    Ok(written)
}

/// Analyse `inputs` into an IR document.
pub fn analyze_ir(inputs: &[PathBuf], naming: &NamingConventions) -> Result<RepositoryIR> {
    Ok(RepositoryIR::new(analyze_inputs(inputs, naming)?))
}

/// Analyse `inputs` and return the models as pretty-printed IR JSON.
pub fn dump_ir(inputs: &[PathBuf], naming: &NamingConventions) -> Result<String> {
    Ok(analyze_ir(inputs, naming)?.to_json()?)
}

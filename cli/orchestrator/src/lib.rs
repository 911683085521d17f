#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
//! Argument handling and subcommands for the `correlation` binary.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use config::{Config, ConfigError};
use thiserror::Error;

/// Errors that can occur while running a subcommand.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line parsed but cannot be run.
    #[error("{0}")]
    Usage(String),
    /// `init-config` would overwrite an existing file.
    #[error("{} already exists", .0.display())]
    Exists(PathBuf),
    /// Error loading or saving configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Error from the generation pipeline.
    #[error(transparent)]
    Pipeline(#[from] pipeline::PipelineError),
    /// I/O error while writing output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Command-line interface of the `correlation` binary.
#[derive(Parser, Debug)]
#[command(
    name = "correlation",
    about = "Generate lookup repositories for marked Rust enums",
    version,
    after_help = "EXAMPLES:\n    correlation generate --out src/generated src/model.rs\n    correlation dump-ir --output model.ir.json src/model.rs\n    correlation generate --ir model.ir.json --out src/generated"
)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate repositories for marked enums in INPUTS
    Generate {
        /// Load settings from this file (default: ./correlation.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write repositories to this directory
        #[arg(long)]
        out: Option<PathBuf>,
        /// Generate from an IR file written by `dump-ir` instead of parsing sources
        #[arg(long, conflicts_with = "inputs")]
        ir: Option<PathBuf>,
        /// Source files; override the config's list when given
        inputs: Vec<PathBuf>,
    },
    /// Print the analysed enums as IR JSON
    DumpIr {
        /// Load settings from this file (default: ./correlation.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write the IR to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Source files; override the config's list when given
        inputs: Vec<PathBuf>,
    },
    /// Write a default config file
    InitConfig {
        /// Target path (default: the user config path)
        path: Option<PathBuf>,
    },
}

/// Load the config for a run.
///
/// An explicit file wins; otherwise `correlation.toml` in `cwd` is used if
/// present, and defaults writing to `cwd/generated` otherwise. Relative paths
/// in a file are resolved against the file's directory.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        let mut config = Config::from_file(path)?;
        if let Some(dir) = path.parent() {
            config.resolve_relative_to(&cwd.join(dir));
        }
        return Ok(config);
    }

    match Config::find_in(cwd) {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound(_)) => {
            let mut config = Config::default();
            config.codegen.inputs.clear();
            config.codegen.output_dir = cwd.join("generated");
            Ok(config)
        }
        Err(e) => Err(e.into()),
    }
}

fn with_inputs(mut config: Config, inputs: Vec<PathBuf>) -> Result<Config> {
    if !inputs.is_empty() {
        config.codegen.inputs = inputs;
    }
    if config.codegen.inputs.is_empty() {
        return Err(CliError::Usage("no input files given".to_string()));
    }
    Ok(config)
}

fn print_paths(paths: &[PathBuf]) {
    for path in paths {
        println!("{}", path.display());
    }
}

/// Run a parsed command from `cwd`.
pub fn run(command: Command, cwd: &Path) -> Result<()> {
    match command {
        Command::Generate { config, out, ir: Some(ir), .. } => {
            let mut config = load_config(config.as_deref(), cwd)?;
            pipeline::init_logging(&config.logging);
            if let Some(out) = out {
                config.codegen.output_dir = out;
            }

            let written = pipeline::compile_from_ir(
                &cwd.join(ir),
                &config.codegen.output_dir,
                &config.naming,
                config.codegen.format,
            )?;
            print_paths(&written);
            Ok(())
        }
        Command::Generate { config, out, ir: None, inputs } => {
            let mut config = with_inputs(load_config(config.as_deref(), cwd)?, inputs)?;
            pipeline::init_logging(&config.logging);
            if let Some(out) = out {
                config.codegen.output_dir = out;
            }

            let written = pipeline::compile(&config)?;
            print_paths(&written);
            Ok(())
        }
        Command::DumpIr { config, output, inputs } => {
            let config = with_inputs(load_config(config.as_deref(), cwd)?, inputs)?;
            pipeline::init_logging(&config.logging);

            let ir = pipeline::analyze_ir(&config.codegen.inputs, &config.naming)?;
            match output {
                Some(path) => {
                    ir.to_file(&path)?;
                    tracing::info!("IR written to {}", path.display());
                }
                None => println!("{}", ir.to_json().map_err(pipeline::PipelineError::from)?),
            }
            Ok(())
        }
        Command::InitConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::default_path()?,
            };
            if path.exists() {
                return Err(CliError::Exists(path));
            }
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }

            let mut config = Config::default();
            config.codegen.output_dir = PathBuf::from("generated");
            config.save(&path)?;
            println!("Config written to {}", path.display());
            Ok(())
        }
    }
}

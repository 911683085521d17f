//! Build script entry point.
//!
//! ```no_run
//! // build.rs
//! fn main() {
//!     pipeline::Builder::new()
//!         .input("src/model.rs")
//!         .compile()
//!         .expect("repository generation failed");
//! }
//! ```

use std::path::PathBuf;

use config::{CodegenConfig, Config, LoggingConfig};
use ir::NamingConventions;

use crate::{compile, Result};

/// Configures and runs generation from a `build.rs`.
#[derive(Debug, Clone)]
pub struct Builder {
    inputs: Vec<PathBuf>,
    out_dir: Option<PathBuf>,
    naming: NamingConventions,
    format: bool,
    emit_rerun_if_changed: bool,
}

impl Default for Builder {
    fn default() -> Self { Self::new() }
}

impl Builder {
    /// Create a builder with no inputs, writing to `OUT_DIR`
    pub fn new() -> Self {
        Self {
            inputs: Vec::new(),
            out_dir: None,
            naming: NamingConventions::default(),
            format: false,
            emit_rerun_if_changed: true,
        }
    }

    /// Add one source file to scan
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.inputs.push(path.into());
        self
    }

    /// Add several source files to scan
    pub fn inputs<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.inputs.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Write generated files here instead of `OUT_DIR`
    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }

    /// Use custom naming conventions
    pub fn naming(mut self, naming: NamingConventions) -> Self {
        self.naming = naming;
        self
    }

    /// Run `rustfmt` over generated files
    pub fn format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }

    /// Print `cargo:rerun-if-changed` for every input (on by default)
    pub fn emit_rerun_if_changed(mut self, emit: bool) -> Self {
        self.emit_rerun_if_changed = emit;
        self
    }

    /// The configuration this builder would run with
    pub fn to_config(&self) -> Config {
        Config {
            logging: LoggingConfig::default(),
            codegen: CodegenConfig {
                inputs: self.inputs.clone(),
                output_dir: self.out_dir.clone().unwrap_or_else(Config::default_output_dir),
                format: self.format,
            },
            naming: self.naming.clone(),
        }
    }

    /// Generate repositories for every marked enum in the inputs.
    pub fn compile(self) -> Result<Vec<PathBuf>> {
        logging::init(&LoggingConfig::default().level);

        if self.emit_rerun_if_changed {
            for input in &self.inputs {
                println!("cargo:rerun-if-changed={}", input.display());
            }
        }

        compile(&self.to_config())
    }
}

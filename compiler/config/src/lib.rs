#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Correlation Configuration
//!
//! This crate provides configuration management for Correlation.
//! It handles loading, saving, and managing configuration files that specify:
//! - Logging configuration
//! - Code generation inputs and output directory
//! - Naming conventions for markers, getters and generated items
//!
//! Configuration is stored in TOML format and can be loaded from files or created
//! with sensible defaults. Every section except `[codegen]` may be omitted.

use std::path::{Path, PathBuf};

use ir::NamingConventions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name looked up in a project directory by [`Config::find_in`].
pub const PROJECT_CONFIG_FILE: &str = "correlation.toml";

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Configuration file was not found at the specified path
    #[error("Config file not found at: {0}")]
    NotFound(PathBuf),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Code generation settings
    pub codegen: CodegenConfig,
    /// Naming conventions
    #[serde(default)]
    pub naming: NamingConventions,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "warn".to_string() } }
}

/// Code generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// Rust source files to scan for marked enums
    #[serde(default)]
    pub inputs: Vec<PathBuf>,
    /// Where to write generated repositories
    pub output_dir: PathBuf,
    /// Run `rustfmt` over every generated file
    #[serde(default)]
    pub format: bool,
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load `correlation.toml` from `dir`.
    ///
    /// Relative input and output paths are resolved against `dir`.
    pub fn find_in<P: AsRef<Path>>(dir: P) -> Result<Self, ConfigError> {
        let path = dir.as_ref().join(PROJECT_CONFIG_FILE);
        if !path.is_file() {
            return Err(ConfigError::NotFound(path));
        }
        let mut config = Self::from_file(&path)?;
        config.resolve_relative_to(dir.as_ref());
        Ok(config)
    }

    /// Make relative input and output paths relative to `base`
    pub fn resolve_relative_to(&mut self, base: &Path) {
        for input in &mut self.codegen.inputs {
            if input.is_relative() {
                *input = base.join(&*input);
            }
        }
        if self.codegen.output_dir.is_relative() {
            self.codegen.output_dir = base.join(&self.codegen.output_dir);
        }
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/correlation/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir =
            dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("correlation");
        Ok(config_dir.join("config.toml"))
    }

    /// Get the default output directory for generated code
    pub fn default_output_dir() -> PathBuf {
        Self::default_output_dir_internal(
            std::env::var("OUT_DIR").ok(),
            std::env::current_dir().ok(),
        )
    }

    /// Internal function for testing - allows injection of environment values
    fn default_output_dir_internal(
        out_dir: Option<String>,
        current_dir: Option<PathBuf>,
    ) -> PathBuf {
        // Build scripts get OUT_DIR from Cargo
        if let Some(out_dir) = out_dir {
            return PathBuf::from(out_dir);
        }

        if let Some(current_dir) = current_dir {
            return current_dir.join("generated");
        }

        PathBuf::from("generated")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            codegen: CodegenConfig {
                inputs: vec![PathBuf::from("src/lib.rs")],
                output_dir: Self::default_output_dir(),
                format: false,
            },
            naming: NamingConventions::default(),
        }
    }
}

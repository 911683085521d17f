#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! High-level pipeline that turns marked enums into lookup repositories.
//!
//! ## Module Organization
//!
//! - `orchestration` - Main pipeline entry points (`compile`, `compile_from_ir`, `dump_ir`)
//! - `builder` - [`Builder`] for use from `build.rs`

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while running the codegen pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// An input or IR file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// An input file could not be analysed.
    #[error("{}:{}: {error}", path.display(), error.line())]
    Analysis {
        /// Input file
        path: PathBuf,
        /// Analysis failure
        #[source]
        error: analysis::AnalysisError,
    },
    /// Models from all inputs are inconsistent.
    #[error("validation failed:\n{}", .0.join("\n"))]
    Validation(Vec<String>),
    /// Error propagated from the codegen crate.
    #[error(transparent)]
    Codegen(#[from] codegen::CodegenError),
    /// I/O error while creating or writing files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// IR serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

// Module declarations
pub mod builder;
pub mod orchestration;

pub use builder::Builder;
pub use orchestration::{
    analyze_inputs, analyze_ir, compile, compile_from_ir, dump_ir, generate_into, init_logging,
};

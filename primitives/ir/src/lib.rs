#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Correlation Intermediate Representation (IR)
//!
//! This crate defines the structures passed between the stages of the
//! generator: the analysis stage produces [`EnumModel`]s from Rust source,
//! and the code generation stage lowers each model into a [`RepositoryDef`]
//! before rendering it.

pub mod naming;
pub mod repository_ir;

pub use naming::NamingConventions;
pub use repository_ir::*;

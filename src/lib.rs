// SPDX-License-Identifier: CC0-1.0

//! Correlation umbrella crate.
//!
//! Application crates depend on this crate for the
//! [`correlation_repository`] marker attribute. The generator itself lives in
//! `correlation-pipeline` (library name `pipeline`), which is normally used as
//! a build-dependency:
//!
//! ```ignore
//! // build.rs
//! fn main() {
//!     pipeline::Builder::new()
//!         .input("src/status.rs")
//!         .compile()
//!         .expect("failed to generate repositories");
//! }
//!
//! // src/status.rs
//! #[correlation::correlation_repository]
//! pub enum Status {
//!     Active,
//!     Retired,
//! }
//!
//! impl Status {
//!     pub fn get_code(&self) -> u16 {
//!         match self {
//!             Status::Active => 1,
//!             Status::Retired => 2,
//!         }
//!     }
//! }
//!
//! include!(concat!(env!("OUT_DIR"), "/status/status_repository.rs"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![doc(test(attr(warn(unused))))]

pub use macros::correlation_repository;

/// Miscellaneous metadata about the Correlation workspace.
pub mod correlation_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

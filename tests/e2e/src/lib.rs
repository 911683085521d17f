//! Enums used by the end-to-end tests, with their generated repositories.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]

pub mod model;

pub use model::solar::{Planet, PlanetRepository};
pub use model::{AnnotatedClass, AnnotatedClassRepository};

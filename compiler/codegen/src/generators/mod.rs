//! Generators for enum lookup repositories.
//!
//! Lowering runs in two steps, mirroring the shape of the output: indexes
//! first, then the lookups that read them. `repository` stitches both into a
//! [`ir::RepositoryDef`] and renders it.

/// Sub-crate generates: **`doc_comment`**
///
/// Produces the triple-slash doc comments injected into generated files.
pub mod doc_comment;

/// One lazily built map per getter
pub mod index;
pub use index::{make_indexes, variants_static_name};

/// One `find_by_*` function per index
pub mod lookup;
pub use lookup::make_lookups;

pub mod repository;
pub use repository::{
    plan_repository, render_repository, repository_file_name, RepositoryGenerator,
};

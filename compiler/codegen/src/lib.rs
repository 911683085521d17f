#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Code generation for enum lookup repositories.
//!
//! This crate turns [`ir::EnumModel`]s into Rust source files. Each file holds
//! one repository: a static list of the enum's constants, one lazily built
//! index per getter and one `find_by_*` function per index.
//!
//! Parsing Rust source and selecting enums is done by `correlation-analysis`;
//! driving both stages and writing files is done by `correlation-pipeline`.

pub mod generators;

use std::fs::{self};
use std::path::{Path, PathBuf};
use std::process::Command;

use ir::EnumModel;
use thiserror::Error;

pub use generators::RepositoryGenerator;

/// Error type for code generation operations in this crate.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Underlying I/O error while reading or writing files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Two enums would be written to the same generated file.
    #[error("enums `{first}` and `{second}` would both be generated into `{file}`")]
    FileCollision {
        /// Generated file name
        file: String,
        /// Qualified name of the first enum
        first: String,
        /// Qualified name of the second enum
        second: String,
    },
    /// Two getters of one enum would share an index static.
    #[error("getters `{first}` and `{second}` of `{enum_name}` both map to `{index}`")]
    IndexCollision {
        /// Qualified enum name
        enum_name: String,
        /// Generated static name
        index: String,
        /// First getter
        first: String,
        /// Second getter
        second: String,
    },
}

/// Convenient result type for codegen functions in this crate.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Sub-crate: **`utils`**
///
/// Identifier case conversions used when naming generated items.
pub mod utils;

/// Defines the core interface for generating Rust source files from the
/// enums selected by analysis. Implementors produce a set of
/// `(filename, source)` pairs and may optionally perform pre-write validation.
pub trait CodeGenerator {
    /// Generate Rust source files for the provided enums.
    fn generate(&self, enums: &[EnumModel]) -> Vec<(String, String)>;

    /// Optional validation step before writing (default is no-op).
    fn validate(&self, _enums: &[EnumModel]) -> Result<()> { Ok(()) }
}

/// Formats a Rust source file with `rustfmt`.
///
/// Formatting is best effort: a missing `rustfmt` or a formatting failure
/// leaves the file as written.
pub fn format_with_rustfmt(path: &Path) {
    let mut cmd = Command::new("rustfmt");
    cmd.arg("--edition=2021").arg(path);

    match cmd.status() {
        Ok(status) if !status.success() => {
            tracing::warn!("rustfmt failed on {}", path.display());
        }
        Err(e) => {
            tracing::debug!("rustfmt unavailable ({}); leaving output as is", e);
        }
        Ok(_) => {}
    }
}

/// Trim trailing whitespace from each line and drop trailing blank lines.
/// Always ensures the returned string ends with a single newline when not empty.
pub fn clean_generated_source(src: &str) -> String {
    let mut lines: Vec<String> = src.lines().map(|l| l.trim_end().to_string()).collect();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

/// Persist a list of generated source files to disk under the given output directory,
/// creating any necessary subdirectories and appending `.rs` if missing.
///
/// Files whose content is unchanged are not rewritten, so Cargo does not see
/// a fresh modification time on every build. Returns the paths of all files,
/// written or not.
pub fn write_generated<P: AsRef<Path>>(
    out_dir: P,
    files: &[(String, String)],
    format: bool,
) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(&out_dir)?;
    let mut written = Vec::with_capacity(files.len());
    for (name, src) in files {
        let path = if name.ends_with(".rs") {
            out_dir.as_ref().join(name)
        } else {
            out_dir.as_ref().join(format!("{name}.rs"))
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let cleaned = clean_generated_source(src);
        let unchanged = !format && fs::read(&path).is_ok_and(|existing| existing == cleaned.as_bytes());
        if unchanged {
            tracing::trace!("{} is up to date", path.display());
        } else {
            fs::write(&path, cleaned.as_bytes())?;
            if format {
                format_with_rustfmt(&path);
            }
            tracing::debug!("wrote {}", path.display());
        }
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_generated_source() {
        assert_eq!(clean_generated_source("fn a() {}   \n\n\n"), "fn a() {}\n");
        assert_eq!(clean_generated_source("\n\n"), "");
        assert_eq!(clean_generated_source("a  \n  b\t\n"), "a\n  b\n");
    }

    #[test]
    fn test_write_generated() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let files = vec![
            ("status_repository.rs".to_string(), "pub struct StatusRepository;   \n\n".to_string()),
            ("legacy/kind_repository".to_string(), "pub struct KindRepository;\n".to_string()),
        ];

        let written = write_generated(dir.path(), &files, false).expect("write should succeed");

        assert_eq!(written.len(), 2);
        assert_eq!(written[1], dir.path().join("legacy/kind_repository.rs"));
        let contents =
            fs::read_to_string(&written[0]).expect("Failed to read generated file back");
        assert_eq!(contents, "pub struct StatusRepository;\n");
        assert!(written[1].exists());
    }

    #[test]
    fn test_write_generated_skips_unchanged() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let files = vec![("a.rs".to_string(), "pub struct A;\n".to_string())];

        let first = write_generated(dir.path(), &files, false).expect("first write should succeed");
        let before = fs::metadata(&first[0]).and_then(|m| m.modified()).expect("mtime");
        let second =
            write_generated(dir.path(), &files, false).expect("second write should succeed");
        let after = fs::metadata(&second[0]).and_then(|m| m.modified()).expect("mtime");

        assert_eq!(first, second);
        assert_eq!(before, after);
    }
}

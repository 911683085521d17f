//! Correlation Intermediate Representation
//!
//! [`EnumModel`] is what analysis extracts from a marked enum.
//! [`RepositoryDef`] is the lowered form code generation renders: one
//! [`IndexField`] and one [`LookupDef`] per [`AccessorDescriptor`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current IR format version written by [`RepositoryIR::new`].
pub const IR_VERSION: &str = "0.1.0";

/// A getter found on a marked enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorDescriptor {
    /// Method name as declared (e.g. `get_code`)
    pub method_name: String,
    /// Method name with the getter prefix stripped (e.g. `code`)
    pub field_name: String,
    /// Rendered return type, with lifetimes normalised to `'static`
    pub return_type: String,
}

impl AccessorDescriptor {
    /// Create a new accessor descriptor
    pub fn new(method_name: String, field_name: String, return_type: String) -> Self {
        Self { method_name, field_name, return_type }
    }
}

/// An enum selected for generation, as seen by analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumModel {
    /// Enum identifier
    pub name: String,
    /// Declared visibility (`pub`, `pub(crate)`, or empty for private)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub visibility: String,
    /// Unit variant identifiers in declaration order
    pub variants: Vec<String>,
    /// Getters in declaration order
    pub accessors: Vec<AccessorDescriptor>,
    /// Module path down to the enum: the module named by the source file
    /// (none for `lib.rs`/`main.rs`), then any inline `mod` nesting
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub module_path: Vec<String>,
    /// File the enum was read from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

impl EnumModel {
    /// Create a model at the file root with no recorded source
    pub fn new(name: String, variants: Vec<String>, accessors: Vec<AccessorDescriptor>) -> Self {
        Self {
            name,
            visibility: String::new(),
            variants,
            accessors,
            module_path: Vec::new(),
            source: None,
        }
    }

    /// `a::b::Name` style path: file module, then inline modules
    pub fn qualified_name(&self) -> String {
        self.module_path
            .iter()
            .map(String::as_str)
            .chain([self.name.as_str()])
            .collect::<Vec<_>>()
            .join("::")
    }
}

/// A lazily built map from accessor value to enum constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexField {
    /// Identifier of the generated static
    pub static_name: String,
    /// Map key type (the accessor's return type)
    pub key_type: String,
    /// Accessor that produces the keys
    pub accessor: AccessorDescriptor,
}

/// A generated lookup function backed by one [`IndexField`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupDef {
    /// Function name (e.g. `find_by_code`)
    pub fn_name: String,
    /// Parameter name
    pub param_name: String,
    /// Parameter type: the key type, or its borrowed form
    pub param_type: String,
    /// Whether the parameter is a borrow passed straight to `HashMap::get`
    #[serde(default)]
    pub borrowed: bool,
    /// Static name of the backing index
    pub index: String,
}

/// Everything needed to render one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDef {
    /// Repository type name (e.g. `StatusRepository`)
    pub name: String,
    /// Visibility copied from the enum
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub visibility: String,
    /// Enum the repository indexes
    pub enum_name: String,
    /// Unit variants of the enum in declaration order
    pub variants: Vec<String>,
    /// Identifier of the generated static holding every variant
    pub variants_static: String,
    /// One index per accessor
    pub indexes: Vec<IndexField>,
    /// One lookup per index
    pub lookups: Vec<LookupDef>,
    /// Module path of the enum
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub module_path: Vec<String>,
}

/// Serialisable analysis result for a set of source files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryIR {
    /// IR format version
    version: String,
    /// Enums selected for generation
    enums: Vec<EnumModel>,
}

impl RepositoryIR {
    /// Create a new IR at the current format version
    pub fn new(enums: Vec<EnumModel>) -> Self { Self { version: IR_VERSION.to_string(), enums } }

    /// Load IR from a JSON file
    ///
    /// Malformed JSON is reported as [`std::io::ErrorKind::InvalidData`].
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let ir: Self = serde_json::from_str(&content)?;
        Ok(ir)
    }

    /// Save IR to a JSON file
    pub fn to_file(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Pretty-printed JSON form
    pub fn to_json(&self) -> Result<String, serde_json::Error> { serde_json::to_string_pretty(self) }

    /// IR format version
    pub fn version(&self) -> &str { &self.version }

    /// Enums selected for generation
    pub fn enums(&self) -> &[EnumModel] { &self.enums }

    /// Look up an enum by its qualified name (`a::b::Name`)
    pub fn get_enum(&self, qualified_name: &str) -> Option<&EnumModel> {
        self.enums.iter().find(|e| e.qualified_name() == qualified_name)
    }

    /// Total number of accessors across all enums
    pub fn accessor_count(&self) -> usize { self.enums.iter().map(|e| e.accessors.len()).sum() }
}

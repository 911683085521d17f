//! Naming conventions shared by analysis and code generation.

use serde::{Deserialize, Serialize};

/// Name fragments used to recognise marked enums and getters and to name the
/// generated items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConventions {
    /// Attribute (last path segment) that selects an enum for generation
    pub marker_attribute: String,
    /// Prefix a method name must start with to be treated as a getter
    pub getter_prefix: String,
    /// Prefix of the generated lookup functions
    pub lookup_prefix: String,
    /// Suffix appended to the generated index statics
    pub index_suffix: String,
    /// Suffix appended to the enum name to name the repository
    pub repository_suffix: String,
}

impl Default for NamingConventions {
    fn default() -> Self {
        Self {
            marker_attribute: "correlation_repository".to_string(),
            getter_prefix: "get_".to_string(),
            lookup_prefix: "find_by_".to_string(),
            index_suffix: "_INDEX".to_string(),
            repository_suffix: "Repository".to_string(),
        }
    }
}

impl NamingConventions {
    /// Strip the getter prefix from `method_name`.
    ///
    /// Returns `None` when the name does not carry the prefix or when nothing
    /// is left after stripping it (a bare `get_` is not a getter).
    pub fn field_name<'a>(&self, method_name: &'a str) -> Option<&'a str> {
        method_name.strip_prefix(self.getter_prefix.as_str()).filter(|rest| !rest.is_empty())
    }

    /// Name of the repository generated for `enum_name`.
    pub fn repository_name(&self, enum_name: &str) -> String {
        format!("{}{}", enum_name, self.repository_suffix)
    }

    /// Name of the lookup function generated for `field_name`.
    pub fn lookup_name(&self, field_name: &str) -> String {
        format!("{}{}", self.lookup_prefix, field_name)
    }
}

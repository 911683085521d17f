use ir::{IndexField, LookupDef, RepositoryDef};

/// Sanitize a line for use in Rust doc comments
pub fn sanitize_doc_line(line: &str) -> String {
    // a bare `\r` ends a `///` comment early
    line.replace('\r', "").trim_end().to_string()
}

/// Format documentation comments
///
/// Every input line becomes one `///` line at the given indentation; blank
/// lines become bare `///` separators.
pub fn format_doc_comment(description: &str, indent: &str) -> String {
    let mut doc = String::new();
    for line in description.lines() {
        let line = sanitize_doc_line(line);
        if line.is_empty() {
            doc.push_str(&format!("{indent}///\n"));
        } else {
            doc.push_str(&format!("{indent}/// {line}\n"));
        }
    }
    doc
}

/// Doc comment for the repository type.
pub fn repository_docs(def: &RepositoryDef, source: Option<&str>) -> String {
    let mut text = format!("Lookups of [`{}`] constants by getter value.\n", def.enum_name);
    if !def.indexes.is_empty() {
        text.push_str("\nIndexes:\n");
        for index in &def.indexes {
            text.push_str(&format!(
                "- `{}()` (`{}`)\n",
                index.accessor.method_name, index.key_type
            ));
        }
    }
    if let Some(source) = source {
        text.push_str(&format!("\nGenerated from `{}`.\n", source));
    }
    format_doc_comment(&text, "")
}

/// Doc comment for one lookup function.
pub fn lookup_docs(enum_name: &str, lookup: &LookupDef, index: &IndexField) -> String {
    let text = format!(
        "Returns the [`{enum_name}`] constant whose `{getter}()` equals `{param}`, or `None`.\n\
         \n\
         When several constants return the same value, the last one declared wins.",
        enum_name = enum_name,
        getter = index.accessor.method_name,
        param = lookup.param_name,
    );
    format_doc_comment(&text, "    ")
}

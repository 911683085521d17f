// codegen/src/utils.rs

/// Converts a PascalCase, camelCase or snake_case identifier to snake_case.
///
/// Runs of capitals are treated as one word, so acronyms stay together.
///
/// # Examples
/// ```
/// use correlation_codegen::utils::to_snake_case;
/// assert_eq!(to_snake_case("AnnotatedClass"), "annotated_class");
/// assert_eq!(to_snake_case("HTTPStatus"), "http_status");
/// assert_eq!(to_snake_case("iso_code"), "iso_code");
/// assert_eq!(to_snake_case("F"), "f");
/// ```
pub fn to_snake_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.ends_with('_') {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }

    result
}

/// Converts an identifier to SCREAMING_SNAKE_CASE, the form used for statics.
pub fn to_screaming_snake_case(input: &str) -> String { to_snake_case(input).to_uppercase() }

/// Join module path segments and a file stem into a relative file name.
pub fn module_file_name(module_path: &[String], stem: &str) -> String {
    module_path.iter().map(String::as_str).chain([stem]).collect::<Vec<_>>().join("/") + ".rs"
}

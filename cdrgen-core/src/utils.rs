//! Shared naming helpers for language backends.

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to SCREAMING_SNAKE_CASE (e.g., "flagRead" -> "FLAG_READ")
///
/// Runs of capitals are kept together, so "READ" stays "READ".
pub fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c == '-' {
            result.push('_');
        } else {
            if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                result.push('_');
            }
            result.extend(c.to_uppercase());
        }
        prev = Some(c);
    }
    result
}

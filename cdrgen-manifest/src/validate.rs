//! Identifier rules for names that become files, directories and Java
//! identifiers.

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Validation context carrying the source and the path of enclosing
/// definitions.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: &'a SourceContext,
    /// Enclosing definition names (e.g., ["geo", "Calc"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    pub fn source(&self) -> &'a SourceContext {
        self.source
    }

    /// Descend into a named definition.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: self.source,
            path,
        }
    }

    /// `::`-joined path of the enclosing definitions.
    pub fn path_string(&self) -> String {
        self.path.join("::")
    }

    /// Describe `kind` for error messages, e.g. "struct in 'geo::Calc'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is usable as a path segment and a Java
    /// identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_java_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }
        Ok(())
    }

    pub fn error(&self, message: impl Into<String>, near: &str) -> Box<crate::Error> {
        self.source.validation_error(message, self.find_span(near))
    }
}

/// Java reserved words, including literals and contextual keywords that
/// cannot name a type.
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while",
    // Literals
    "true", "false", "null",
    // Restricted identifiers
    "var", "yield", "record", "sealed", "permits",
];

pub(crate) fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Find the span of a name in the TOML source.
///
/// Looks for the quoted value first (`name = "Point"`), then for the bare
/// name anywhere.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{name}{quote}");
        if let Some(pos) = src.find(&pattern) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }
    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Validate that a name is a plain identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Validate a dotted package prefix such as `com.example`. Empty is valid.
pub(crate) fn validate_package(package: &str) -> Option<&'static str> {
    if package.is_empty() {
        return None;
    }
    for segment in package.split('.') {
        if is_java_keyword(segment) {
            return Some("package segment is a Java reserved keyword");
        }
        if let Some(reason) = validate_identifier(segment) {
            return Some(reason);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("Point").is_none());
        assert!(validate_identifier("point_3d").is_none());
        assert!(validate_identifier("_private").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert_eq!(validate_identifier(""), Some("name cannot be empty"));
        assert!(validate_identifier("3d").is_some());
        assert!(validate_identifier("my-type").is_some());
        assert!(validate_identifier("a/b").is_some());
        assert!(validate_identifier("..").is_some());
    }

    #[test]
    fn test_java_keywords() {
        assert!(is_java_keyword("class"));
        assert!(is_java_keyword("package"));
        assert!(!is_java_keyword("Point"));
    }

    #[test]
    fn test_validate_package() {
        assert!(validate_package("").is_none());
        assert!(validate_package("com.example").is_none());
        assert!(validate_package("com..example").is_some());
        assert!(validate_package("com.class").is_some());
    }

    #[test]
    fn test_find_name_span_prefers_quoted_value() {
        let src = "# Point comes first\nname = \"Point\"\n";
        let span = find_name_span(src, "Point").unwrap();
        assert_eq!(span.offset(), 28);
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_parse_context_path() {
        let source = SourceContext::new("", "cdrgen.toml");
        let ctx = ParseContext::new(&source);
        assert_eq!(ctx.context_for("module"), "module");

        let nested = ctx.push("geo").push("Calc");
        assert_eq!(nested.context_for("struct"), "struct in 'geo::Calc'");
    }

    #[test]
    fn test_validate_name_keyword() {
        let source = SourceContext::new("name = \"class\"", "cdrgen.toml");
        let err = ParseContext::new(&source)
            .validate_name("class", "struct")
            .unwrap_err();
        assert!(err.to_string().contains("reserved keyword"));
    }
}

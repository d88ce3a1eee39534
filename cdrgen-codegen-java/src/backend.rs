//! The Java language backend.

use cdrgen_codegen::{Bindings, LanguageBackend, Renderer, templates};
use cdrgen_core::RenderError;
use indexmap::IndexMap;

use crate::{
    UserTemplate,
    files::{
        AnnotationJava, BitmaskJava, BitsetJava, BuildGradle, EnumJava, InterfaceJava, MainJava,
        StructJava, UnionJava,
    },
};

/// Renders Java sources and a Gradle build script.
///
/// Built-in template ids are always rendered by the backend; any other id
/// is looked up among the user templates.
#[derive(Debug, Default, Clone)]
pub struct JavaBackend {
    user_templates: IndexMap<String, UserTemplate>,
}

impl JavaBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user template, replacing one with the same id.
    pub fn add_template(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.user_templates
            .insert(id.into(), UserTemplate::new(text));
    }

    /// Builder-style [`add_template`](Self::add_template).
    pub fn with_template(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.add_template(id, text);
        self
    }

    /// Whether `id` can be rendered.
    pub fn has_template(&self, id: &str) -> bool {
        templates::is_builtin(id) || self.user_templates.contains_key(id)
    }
}

impl Renderer for JavaBackend {
    fn render(&self, template: &str, bindings: &Bindings<'_>) -> Result<String, RenderError> {
        let text = match template {
            templates::MAIN => MainJava::from_bindings(bindings)?.render(),
            templates::INTERFACE => InterfaceJava::from_bindings(bindings)?.render(),
            templates::ANNOTATION => AnnotationJava::from_bindings(bindings)?.render(),
            templates::STRUCT_TYPE => StructJava::from_bindings(bindings)?.render(),
            templates::UNION_TYPE => UnionJava::from_bindings(bindings)?.render(),
            templates::ENUM_TYPE => EnumJava::from_bindings(bindings)?.render(),
            templates::BITSET_TYPE => BitsetJava::from_bindings(bindings)?.render(),
            templates::BITMASK_TYPE => BitmaskJava::from_bindings(bindings)?.render(),
            templates::BUILD_DESCRIPTOR => BuildGradle::from_bindings(bindings)?.render(),
            other => match self.user_templates.get(other) {
                Some(user) => user.render(bindings),
                None => return Err(RenderError::UnknownTemplate(other.to_string())),
            },
        };
        Ok(text)
    }
}

impl LanguageBackend for JavaBackend {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn descriptor_file_name(&self) -> &'static str {
        "build.gradle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_template_is_an_error() {
        let backend = JavaBackend::new();
        assert_eq!(
            backend.render("missing", &Bindings::new()).unwrap_err(),
            RenderError::UnknownTemplate("missing".to_string())
        );
    }

    #[test]
    fn test_builtin_requires_its_bindings() {
        let backend = JavaBackend::new();
        let err = backend
            .render(templates::STRUCT_TYPE, &Bindings::new())
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingBinding { binding, .. } if binding == "struct"));
    }

    #[test]
    fn test_user_template_lookup() {
        let backend = JavaBackend::new().with_template("banner", "// {name}");
        assert!(backend.has_template("banner"));
        assert!(backend.has_template(templates::MAIN));
        assert!(!backend.has_template("other"));
    }

    #[test]
    fn test_builtin_ids_cannot_be_shadowed() {
        let backend = JavaBackend::new().with_template(templates::BUILD_DESCRIPTOR, "custom");
        let bindings =
            Bindings::new().with("name", cdrgen_codegen::Value::Text("lib".to_string()));
        let text = backend
            .render(templates::BUILD_DESCRIPTOR, &bindings)
            .unwrap();
        assert!(text.contains("archivesName = 'lib'"));
    }
}

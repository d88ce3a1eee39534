//! Renderer and language backend traits.

use cdrgen_core::RenderError;

use super::Bindings;

/// A template engine: template id plus bindings in, text out.
///
/// Implementations must be deterministic for a given template and set of
/// bindings and must not touch the filesystem.
pub trait Renderer {
    fn render(&self, template: &str, bindings: &Bindings<'_>) -> Result<String, RenderError>;
}

impl<T: Renderer + ?Sized> Renderer for &T {
    fn render(&self, template: &str, bindings: &Bindings<'_>) -> Result<String, RenderError> {
        (**self).render(template, bindings)
    }
}

impl<T: Renderer + ?Sized> Renderer for Box<T> {
    fn render(&self, template: &str, bindings: &Bindings<'_>) -> Result<String, RenderError> {
        self.as_ref().render(template, bindings)
    }
}

/// A renderer for one target language, plus that language's file naming.
///
/// Implement this trait to add support for generating types in a new language.
pub trait LanguageBackend: Renderer {
    /// Language identifier (e.g., "java")
    fn language(&self) -> &'static str;

    /// File extension for generated source files, without the dot (e.g., "java")
    fn file_extension(&self) -> &'static str;

    /// File name of the build descriptor emitted at the output root (e.g., "build.gradle")
    fn descriptor_file_name(&self) -> &'static str;
}

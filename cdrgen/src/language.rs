//! Unified language dispatch.
//!
//! Centralizes backend creation for the target language of a manifest.

use cdrgen_codegen::LanguageBackend;
use cdrgen_codegen_java::JavaBackend;
use cdrgen_manifest::{Language, Manifest};

/// Backend factory for a target language.
pub struct LanguageSupport {
    language: Language,
}

impl LanguageSupport {
    pub fn get(language: Language) -> Self {
        Self { language }
    }

    /// Create a backend that also knows the manifest's user templates.
    pub fn backend(&self, manifest: &Manifest) -> Box<dyn LanguageBackend> {
        match self.language {
            Language::Java => {
                let mut backend = JavaBackend::new();
                for (id, text) in &manifest.templates {
                    backend.add_template(id, text);
                }
                Box::new(backend)
            }
        }
    }
}

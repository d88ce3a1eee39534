//! Check operation - validation by rendering every file in memory.

use std::{error::Error, path::Path};

use cdrgen_codegen::{Generator, KindTemplate};
use cdrgen_ir::DeclTree;
use cdrgen_manifest::{DefinitionKind, DefinitionSpec, Manifest};

use crate::{language::LanguageSupport, reports::CheckReport};

/// Execute the check operation.
///
/// The manifest has already been parsed and lowered, so what remains are
/// render failures (errors) and declarations that produce no file
/// (warnings).
pub fn check(
    manifest: &Manifest,
    tree: &DeclTree,
    lang: LanguageSupport,
    config_path: &Path,
) -> CheckReport {
    let backend = lang.backend(manifest);
    let generator = Generator::new(&*backend, &manifest.context, &manifest.extensions);

    let mut errors = Vec::new();
    let files = match generator.preview(
        tree,
        &manifest.generator.package,
        &manifest.generator.library,
    ) {
        Ok(files) => files.into_iter().map(|f| f.path).collect(),
        Err(err) => {
            errors.push(error_chain(&err));
            Vec::new()
        }
    };

    let mut warnings = Vec::new();
    if manifest.definitions.is_empty() {
        warnings.push("no definitions, only the build descriptor is generated".to_string());
    }
    collect_unemitted(&manifest.definitions, &mut warnings);
    for id in manifest.templates.keys() {
        if !manifest.extensions.iter().any(|(_, template)| template == id) {
            warnings.push(format!("template '{}' is not used by any extension", id));
        }
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        library: manifest.generator.library.clone(),
        language: backend.language(),
        definition_count: manifest.definition_count(),
        files,
        errors,
        warnings,
    }
}

fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Type declarations whose kind has no template are skipped silently at
/// generation time.
fn collect_unemitted(specs: &[DefinitionSpec], warnings: &mut Vec<String>) {
    for spec in specs {
        if let DefinitionKind::Type(kind) = spec.kind
            && KindTemplate::for_kind(kind).is_none()
        {
            warnings.push(format!(
                "{} '{}' has no template and is not emitted",
                kind, spec.name
            ));
        }
        collect_unemitted(&spec.definitions, warnings);
        collect_unemitted(&spec.exports, warnings);
    }
}

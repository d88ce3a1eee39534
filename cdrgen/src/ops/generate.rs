//! Generate operation - source emission from a manifest.

use std::path::Path;

use cdrgen_codegen::Generator;
use cdrgen_core::Overwrite;
use cdrgen_ir::DeclTree;
use cdrgen_manifest::Manifest;
use eyre::{Context, Result};
use tracing::debug;

use crate::{
    language::LanguageSupport,
    reports::{GenerateSummary, GenerationResult, WrittenResult},
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Root directory for generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    pub overwrite: Overwrite,
}

/// Execute the generate operation for an already lowered `tree`.
pub fn generate(
    manifest: &Manifest,
    tree: &DeclTree,
    lang: LanguageSupport,
    opts: GenerateOptions,
) -> Result<GenerateSummary> {
    let backend = lang.backend(manifest);
    let generator = Generator::new(&*backend, &manifest.context, &manifest.extensions)
        .with_overwrite(opts.overwrite);

    let namespace = &manifest.generator.package;
    let library = &manifest.generator.library;
    debug!(
        language = backend.language(),
        dry_run = opts.dry_run,
        overwrite = ?opts.overwrite,
        "running generator"
    );

    let result = if opts.dry_run {
        let files = generator
            .preview(tree, namespace, library)
            .wrap_err("Failed to render preview")?;
        GenerationResult::Preview(files)
    } else {
        let report = generator
            .generate(tree, opts.output_dir, namespace, library)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            report,
        })
    };

    Ok(GenerateSummary {
        library: library.clone(),
        language: backend.language(),
        definition_count: manifest.definition_count(),
        result,
    })
}

//! Generation orchestration.

use std::path::Path;

use cdrgen_core::{Overwrite, Result};
use cdrgen_ir::{DeclTree, ExtensionRegistry, RenderContext};
use tracing::{debug, info};

use super::{FsOutput, GenerateReport, Namespace, Output, PreviewFile, PreviewOutput, Walker, render};
use crate::render::{Bindings, LanguageBackend, Value, templates};

/// Runs one generation: every top-level definition, then the build
/// descriptor.
pub struct Generator<'a, B: ?Sized> {
    backend: &'a B,
    ctx: &'a RenderContext,
    extensions: &'a ExtensionRegistry,
    overwrite: Overwrite,
}

impl<'a, B: LanguageBackend + ?Sized> Generator<'a, B> {
    pub fn new(backend: &'a B, ctx: &'a RenderContext, extensions: &'a ExtensionRegistry) -> Self {
        Self {
            backend,
            ctx,
            extensions,
            overwrite: Overwrite::default(),
        }
    }

    /// Set the policy for files that already exist.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Generate sources for `tree` into `output_dir`.
    ///
    /// `namespace` is the package prefix of top-level definitions and may be
    /// empty. The build descriptor only sees `library` as its `name`.
    pub fn generate(
        &self,
        tree: &DeclTree,
        output_dir: &Path,
        namespace: &str,
        library: &str,
    ) -> Result<GenerateReport> {
        info!(
            language = self.backend.language(),
            output = %output_dir.display(),
            "generating sources"
        );
        let mut output = FsOutput::new(self.overwrite);
        self.run(tree, output_dir, namespace, library, &mut output)?;
        Ok(output.into_report())
    }

    /// Render everything into memory, with paths relative to the output root.
    pub fn preview(&self, tree: &DeclTree, namespace: &str, library: &str) -> Result<Vec<PreviewFile>> {
        let mut output = PreviewOutput::new();
        self.run(tree, Path::new(""), namespace, library, &mut output)?;
        Ok(output.into_files())
    }

    fn run<O: Output>(
        &self,
        tree: &DeclTree,
        root: &Path,
        namespace: &str,
        library: &str,
        output: &mut O,
    ) -> Result<()> {
        output.create_root(root)?;

        let mut walker = Walker::new(
            tree,
            self.backend,
            self.ctx,
            self.extensions,
            self.backend.file_extension(),
            &mut *output,
        );
        walker.walk(tree.roots(), root, &Namespace::new(namespace))?;

        debug!(library, "rendering build descriptor");
        let bindings = Bindings::new().with("name", Value::Text(library.to_string()));
        let content = render(self.backend, templates::BUILD_DESCRIPTOR, &bindings)?;
        output.write(&root.join(self.backend.descriptor_file_name()), content)?;
        Ok(())
    }
}

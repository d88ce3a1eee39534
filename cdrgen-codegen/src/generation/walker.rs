//! Depth-first traversal of the declaration tree.

use std::path::Path;

use cdrgen_core::Result;
use cdrgen_ir::{
    AnnotationDeclaration, DeclTree, Definition, Export, ExtensionKey, ExtensionRegistry,
    Interface, Module, NodeId, NodeRef, RenderContext, TypeDeclaration,
};
use tracing::{debug, error, warn};

use super::{KindDispatcher, Namespace, Output, render};
use crate::render::{Bindings, Renderer, Value, templates};

/// Walks definitions in declaration order, mirroring modules as directories
/// and emitting one file per interface and supported type declaration.
pub struct Walker<'a, R: ?Sized, O> {
    tree: &'a DeclTree,
    renderer: &'a R,
    ctx: &'a RenderContext,
    extensions: &'a ExtensionRegistry,
    file_extension: &'a str,
    output: O,
}

impl<'a, R: Renderer + ?Sized, O: Output> Walker<'a, R, O> {
    pub fn new(
        tree: &'a DeclTree,
        renderer: &'a R,
        ctx: &'a RenderContext,
        extensions: &'a ExtensionRegistry,
        file_extension: &'a str,
        output: O,
    ) -> Self {
        Self {
            tree,
            renderer,
            ctx,
            extensions,
            file_extension,
            output,
        }
    }

    /// Give back the output sink.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Process `definitions` under `dir`, extending `namespace` for modules.
    ///
    /// The first fatal error aborts the traversal; files already emitted
    /// stay where they are.
    pub fn walk(&mut self, definitions: &[NodeId], dir: &Path, namespace: &Namespace) -> Result<()> {
        let tree = self.tree;
        for &id in definitions {
            let Some(node) = tree.get(id) else {
                warn!(index = id.index(), "dangling node handle, skipping");
                continue;
            };
            match &node.definition {
                Definition::Module(module) => self.walk_module(module, dir, namespace)?,
                Definition::Interface(ifc) => self.walk_interface(id, ifc, dir, namespace)?,
                Definition::TypeDeclaration(decl) => self.walk_type(id, decl, dir, namespace)?,
                Definition::Annotation(annotation) => self.walk_annotation(annotation),
            }
        }
        Ok(())
    }

    fn walk_module(&mut self, module: &'a Module, dir: &Path, namespace: &Namespace) -> Result<()> {
        let child_dir = dir.join(&module.name);
        self.output.create_dir(&child_dir).inspect_err(|_| {
            error!(module = %module.name, "cannot create directory for module");
        })?;
        self.walk(&module.definitions, &child_dir, &namespace.child(&module.name))
    }

    fn walk_interface(
        &mut self,
        id: NodeId,
        ifc: &'a Interface,
        dir: &Path,
        namespace: &Namespace,
    ) -> Result<()> {
        debug!(name = %ifc.name, "processing interface");

        let mut scope = Bindings::new();
        scope
            .set("ctx", Value::Context(self.ctx))
            .set_opt("parent", self.parent_of(id).map(Value::Scope))
            .set("interface", Value::Interface(ifc));

        if let Some(extension) = self.extensions.get(ExtensionKey::Interface) {
            let text = render(self.renderer, extension, &scope)?;
            scope.set("extension", Value::Text(text));
        }

        let dispatcher = KindDispatcher::new(self.renderer, self.ctx, self.extensions);
        for export in &ifc.exports {
            if let Export::TypeDeclaration(type_id) = export
                && let Some(text) = dispatcher.dispatch(self.tree, *type_id)?
            {
                scope.append("exports", text);
            }
        }

        let body = render(self.renderer, templates::INTERFACE, &scope)?;
        self.emit(dir, &ifc.name, body, namespace)
    }

    fn walk_type(
        &mut self,
        id: NodeId,
        decl: &'a TypeDeclaration,
        dir: &Path,
        namespace: &Namespace,
    ) -> Result<()> {
        let dispatcher = KindDispatcher::new(self.renderer, self.ctx, self.extensions);
        match dispatcher.dispatch_declaration(decl, self.parent_of(id))? {
            Some(body) => self.emit(dir, &decl.name, body, namespace),
            None => Ok(()),
        }
    }

    /// Annotations are rendered so their extension hook runs, but nothing is
    /// written and no failure escapes.
    fn walk_annotation(&self, annotation: &'a AnnotationDeclaration) {
        let mut scope = Bindings::new();
        scope
            .set("ctx", Value::Context(self.ctx))
            .set("annotation", Value::Annotation(annotation));

        if let Some(extension) = self.extensions.get(ExtensionKey::Annotation) {
            match render(self.renderer, extension, &scope) {
                Ok(text) => {
                    scope.set("extension", Value::Text(text));
                }
                Err(err) => {
                    warn!(name = %annotation.name, error = %err, "annotation extension failed");
                    return;
                }
            }
        }

        match render(self.renderer, templates::ANNOTATION, &scope) {
            Ok(_) => debug!(name = %annotation.name, "rendered annotation"),
            Err(err) => warn!(name = %annotation.name, error = %err, "annotation render failed"),
        }
    }

    /// Wrap a rendered body in the file-level template and emit it as
    /// `dir/name.<ext>`.
    fn emit(&mut self, dir: &Path, name: &str, body: String, namespace: &Namespace) -> Result<()> {
        let mut file = Bindings::new();
        file.set("ctx", Value::Context(self.ctx))
            .set("definitions", Value::Text(body))
            .set_opt(
                "package",
                namespace.as_package().map(|p| Value::Text(p.to_string())),
            );

        if let Some(extension) = self.extensions.get(ExtensionKey::Main) {
            let ext_bindings = Bindings::new().with("ctx", Value::Context(self.ctx));
            let text = render(self.renderer, extension, &ext_bindings)?;
            file.set("extension", Value::Text(text));
        }

        let content = render(self.renderer, templates::MAIN, &file)?;
        let path = dir.join(format!("{}.{}", name, self.file_extension));
        self.output.write(&path, content).inspect_err(|_| {
            error!(path = %path.display(), "cannot write file");
        })?;
        Ok(())
    }

    fn parent_of(&self, id: NodeId) -> Option<NodeRef<'a>> {
        self.tree.parent(id).map(|p| self.tree.node_ref(p))
    }
}

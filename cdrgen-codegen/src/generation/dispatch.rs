//! Kind dispatch for type declarations.

use cdrgen_core::Result;
use cdrgen_ir::{
    DeclTree, Definition, ExtensionKey, ExtensionRegistry, Kind, NodeId, NodeRef, RenderContext,
    TypeDeclaration,
};
use tracing::debug;

use super::render;
use crate::render::{Bindings, Renderer, Value, templates};

/// Template selection for one type code kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindTemplate {
    /// Primary template id.
    pub template: &'static str,
    /// Name the type code is bound under.
    pub binding: &'static str,
    /// Hook point of the optional extension.
    pub extension: ExtensionKey,
}

impl KindTemplate {
    /// Template for a kind, or `None` when the kind is not emitted.
    pub fn for_kind(kind: Kind) -> Option<Self> {
        let (template, binding, extension) = match kind {
            Kind::Struct => (templates::STRUCT_TYPE, "struct", ExtensionKey::StructType),
            Kind::Union => (templates::UNION_TYPE, "union", ExtensionKey::UnionType),
            Kind::Enum => (templates::ENUM_TYPE, "enum", ExtensionKey::EnumType),
            Kind::Bitset => (templates::BITSET_TYPE, "bitset", ExtensionKey::BitsetType),
            Kind::Bitmask => (templates::BITMASK_TYPE, "bitmask", ExtensionKey::BitmaskType),
            Kind::Alias
            | Kind::Sequence
            | Kind::Array
            | Kind::Map
            | Kind::String
            | Kind::Primitive => return None,
        };
        Some(Self {
            template,
            binding,
            extension,
        })
    }
}

/// Renders type declarations through their kind-specific template.
pub struct KindDispatcher<'a, R: ?Sized> {
    renderer: &'a R,
    ctx: &'a RenderContext,
    extensions: &'a ExtensionRegistry,
}

impl<'a, R: Renderer + ?Sized> KindDispatcher<'a, R> {
    pub fn new(
        renderer: &'a R,
        ctx: &'a RenderContext,
        extensions: &'a ExtensionRegistry,
    ) -> Self {
        Self {
            renderer,
            ctx,
            extensions,
        }
    }

    /// Render the type declaration stored at `id`.
    ///
    /// Returns `Ok(None)` for nodes that are not type declarations and for
    /// kinds without a template.
    pub fn dispatch(&self, tree: &'a DeclTree, id: NodeId) -> Result<Option<String>> {
        let Some(node) = tree.get(id) else {
            return Ok(None);
        };
        let Definition::TypeDeclaration(decl) = &node.definition else {
            return Ok(None);
        };
        let parent = node.parent.map(|p| tree.node_ref(p));
        self.dispatch_declaration(decl, parent)
    }

    /// Render a type declaration whose enclosing scope is `parent`.
    ///
    /// The extension, when registered, only sees the kind binding; `ctx` and
    /// `parent` are added to the primary template after it is spliced in.
    pub fn dispatch_declaration(
        &self,
        decl: &'a TypeDeclaration,
        parent: Option<NodeRef<'a>>,
    ) -> Result<Option<String>> {
        let kind = decl.type_code.kind;
        let Some(kt) = KindTemplate::for_kind(kind) else {
            debug!(name = %decl.name, %kind, "no template for kind, skipping");
            return Ok(None);
        };
        debug!(name = %decl.name, template = kt.template, "processing type declaration");

        let mut bindings = Bindings::new().with(kt.binding, Value::TypeCode(&decl.type_code));

        if let Some(extension) = self.extensions.get(kt.extension) {
            let ext_bindings = Bindings::new().with(kt.binding, Value::TypeCode(&decl.type_code));
            let text = render(self.renderer, extension, &ext_bindings)?;
            bindings.set("extension", Value::Text(text));
        }

        bindings
            .set("ctx", Value::Context(self.ctx))
            .set_opt("parent", parent.map(Value::Scope));

        render(self.renderer, kt.template, &bindings).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use cdrgen_core::GenError;
    use cdrgen_ir::TypeCode;

    use super::*;
    use crate::testing::EchoRenderer;

    fn single(kind: Kind, name: &str) -> (DeclTree, NodeId) {
        let mut tree = DeclTree::new();
        let pkg = tree.insert(None, Definition::module("pkg")).unwrap();
        let id = tree
            .insert(
                Some(pkg),
                Definition::type_declaration(TypeCode::new(kind, name)),
            )
            .unwrap();
        (tree, id)
    }

    #[test]
    fn test_every_constructed_kind_has_a_template() {
        let expected = [
            (Kind::Struct, "struct_type", "struct"),
            (Kind::Union, "union_type", "union"),
            (Kind::Enum, "enum_type", "enum"),
            (Kind::Bitset, "bitset_type", "bitset"),
            (Kind::Bitmask, "bitmask_type", "bitmask"),
        ];
        for (kind, template, binding) in expected {
            let kt = KindTemplate::for_kind(kind).unwrap();
            assert_eq!(kt.template, template);
            assert_eq!(kt.binding, binding);
            assert_eq!(kt.extension.as_str(), template);
        }
    }

    #[test]
    fn test_other_kinds_have_no_template() {
        for kind in [
            Kind::Alias,
            Kind::Sequence,
            Kind::Array,
            Kind::Map,
            Kind::String,
            Kind::Primitive,
        ] {
            assert_eq!(KindTemplate::for_kind(kind), None);
        }
    }

    #[test]
    fn test_dispatch_binds_kind_ctx_and_parent() {
        let (tree, id) = single(Kind::Union, "Shape");
        let ctx = RenderContext::default();
        let extensions = ExtensionRegistry::new();
        let dispatcher = KindDispatcher::new(&EchoRenderer, &ctx, &extensions);

        let text = dispatcher.dispatch(&tree, id).unwrap().unwrap();
        assert_eq!(text, "union_type(union=Shape ctx parent=pkg)");
    }

    #[test]
    fn test_dispatch_unsupported_kind_is_none() {
        let (tree, id) = single(Kind::Alias, "Meters");
        let ctx = RenderContext::default();
        let extensions = ExtensionRegistry::new();
        let dispatcher = KindDispatcher::new(&EchoRenderer, &ctx, &extensions);

        assert_eq!(dispatcher.dispatch(&tree, id).unwrap(), None);
    }

    #[test]
    fn test_extension_is_rendered_without_ctx_or_parent() {
        let (tree, id) = single(Kind::Struct, "Point");
        let ctx = RenderContext::default();
        let extensions = ExtensionRegistry::new().with(ExtensionKey::StructType, "struct_ext");
        let dispatcher = KindDispatcher::new(&EchoRenderer, &ctx, &extensions);

        let text = dispatcher.dispatch(&tree, id).unwrap().unwrap();
        assert_eq!(
            text,
            "struct_type(struct=Point extension=[struct_ext(struct=Point)] ctx parent=pkg)"
        );
    }

    #[test]
    fn test_extension_for_other_kind_is_ignored() {
        let (tree, id) = single(Kind::Enum, "Color");
        let ctx = RenderContext::default();
        let extensions = ExtensionRegistry::new().with(ExtensionKey::StructType, "struct_ext");
        let dispatcher = KindDispatcher::new(&EchoRenderer, &ctx, &extensions);

        let text = dispatcher.dispatch(&tree, id).unwrap().unwrap();
        assert_eq!(text, "enum_type(enum=Color ctx parent=pkg)");
    }

    #[test]
    fn test_root_declaration_has_no_parent_binding() {
        let mut tree = DeclTree::new();
        let id = tree
            .insert(
                None,
                Definition::type_declaration(TypeCode::new(Kind::Bitmask, "Flags")),
            )
            .unwrap();
        let ctx = RenderContext::default();
        let extensions = ExtensionRegistry::new();
        let dispatcher = KindDispatcher::new(&EchoRenderer, &ctx, &extensions);

        let text = dispatcher.dispatch(&tree, id).unwrap().unwrap();
        assert_eq!(text, "bitmask_type(bitmask=Flags ctx)");
    }

    #[test]
    fn test_extension_render_failure_propagates() {
        let (tree, id) = single(Kind::Struct, "Point");
        let ctx = RenderContext::default();
        let extensions = ExtensionRegistry::new().with(ExtensionKey::StructType, "fail_ext");
        let dispatcher = KindDispatcher::new(&EchoRenderer, &ctx, &extensions);

        let err = dispatcher.dispatch(&tree, id).unwrap_err();
        assert!(matches!(err, GenError::Render { template, .. } if template == "fail_ext"));
    }
}

//! Declaration tree arena.
//!
//! Every declaration is a [`Node`] owned by a single [`DeclTree`]. Children
//! are stored as ordered [`NodeId`] lists (declaration order), and each node
//! keeps a weak handle to its enclosing scope.

use std::ops::Index;

use thiserror::Error;

use crate::{Member, TypeCode};

/// Handle to a node inside a [`DeclTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A top-level or module-level definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    Module(Module),
    Interface(Interface),
    TypeDeclaration(TypeDeclaration),
    Annotation(AnnotationDeclaration),
}

impl Definition {
    pub fn module(name: impl Into<String>) -> Self {
        Definition::Module(Module {
            name: name.into(),
            definitions: Vec::new(),
        })
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Definition::Interface(Interface {
            name: name.into(),
            exports: Vec::new(),
        })
    }

    pub fn type_declaration(type_code: TypeCode) -> Self {
        Definition::TypeDeclaration(TypeDeclaration::new(type_code))
    }

    pub fn annotation(name: impl Into<String>, members: Vec<Member>) -> Self {
        Definition::Annotation(AnnotationDeclaration {
            name: name.into(),
            members,
        })
    }

    /// Declared name of the definition.
    pub fn name(&self) -> &str {
        match self {
            Definition::Module(m) => &m.name,
            Definition::Interface(i) => &i.name,
            Definition::TypeDeclaration(t) => &t.name,
            Definition::Annotation(a) => &a.name,
        }
    }

    /// Short label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Definition::Module(_) => "module",
            Definition::Interface(_) => "interface",
            Definition::TypeDeclaration(_) => "type declaration",
            Definition::Annotation(_) => "annotation",
        }
    }
}

/// A module scope. Its name is both a directory and a namespace segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub name: String,
    /// Child definitions in declaration order.
    pub definitions: Vec<NodeId>,
}

/// An interface and its exported members.
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    pub name: String,
    /// Exports in declaration order.
    pub exports: Vec<Export>,
}

impl Interface {
    /// Iterate over the operations declared by this interface.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.exports.iter().filter_map(|e| match e {
            Export::Operation(op) => Some(op),
            _ => None,
        })
    }

    /// Iterate over the exceptions declared by this interface.
    pub fn exceptions(&self) -> impl Iterator<Item = &Exception> {
        self.exports.iter().filter_map(|e| match e {
            Export::Exception(ex) => Some(ex),
            _ => None,
        })
    }
}

/// A member declared inside an interface body.
#[derive(Debug, Clone, PartialEq)]
pub enum Export {
    /// A nested type declaration, stored in the arena.
    TypeDeclaration(NodeId),
    Operation(Operation),
    Exception(Exception),
}

/// An interface operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub name: String,
    /// Return type, `None` for `void`.
    pub return_type: Option<String>,
    pub params: Vec<Member>,
    pub oneway: bool,
}

/// An exception declared inside an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exception {
    pub name: String,
    pub members: Vec<Member>,
}

/// A named type declaration owning its type code.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    pub name: String,
    pub type_code: TypeCode,
}

impl TypeDeclaration {
    pub fn new(type_code: TypeCode) -> Self {
        Self {
            name: type_code.name.clone(),
            type_code,
        }
    }
}

/// An annotation declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationDeclaration {
    pub name: String,
    pub members: Vec<Member>,
}

/// A definition plus its weak parent handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Enclosing module or interface, `None` at the root.
    pub parent: Option<NodeId>,
    pub definition: Definition,
}

/// Errors raised while assembling a tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("no node with index {0} in this tree")]
    UnknownNode(usize),

    #[error("a {child} cannot be declared inside a {parent}")]
    InvalidNesting {
        parent: &'static str,
        child: &'static str,
    },

    #[error("exports can only be added to interfaces, found a {0}")]
    NotAnInterface(&'static str),
}

/// Arena owning every declaration of a resolved model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclTree {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl DeclTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition under `parent` (or at the root) and return its handle.
    ///
    /// Type declarations inserted under an interface become
    /// [`Export::TypeDeclaration`] entries of that interface. Modules and
    /// annotations can only live at the root or inside modules.
    pub fn insert(
        &mut self,
        parent: Option<NodeId>,
        definition: Definition,
    ) -> Result<NodeId, TreeError> {
        let id = NodeId(self.nodes.len());

        match parent {
            None => self.roots.push(id),
            Some(pid) => {
                let child = definition.label();
                let is_type = matches!(definition, Definition::TypeDeclaration(_));
                let node = self
                    .nodes
                    .get_mut(pid.0)
                    .ok_or(TreeError::UnknownNode(pid.0))?;
                match &mut node.definition {
                    Definition::Module(m) => m.definitions.push(id),
                    Definition::Interface(i) if is_type => {
                        i.exports.push(Export::TypeDeclaration(id))
                    }
                    other => {
                        return Err(TreeError::InvalidNesting {
                            parent: other.label(),
                            child,
                        });
                    }
                }
            }
        }

        self.nodes.push(Node { parent, definition });
        Ok(id)
    }

    /// Append a non-type export (operation or exception) to an interface.
    pub fn push_export(&mut self, interface: NodeId, export: Export) -> Result<(), TreeError> {
        let node = self
            .nodes
            .get_mut(interface.0)
            .ok_or(TreeError::UnknownNode(interface.0))?;
        match &mut node.definition {
            Definition::Interface(i) => {
                i.exports.push(export);
                Ok(())
            }
            other => Err(TreeError::NotAnInterface(other.label())),
        }
    }

    /// Root definitions in declaration order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Look up a node by handle.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Borrow a node together with the tree it lives in.
    pub fn node_ref(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { tree: self, id }
    }

    /// Parent handle of a node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Scoped name of a node, e.g. `pkg::Calc::Vector`.
    pub fn scoped_name(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut current = Some(id);
        while let Some(cid) = current {
            let Some(node) = self.get(cid) else { break };
            segments.push(node.definition.name());
            current = node.parent;
        }
        segments.reverse();
        segments.join("::")
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Index<NodeId> for DeclTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

/// A node borrowed together with its tree, used wherever a parent scope is
/// handed to templates.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a DeclTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'a DeclTree {
        self.tree
    }

    pub fn definition(&self) -> &'a Definition {
        &self.tree[self.id].definition
    }

    pub fn name(&self) -> &'a str {
        self.definition().name()
    }

    pub fn scoped_name(&self) -> String {
        self.tree.scoped_name(self.id)
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.tree.parent(self.id).map(|id| self.tree.node_ref(id))
    }
}

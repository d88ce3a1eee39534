//! Lowering manifest definitions into a declaration tree.

use cdrgen_ir::{
    DeclTree, Definition, Exception, Export, NodeId, Operation, TreeError, TypeCode,
};

use super::{DefinitionKind, DefinitionSpec, Manifest};
use crate::{Error, Result};

impl Manifest {
    /// Build the declaration tree, assigning parent handles on the way down.
    pub fn to_tree(&self) -> Result<DeclTree> {
        let mut tree = DeclTree::new();
        lower_all(&mut tree, None, &self.definitions)?;
        Ok(tree)
    }
}

fn lower_all(tree: &mut DeclTree, parent: Option<NodeId>, specs: &[DefinitionSpec]) -> Result<()> {
    for spec in specs {
        lower(tree, parent, spec)?;
    }
    Ok(())
}

fn lower(tree: &mut DeclTree, parent: Option<NodeId>, spec: &DefinitionSpec) -> Result<()> {
    match spec.kind {
        DefinitionKind::Module => {
            let id = tree
                .insert(parent, Definition::module(&spec.name))
                .map_err(tree_error)?;
            lower_all(tree, Some(id), &spec.definitions)
        }
        DefinitionKind::Interface => {
            let id = tree
                .insert(parent, Definition::interface(&spec.name))
                .map_err(tree_error)?;
            lower_all(tree, Some(id), &spec.exports)
        }
        DefinitionKind::Annotation => {
            tree.insert(
                parent,
                Definition::annotation(&spec.name, spec.members.clone()),
            )
            .map_err(tree_error)?;
            Ok(())
        }
        DefinitionKind::Type(kind) => {
            let mut type_code = TypeCode::new(kind, &spec.name).with_members(spec.members.clone());
            type_code.attributes = spec.attributes.clone();
            tree.insert(parent, Definition::type_declaration(type_code))
                .map_err(tree_error)?;
            Ok(())
        }
        DefinitionKind::Operation => {
            let export = Export::Operation(Operation {
                name: spec.name.clone(),
                return_type: spec.returns.clone(),
                params: spec.params.clone(),
                oneway: spec.oneway,
            });
            push_export(tree, parent, export)
        }
        DefinitionKind::Exception => {
            let export = Export::Exception(Exception {
                name: spec.name.clone(),
                members: spec.members.clone(),
            });
            push_export(tree, parent, export)
        }
    }
}

fn push_export(tree: &mut DeclTree, parent: Option<NodeId>, export: Export) -> Result<()> {
    let interface = parent.ok_or_else(|| tree_error(TreeError::NotAnInterface("top-level scope")))?;
    tree.push_export(interface, export).map_err(tree_error)
}

fn tree_error(err: TreeError) -> Box<Error> {
    Box::new(Error::Tree(err))
}

//! Resolved declaration tree for the cdrgen source generator.
//!
//! This crate holds the already-resolved IDL model the generator walks:
//! modules, interfaces, type declarations and annotations, plus the
//! read-only render policy and the extension registry supplied per run.
//!
//! # Architecture
//!
//! ```text
//! cdrgen.toml → cdrgen-manifest (parsing) → cdrgen-ir (DeclTree) → codegen
//! ```
//!
//! Nodes live in a single arena ([`DeclTree`]). Parent back-references are
//! [`NodeId`] handles into that arena, so a tree can be assembled in any
//! order without reference cycles.

mod context;
mod extension;
mod tree;
mod types;

pub use context::{Encoding, RenderContext};
pub use extension::{ExtensionKey, ExtensionRegistry};
pub use tree::{
    AnnotationDeclaration, DeclTree, Definition, Exception, Export, Interface, Module, Node,
    NodeId, NodeRef, Operation, TreeError, TypeDeclaration,
};
pub use types::{Kind, Member, TypeCode};

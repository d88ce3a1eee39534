//! Declaration tree walking and template dispatch for cdrgen.
//!
//! This crate turns a resolved [`DeclTree`](cdrgen_ir::DeclTree) into one
//! rendered file per top-level declaration, using a language backend that
//! implements [`Renderer`].
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building blocks for backends
//! - [`render`] - Template bindings and the renderer/backend traits
//! - [`generation`] - Kind dispatch, tree walking, output sinks and the [`Generator`]
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod generation;
pub mod render;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use generation::{
    FsOutput, GenerateReport, Generator, KindDispatcher, KindTemplate, Namespace, Output,
    PreviewFile, PreviewOutput, Walker,
};
pub use render::{Bindings, LanguageBackend, Renderer, Value, templates};

//! cdrgen.toml parsing, validation and lowering.
//!
//! The manifest names the library, the render context, extension hooks,
//! user templates and the resolved declaration tree to generate from.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    CdrgenToml, DefinitionKind, DefinitionSpec, GeneratorConfig, Language, Manifest,
};
pub use validate::ParseContext;

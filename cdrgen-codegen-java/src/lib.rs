//! Java backend for cdrgen.
//!
//! [`JavaBackend`] renders every built-in template id to Java source and a
//! Gradle build script, and falls back to user templates registered from
//! the manifest.

mod backend;
pub mod files;
mod type_mapper;
mod user_template;

pub use backend::JavaBackend;
pub use type_mapper::JavaTypeMapper;
pub use user_template::UserTemplate;

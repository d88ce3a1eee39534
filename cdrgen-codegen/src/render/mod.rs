//! Template rendering contract.
//!
//! - [`Bindings`] / [`Value`] - Named values handed to a template
//! - [`Renderer`] - Pure template id + bindings → text
//! - [`LanguageBackend`] - A renderer plus the file naming of its target language
//! - [`templates`] - Well-known template and binding names

mod backend;
mod bindings;

pub use backend::{LanguageBackend, Renderer};
pub use bindings::{Bindings, Value};

/// Well-known template ids.
pub mod templates {
    /// File-level wrapper template.
    pub const MAIN: &str = "main";
    /// Interface body template.
    pub const INTERFACE: &str = "interface";
    /// Annotation template.
    pub const ANNOTATION: &str = "annotation";
    pub const STRUCT_TYPE: &str = "struct_type";
    pub const UNION_TYPE: &str = "union_type";
    pub const ENUM_TYPE: &str = "enum_type";
    pub const BITSET_TYPE: &str = "bitset_type";
    pub const BITMASK_TYPE: &str = "bitmask_type";
    /// Build descriptor emitted once at the output root.
    pub const BUILD_DESCRIPTOR: &str = "build_descriptor";

    /// Every template a backend must provide.
    pub const ALL: &[&str] = &[
        MAIN,
        INTERFACE,
        ANNOTATION,
        STRUCT_TYPE,
        UNION_TYPE,
        ENUM_TYPE,
        BITSET_TYPE,
        BITMASK_TYPE,
        BUILD_DESCRIPTOR,
    ];

    /// Whether `id` names a built-in template.
    pub fn is_builtin(id: &str) -> bool {
        ALL.contains(&id)
    }
}

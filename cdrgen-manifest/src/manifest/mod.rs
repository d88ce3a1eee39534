//! Manifest types and parsing for cdrgen.toml files.

mod definition;
mod file;
mod language;
mod lower;
mod parse;
mod validate;

use std::path::PathBuf;

use cdrgen_ir::{ExtensionRegistry, RenderContext};
pub use definition::{DefinitionKind, DefinitionSpec};
pub use file::CdrgenToml;
use indexmap::IndexMap;
pub use language::Language;
use serde::Deserialize;

/// Root manifest for cdrgen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generation run settings
    pub generator: GeneratorConfig,

    /// Render policy handed to every template as `ctx`
    #[serde(default)]
    pub context: RenderContext,

    /// Extension hook → template id
    #[serde(default)]
    pub extensions: ExtensionRegistry,

    /// User template id → literal template text
    #[serde(default)]
    pub templates: IndexMap<String, String>,

    /// Top-level definitions in declaration order
    #[serde(default)]
    pub definitions: Vec<DefinitionSpec>,
}

/// The `[generator]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Library name handed to the build descriptor.
    pub library: String,
    /// Package prefix of top-level definitions.
    #[serde(default)]
    pub package: String,
    /// Output directory, relative to the manifest.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub language: Language,
    /// Replace files that already exist.
    #[serde(default)]
    pub overwrite: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from(".")
}

impl Manifest {
    /// Number of definitions at every nesting level, exports included.
    pub fn definition_count(&self) -> usize {
        fn count(specs: &[DefinitionSpec]) -> usize {
            specs
                .iter()
                .map(|s| 1 + count(&s.definitions) + count(&s.exports))
                .sum()
        }
        count(&self.definitions)
    }
}

use std::path::PathBuf;

use cdrgen_manifest::{CdrgenToml, DefinitionSpec, Manifest};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to cdrgen.toml (defaults to ./cdrgen.toml)
    #[arg(short, long, default_value = "cdrgen.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let cdrgen_toml = CdrgenToml::open(&self.config).unwrap_or_exit();
        print!("{}", listing(cdrgen_toml.manifest()));
        Ok(())
    }
}

fn listing(manifest: &Manifest) -> String {
    let mut out = String::new();

    if manifest.definitions.is_empty() {
        out.push_str("No definitions\n");
    } else {
        out.push_str("Definitions:\n");
        push_definitions(&mut out, &manifest.definitions, 1);
    }

    if !manifest.extensions.is_empty() {
        out.push_str("\nExtensions:\n");
        for (key, template) in manifest.extensions.iter() {
            out.push_str(&format!("  {} -> {}\n", key.as_str(), template));
        }
    }

    if !manifest.templates.is_empty() {
        out.push_str("\nTemplates:\n");
        for id in manifest.templates.keys() {
            out.push_str(&format!("  {}\n", id));
        }
    }

    out
}

fn push_definitions(out: &mut String, specs: &[DefinitionSpec], depth: usize) {
    let indent = "  ".repeat(depth);
    for spec in specs {
        out.push_str(&format!("{}{} {}\n", indent, spec.kind, spec.name));
        push_definitions(out, &spec.definitions, depth + 1);
        push_definitions(out, &spec.exports, depth + 1);
    }
}

use std::path::PathBuf;

use cdrgen_manifest::CdrgenToml;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    language::LanguageSupport,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to cdrgen.toml (defaults to ./cdrgen.toml)
    #[arg(short, long, default_value = "cdrgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let cdrgen_toml = CdrgenToml::open(&self.config).unwrap_or_exit();
        let manifest = cdrgen_toml.manifest();
        let tree = manifest.to_tree().unwrap_or_exit();

        let report = ops::check(
            manifest,
            &tree,
            LanguageSupport::get(manifest.generator.language),
            &self.config,
        );
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}

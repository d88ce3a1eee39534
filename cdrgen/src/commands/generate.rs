use std::path::PathBuf;

use cdrgen_core::Overwrite;
use cdrgen_manifest::{CdrgenToml, Language};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    language::LanguageSupport,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to cdrgen.toml (defaults to ./cdrgen.toml)
    #[arg(short, long, default_value = "cdrgen.toml")]
    pub config: PathBuf,

    /// Output directory (overrides [generator].output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replace files that already exist
    #[arg(long)]
    pub force: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Target language (overrides cdrgen.toml setting)
    #[arg(short, long)]
    pub language: Option<Language>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let cdrgen_toml = CdrgenToml::open(&self.config).unwrap_or_exit();
        let manifest = cdrgen_toml.manifest();
        let tree = manifest.to_tree().unwrap_or_exit();

        // Use CLI flag if provided, otherwise use manifest setting
        let language = self.language.unwrap_or(manifest.generator.language);
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| cdrgen_toml.output_dir());
        let overwrite = Overwrite::from_replace(self.force || manifest.generator.overwrite);

        let summary = ops::generate(
            manifest,
            &tree,
            LanguageSupport::get(language),
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                overwrite,
            },
        )?;
        summary.render(&mut TerminalOutput::new());

        Ok(())
    }
}

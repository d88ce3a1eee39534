//! Check command report data structures.

use std::path::PathBuf;

use super::{
    generate::plural,
    output::{Output, Report},
};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub library: String,
    pub language: &'static str,
    pub definition_count: usize,
    /// Files a generation run would emit, relative to the output directory.
    pub files: Vec<PathBuf>,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.is_valid() {
            return;
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.preformatted(&format!("  {} ({})", self.library, self.language));
        out.preformatted(&format!(
            "  {} definition{}, {} file{}",
            self.definition_count,
            plural(self.definition_count),
            self.files.len(),
            plural(self.files.len())
        ));
    }
}

//! Generate command report data structures.

use std::path::{Path, PathBuf};

use cdrgen_codegen::{GenerateReport, PreviewFile};

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateSummary {
    /// Library name from the manifest.
    pub library: String,
    /// Target language identifier.
    pub language: &'static str,
    /// Definitions at every nesting level.
    pub definition_count: usize,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    pub report: GenerateReport,
}

impl Report for GenerateSummary {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateSummary {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!(
            "{} ({}), {} definition{}",
            self.library,
            self.language,
            self.definition_count,
            plural(self.definition_count)
        ));
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
        for path in &written.report.written {
            out.added_item(&relative(&written.output_dir, path));
        }
        for path in &written.report.skipped {
            out.unchanged_item(&relative(&written.output_dir, path));
        }

        out.newline();
        out.preformatted(&format!(
            "{} written, {} unchanged",
            written.report.written.len(),
            written.report.skipped.len()
        ));
        if !written.report.skipped.is_empty() {
            out.preformatted("Use --force to replace existing files");
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} file{} would be generated",
            files.len(),
            plural(files.len())
        ));
    }
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    fn summary(result: GenerationResult) -> GenerateSummary {
        GenerateSummary {
            library: "geolib".to_string(),
            language: "java",
            definition_count: 4,
            result,
        }
    }

    #[test]
    fn test_written_paths_are_relative_to_output() {
        let root = PathBuf::from("out");
        let report = GenerateReport {
            written: vec![root.join("geo").join("Point.java")],
            skipped: vec![root.join("build.gradle")],
            created_dirs: vec![root.join("geo")],
        };
        let mut out = BufferOutput::default();
        summary(GenerationResult::Written(WrittenResult {
            output_dir: root,
            report,
        }))
        .render(&mut out);

        assert_eq!(out.lines[0], "geolib (java), 4 definitions");
        let point = Path::new("geo").join("Point.java");
        assert!(out.lines.contains(&format!("  + {}", point.display())));
        assert!(out.lines.contains(&"  = build.gradle".to_string()));
        assert!(out.lines.contains(&"1 written, 1 unchanged".to_string()));
    }

    #[test]
    fn test_preview_prints_every_file() {
        let files = vec![PreviewFile {
            path: PathBuf::from("build.gradle"),
            content: "rootProject.name = 'geolib'".to_string(),
        }];
        let mut out = BufferOutput::default();
        summary(GenerationResult::Preview(files)).render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "── build.gradle ──",
                "rootProject.name = 'geolib'",
                "── Summary ──",
                "1 file would be generated",
            ]
        );
    }
}

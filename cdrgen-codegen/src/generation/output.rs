//! Output sinks for rendered files.

use std::path::{Path, PathBuf};

use cdrgen_core::{File, GenError, Overwrite, Result, WriteResult, ensure_dir};

/// Destination of a generation run.
///
/// The walker only talks to this trait, so the same traversal can write to
/// disk or collect a preview in memory.
pub trait Output {
    /// Make sure the output root exists.
    fn create_root(&mut self, path: &Path) -> Result<()>;

    /// Create a module directory unless it already exists.
    fn create_dir(&mut self, path: &Path) -> Result<()>;

    /// Emit one rendered file.
    fn write(&mut self, path: &Path, content: String) -> Result<WriteResult>;
}

impl<O: Output + ?Sized> Output for &mut O {
    fn create_root(&mut self, path: &Path) -> Result<()> {
        (**self).create_root(path)
    }

    fn create_dir(&mut self, path: &Path) -> Result<()> {
        (**self).create_dir(path)
    }

    fn write(&mut self, path: &Path, content: String) -> Result<WriteResult> {
        (**self).write(path, content)
    }
}

/// Statistics from a generation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Files written, in emission order.
    pub written: Vec<PathBuf>,
    /// Files left untouched because they already existed.
    pub skipped: Vec<PathBuf>,
    /// Module directories created by this run.
    pub created_dirs: Vec<PathBuf>,
}

impl GenerateReport {
    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len()
    }
}

/// Writes files to disk according to an overwrite policy.
#[derive(Debug, Default)]
pub struct FsOutput {
    overwrite: Overwrite,
    report: GenerateReport,
}

impl FsOutput {
    pub fn new(overwrite: Overwrite) -> Self {
        Self {
            overwrite,
            report: GenerateReport::default(),
        }
    }

    pub fn report(&self) -> &GenerateReport {
        &self.report
    }

    pub fn into_report(self) -> GenerateReport {
        self.report
    }
}

impl Output for FsOutput {
    fn create_root(&mut self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|source| GenError::DirectoryCreate {
            path: path.to_path_buf(),
            source,
        })
    }

    fn create_dir(&mut self, path: &Path) -> Result<()> {
        if ensure_dir(path)? {
            self.report.created_dirs.push(path.to_path_buf());
        }
        Ok(())
    }

    fn write(&mut self, path: &Path, content: String) -> Result<WriteResult> {
        let result = File::new(path, content)
            .with_overwrite(self.overwrite)
            .write()?;
        match result {
            WriteResult::Written => self.report.written.push(path.to_path_buf()),
            WriteResult::Skipped => self.report.skipped.push(path.to_path_buf()),
        }
        Ok(result)
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path relative to the output directory
    pub path: PathBuf,
    /// File content
    pub content: String,
}

/// Collects rendered files in memory without touching the filesystem.
#[derive(Debug, Default)]
pub struct PreviewOutput {
    files: Vec<PreviewFile>,
}

impl PreviewOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[PreviewFile] {
        &self.files
    }

    pub fn into_files(self) -> Vec<PreviewFile> {
        self.files
    }
}

impl Output for PreviewOutput {
    fn create_root(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn create_dir(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn write(&mut self, path: &Path, content: String) -> Result<WriteResult> {
        self.files.push(PreviewFile {
            path: path.to_path_buf(),
            content,
        });
        Ok(WriteResult::Written)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_fs_output_records_written_and_skipped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Point.java");
        let mut output = FsOutput::new(Overwrite::IfMissing);

        assert_eq!(
            output.write(&path, "first".to_string()).unwrap(),
            WriteResult::Written
        );
        assert_eq!(
            output.write(&path, "second".to_string()).unwrap(),
            WriteResult::Skipped
        );

        let report = output.into_report();
        assert_eq!(report.written, vec![path.clone()]);
        assert_eq!(report.skipped, vec![path.clone()]);
        assert_eq!(report.total(), 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn test_fs_output_records_only_new_dirs() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("pkg");
        let mut output = FsOutput::new(Overwrite::Always);

        output.create_dir(&dir).unwrap();
        output.create_dir(&dir).unwrap();

        assert_eq!(output.report().created_dirs, vec![dir]);
    }

    #[test]
    fn test_fs_output_create_root_is_recursive() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("a").join("b");
        let mut output = FsOutput::new(Overwrite::Always);

        output.create_root(&root).unwrap();
        assert!(root.is_dir());
    }

    #[test]
    fn test_preview_output_collects_in_order() {
        let mut output = PreviewOutput::new();
        output.create_dir(Path::new("pkg")).unwrap();
        output
            .write(Path::new("pkg/A.java"), "a".to_string())
            .unwrap();
        output
            .write(Path::new("pkg/B.java"), "b".to_string())
            .unwrap();

        let paths: Vec<_> = output.files().iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            vec![PathBuf::from("pkg/A.java"), PathBuf::from("pkg/B.java")]
        );
    }
}

use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Error, Result};

/// A cdrgen.toml file with both raw content and parsed manifest.
pub struct CdrgenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl CdrgenToml {
    /// Open and parse a cdrgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::parse(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Output directory, resolved against the manifest's directory.
    pub fn output_dir(&self) -> PathBuf {
        let base = self.path.parent().unwrap_or(Path::new(""));
        base.join(&self.manifest.generator.output)
    }
}

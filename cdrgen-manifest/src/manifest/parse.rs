//! Manifest parsing.

use std::str::FromStr;

use super::{Manifest, validate::validate_manifest};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Manifest::parse(s, "cdrgen.toml")
    }
}

impl Manifest {
    /// Deserialize and validate `content`; diagnostics name `filename`.
    pub fn parse(content: &str, filename: &str) -> Result<Self> {
        let source = SourceContext::new(content, filename);
        let manifest: Manifest = toml::from_str(content).map_err(|e| source.parse_error(e))?;
        validate_manifest(&manifest, &source)?;
        Ok(manifest)
    }
}

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation steps.
pub type Result<T> = std::result::Result<T, GenError>;

/// Failure reported by a template renderer.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum RenderError {
    #[error("unknown template '{0}'")]
    #[diagnostic(
        code(cdrgen::unknown_template),
        help("define it under [templates] in cdrgen.toml or use a built-in template")
    )]
    UnknownTemplate(String),

    #[error("template '{template}' requires the '{binding}' binding")]
    #[diagnostic(code(cdrgen::missing_binding))]
    MissingBinding { template: String, binding: String },

    #[error("binding '{binding}' of template '{template}' has the wrong type, expected {expected}")]
    #[diagnostic(code(cdrgen::binding_type))]
    BindingType {
        template: String,
        binding: String,
        expected: &'static str,
    },
}

/// Fatal error of a generation run. There is no retry for any variant.
#[derive(Debug, Error, Diagnostic)]
pub enum GenError {
    #[error("cannot create directory '{path}'")]
    #[diagnostic(
        code(cdrgen::directory_create),
        help("check that no regular file is in the way of the module directory")
    )]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write file '{path}'")]
    #[diagnostic(code(cdrgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render template '{template}'")]
    #[diagnostic(code(cdrgen::render))]
    Render {
        template: String,
        #[source]
        #[diagnostic_source]
        source: RenderError,
    },
}

impl GenError {
    pub fn render(template: impl Into<String>, source: RenderError) -> Self {
        GenError::Render {
            template: template.into(),
            source,
        }
    }

    /// Path involved in a filesystem failure.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            GenError::DirectoryCreate { path, .. } | GenError::Io { path, .. } => Some(path),
            GenError::Render { .. } => None,
        }
    }
}

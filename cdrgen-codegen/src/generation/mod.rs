//! Declaration tree walking and file emission.
//!
//! - [`KindDispatcher`] - Type code kind → template, with extension splicing
//! - [`Walker`] - Depth-first traversal of modules, interfaces and declarations
//! - [`Output`] - Where rendered files go ([`FsOutput`] or [`PreviewOutput`])
//! - [`Generator`] - One full run: walk, then emit the build descriptor

mod dispatch;
mod generator;
mod namespace;
mod output;
mod walker;

pub use dispatch::{KindDispatcher, KindTemplate};
pub use generator::Generator;
pub use namespace::Namespace;
pub use output::{FsOutput, GenerateReport, Output, PreviewFile, PreviewOutput};
pub use walker::Walker;

use cdrgen_core::{GenError, Result};

use crate::render::{Bindings, Renderer};

/// Render a template, attributing renderer failures to the template id.
pub(crate) fn render<R: Renderer + ?Sized>(
    renderer: &R,
    template: &str,
    bindings: &Bindings<'_>,
) -> Result<String> {
    renderer
        .render(template, bindings)
        .map_err(|source| GenError::render(template, source))
}

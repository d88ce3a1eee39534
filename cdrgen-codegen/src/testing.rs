//! Test utilities for walker and backend tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{cell::RefCell, fmt::Write};

use cdrgen_core::RenderError;

use crate::render::{Bindings, LanguageBackend, Renderer, Value};

/// Deterministic renderer that echoes the template id and its bindings.
///
/// `struct_type` bound to `{struct, ctx, parent}` renders as
/// `struct_type(struct=Point ctx parent=pkg)`. Text values are wrapped in
/// brackets and lists are joined with `|`. Template ids starting with
/// `fail` return [`RenderError::UnknownTemplate`].
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoRenderer;

impl Renderer for EchoRenderer {
    fn render(&self, template: &str, bindings: &Bindings<'_>) -> Result<String, RenderError> {
        if template.starts_with("fail") {
            return Err(RenderError::UnknownTemplate(template.to_string()));
        }

        let mut parts = Vec::with_capacity(bindings.len());
        for name in bindings.names() {
            let Some(value) = bindings.get(name) else {
                continue;
            };
            let mut part = String::from(name);
            match value {
                Value::Context(_) => {}
                Value::Scope(node) => {
                    let _ = write!(part, "={}", node.scoped_name());
                }
                Value::Interface(ifc) => {
                    let _ = write!(part, "={}", ifc.name);
                }
                Value::Annotation(annotation) => {
                    let _ = write!(part, "={}", annotation.name);
                }
                Value::TypeCode(tc) => {
                    let _ = write!(part, "={}", tc.name);
                }
                Value::Text(text) => {
                    let _ = write!(part, "=[{}]", text);
                }
                Value::List(items) => {
                    let _ = write!(part, "=[{}]", items.join("|"));
                }
            }
            parts.push(part);
        }
        Ok(format!("{}({})", template, parts.join(" ")))
    }
}

impl LanguageBackend for EchoRenderer {
    fn language(&self) -> &'static str {
        "echo"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn descriptor_file_name(&self) -> &'static str {
        "BUILD"
    }
}

/// Echo renderer that also records every template id it was asked for.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: RefCell<Vec<String>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Template ids in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, template: &str, bindings: &Bindings<'_>) -> Result<String, RenderError> {
        self.calls.borrow_mut().push(template.to_string());
        EchoRenderer.render(template, bindings)
    }
}

impl LanguageBackend for RecordingRenderer {
    fn language(&self) -> &'static str {
        EchoRenderer.language()
    }

    fn file_extension(&self) -> &'static str {
        EchoRenderer.file_extension()
    }

    fn descriptor_file_name(&self) -> &'static str {
        EchoRenderer.descriptor_file_name()
    }
}

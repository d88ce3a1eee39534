use cdrgen_codegen::{Bindings, builder::CodeBuilder, templates};
use cdrgen_core::RenderError;
use cdrgen_ir::RenderContext;

/// File-level wrapper around one rendered declaration.
pub struct MainJava<'a> {
    ctx: &'a RenderContext,
    definitions: &'a str,
    package: Option<&'a str>,
    extension: Option<&'a str>,
}

impl<'a> MainJava<'a> {
    pub fn from_bindings(bindings: &'a Bindings<'_>) -> Result<Self, RenderError> {
        Ok(Self {
            ctx: bindings.require_context(templates::MAIN, "ctx")?,
            definitions: bindings.require_text(templates::MAIN, "definitions")?,
            package: bindings.text("package"),
            extension: bindings.text("extension"),
        })
    }

    pub fn render(&self) -> String {
        let mut b = CodeBuilder::java();
        b.push_line(&format!(
            "// Generated by cdrgen for {} ({}). Do not edit.",
            self.ctx.product, self.ctx.encoding
        ))
        .push_blank();
        if let Some(package) = self.package {
            b.push_line(&format!("package {};", package)).push_blank();
        }
        b.push_text(self.definitions);
        super::push_extension(&mut b, self.extension);
        b.build()
    }
}

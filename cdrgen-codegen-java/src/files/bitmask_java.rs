use cdrgen_codegen::{Bindings, builder::CodeBuilder, templates};
use cdrgen_core::{RenderError, to_screaming_snake_case};
use cdrgen_ir::{NodeRef, TypeCode};

/// A bitmask as a holder of `long` flag constants.
///
/// A member's value is its bit position; unpositioned flags follow the
/// previous one.
pub struct BitmaskJava<'a> {
    tc: &'a TypeCode,
    parent: Option<NodeRef<'a>>,
    extension: Option<&'a str>,
}

impl<'a> BitmaskJava<'a> {
    pub fn from_bindings(bindings: &'a Bindings<'_>) -> Result<Self, RenderError> {
        bindings.require_context(templates::BITMASK_TYPE, "ctx")?;
        Ok(Self {
            tc: bindings.require_type_code(templates::BITMASK_TYPE, "bitmask")?,
            parent: bindings.scope("parent"),
            extension: bindings.text("extension"),
        })
    }

    pub fn render(&self) -> String {
        let name = &self.tc.name;
        let mut b = CodeBuilder::java();
        b.push_line(&format!(
            "{} final class {} {{",
            super::class_modifiers(self.parent),
            name
        ))
        .push_indent();

        let mut position = 0u32;
        for m in &self.tc.members {
            if let Some(explicit) = m.value.as_deref().and_then(|v| v.parse::<u32>().ok()) {
                position = explicit;
            }
            b.push_line(&format!(
                "public static final long {} = 1L << {};",
                to_screaming_snake_case(&m.name),
                position
            ));
            position += 1;
        }
        if !self.tc.members.is_empty() {
            b.push_blank();
        }
        b.push_line(&format!("private {}() {{", name)).push_line("}");
        super::push_extension(&mut b, self.extension);
        b.push_dedent().push_line("}");
        b.build()
    }
}

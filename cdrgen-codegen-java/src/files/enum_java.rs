use cdrgen_codegen::{Bindings, builder::CodeBuilder, templates};
use cdrgen_core::RenderError;
use cdrgen_ir::{NodeRef, TypeCode};

/// An enumeration as a Java enum.
///
/// Explicit enumerator values turn into a `value()` accessor.
pub struct EnumJava<'a> {
    tc: &'a TypeCode,
    parent: Option<NodeRef<'a>>,
    extension: Option<&'a str>,
}

impl<'a> EnumJava<'a> {
    pub fn from_bindings(bindings: &'a Bindings<'_>) -> Result<Self, RenderError> {
        bindings.require_context(templates::ENUM_TYPE, "ctx")?;
        Ok(Self {
            tc: bindings.require_type_code(templates::ENUM_TYPE, "enum")?,
            parent: bindings.scope("parent"),
            extension: bindings.text("extension"),
        })
    }

    pub fn render(&self) -> String {
        let name = &self.tc.name;
        let valued = self.tc.members.iter().any(|m| m.value.is_some());
        let modifiers = super::class_modifiers(self.parent);

        let mut b = CodeBuilder::java();
        b.push_line(&format!("{} enum {} {{", modifiers, name))
            .push_indent();

        let last = self.tc.members.len().saturating_sub(1);
        let mut next = 0i64;
        for (i, m) in self.tc.members.iter().enumerate() {
            let sep = if i == last { ";" } else { "," };
            if valued {
                let value = m
                    .value
                    .as_deref()
                    .and_then(|v| v.parse::<i64>().ok())
                    .unwrap_or(next);
                next = value + 1;
                b.push_line(&format!("{}({}){}", m.name, value, sep));
            } else {
                b.push_line(&format!("{}{}", m.name, sep));
            }
        }
        if self.tc.members.is_empty() {
            b.push_line(";");
        }

        if valued {
            b.push_blank()
                .push_line("private final int value;")
                .push_blank()
                .push_line(&format!("{}(int value) {{", name))
                .push_indent()
                .push_line("this.value = value;")
                .push_dedent()
                .push_line("}")
                .push_blank()
                .push_line("public int value() {")
                .push_indent()
                .push_line("return value;")
                .push_dedent()
                .push_line("}");
        }
        super::push_extension(&mut b, self.extension);
        b.push_dedent().push_line("}");
        b.build()
    }
}

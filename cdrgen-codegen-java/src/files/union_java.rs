use cdrgen_codegen::{Bindings, builder::CodeBuilder, templates};
use cdrgen_core::RenderError;
use cdrgen_ir::{NodeRef, RenderContext, TypeCode};

use crate::JavaTypeMapper;

/// A discriminated union as a class with one field per case.
///
/// The discriminator type comes from the `discriminator` attribute
/// (default `long`). Each member's value is its case label; members
/// without a label, or labelled `default`, leave the discriminator alone.
pub struct UnionJava<'a> {
    tc: &'a TypeCode,
    ctx: &'a RenderContext,
    parent: Option<NodeRef<'a>>,
    extension: Option<&'a str>,
}

impl<'a> UnionJava<'a> {
    pub fn from_bindings(bindings: &'a Bindings<'_>) -> Result<Self, RenderError> {
        Ok(Self {
            tc: bindings.require_type_code(templates::UNION_TYPE, "union")?,
            ctx: bindings.require_context(templates::UNION_TYPE, "ctx")?,
            parent: bindings.scope("parent"),
            extension: bindings.text("extension"),
        })
    }

    pub fn render(&self) -> String {
        let mapper = JavaTypeMapper;
        let name = &self.tc.name;
        let disc = mapper.map(self.tc.attribute("discriminator").unwrap_or("long"));

        let mut b = CodeBuilder::java();
        b.push_line(&format!(
            "{} class {} {{",
            super::class_modifiers(self.parent),
            name
        ))
        .push_indent()
        .push_line(&format!("private {} _d;", disc));
        for m in &self.tc.members {
            b.push_line(&format!("private {} {};", mapper.map(&m.type_name), m.name));
        }
        b.push_blank()
            .push_line(&format!("public {}() {{", name))
            .push_line("}")
            .push_blank()
            .push_line(&format!("public {} discriminator() {{", disc))
            .push_indent()
            .push_line("return _d;")
            .push_dedent()
            .push_line("}");

        for m in &self.tc.members {
            let assign = m
                .value
                .as_deref()
                .filter(|label| *label != "default")
                .map(|label| format!("_d = {};", label.replace("::", ".")));
            super::push_accessors(
                &mut b,
                &mapper.map(&m.type_name),
                &m.name,
                assign.as_deref(),
            );
        }
        if self.ctx.type_object {
            super::push_type_name(&mut b, &super::scoped_name(self.parent, name));
        }
        super::push_extension(&mut b, self.extension);
        b.push_dedent().push_line("}");
        b.build()
    }
}

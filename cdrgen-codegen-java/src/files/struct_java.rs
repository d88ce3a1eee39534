use cdrgen_codegen::{Bindings, builder::CodeBuilder, templates};
use cdrgen_core::RenderError;
use cdrgen_ir::{NodeRef, RenderContext, TypeCode};

use crate::JavaTypeMapper;

/// A struct as a Java bean.
pub struct StructJava<'a> {
    tc: &'a TypeCode,
    ctx: &'a RenderContext,
    parent: Option<NodeRef<'a>>,
    extension: Option<&'a str>,
}

impl<'a> StructJava<'a> {
    pub fn from_bindings(bindings: &'a Bindings<'_>) -> Result<Self, RenderError> {
        Ok(Self {
            tc: bindings.require_type_code(templates::STRUCT_TYPE, "struct")?,
            ctx: bindings.require_context(templates::STRUCT_TYPE, "ctx")?,
            parent: bindings.scope("parent"),
            extension: bindings.text("extension"),
        })
    }

    pub fn render(&self) -> String {
        let mapper = JavaTypeMapper;
        let name = &self.tc.name;
        let fields: Vec<_> = self
            .tc
            .members
            .iter()
            .map(|m| (mapper.map(&m.type_name), m.name.as_str()))
            .collect();

        let mut b = CodeBuilder::java();
        b.push_line(&format!(
            "{} class {} {{",
            super::class_modifiers(self.parent),
            name
        ))
        .push_indent();
        for (ty, field) in &fields {
            b.push_line(&format!("private {} {};", ty, field));
        }
        if !fields.is_empty() {
            b.push_blank();
        }
        b.push_line(&format!("public {}() {{", name)).push_line("}");
        for (ty, field) in &fields {
            super::push_accessors(&mut b, ty, field, None);
        }
        if self.ctx.type_object {
            super::push_type_name(&mut b, &super::scoped_name(self.parent, name));
        }
        super::push_extension(&mut b, self.extension);
        b.push_dedent().push_line("}");
        b.build()
    }
}

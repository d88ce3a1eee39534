use cdrgen_codegen::{Bindings, builder::CodeBuilder, templates};
use cdrgen_core::RenderError;
use cdrgen_ir::AnnotationDeclaration;

use crate::JavaTypeMapper;

/// An annotation declaration as a Java `@interface`.
pub struct AnnotationJava<'a> {
    annotation: &'a AnnotationDeclaration,
    extension: Option<&'a str>,
}

impl<'a> AnnotationJava<'a> {
    pub fn from_bindings(bindings: &'a Bindings<'_>) -> Result<Self, RenderError> {
        bindings.require_context(templates::ANNOTATION, "ctx")?;
        Ok(Self {
            annotation: bindings.require_annotation(templates::ANNOTATION, "annotation")?,
            extension: bindings.text("extension"),
        })
    }

    pub fn render(&self) -> String {
        let mapper = JavaTypeMapper;
        let mut b = CodeBuilder::java();
        b.push_line(&format!("public @interface {} {{", self.annotation.name))
            .push_indent();
        for m in &self.annotation.members {
            let ty = mapper.map(&m.type_name);
            match &m.value {
                Some(default) => b.push_line(&format!("{} {}() default {};", ty, m.name, default)),
                None => b.push_line(&format!("{} {}();", ty, m.name)),
            };
        }
        super::push_extension(&mut b, self.extension);
        b.push_dedent().push_line("}");
        b.build()
    }
}

use cdrgen_codegen::{Bindings, builder::CodeBuilder, templates};
use cdrgen_core::RenderError;
use cdrgen_ir::{Exception, Interface, Operation, RenderContext};

use crate::JavaTypeMapper;

/// An interface with its nested types, and optionally its exceptions and
/// operations.
pub struct InterfaceJava<'a> {
    interface: &'a Interface,
    ctx: &'a RenderContext,
    exports: &'a [String],
    extension: Option<&'a str>,
}

impl<'a> InterfaceJava<'a> {
    pub fn from_bindings(bindings: &'a Bindings<'_>) -> Result<Self, RenderError> {
        Ok(Self {
            interface: bindings.require_interface(templates::INTERFACE, "interface")?,
            ctx: bindings.require_context(templates::INTERFACE, "ctx")?,
            exports: bindings.list("exports").unwrap_or_default(),
            extension: bindings.text("extension"),
        })
    }

    pub fn render(&self) -> String {
        let mut b = CodeBuilder::java();
        b.push_line(&format!("public interface {} {{", self.interface.name))
            .push_indent();

        let mut first = true;
        for export in self.exports {
            separate(&mut b, &mut first);
            b.push_text(export);
        }
        if self.ctx.print_exception {
            for exception in self.interface.exceptions() {
                separate(&mut b, &mut first);
                push_exception(&mut b, exception);
            }
        }
        if self.ctx.print_operation {
            for operation in self.interface.operations() {
                separate(&mut b, &mut first);
                push_operation(&mut b, operation);
            }
        }
        super::push_extension(&mut b, self.extension);
        b.push_dedent().push_line("}");
        b.build()
    }
}

fn separate(b: &mut CodeBuilder, first: &mut bool) {
    if !std::mem::take(first) {
        b.push_blank();
    }
}

fn push_exception(b: &mut CodeBuilder, exception: &Exception) {
    let mapper = JavaTypeMapper;
    b.push_line(&format!(
        "public static class {} extends Exception {{",
        exception.name
    ))
    .push_indent()
    .push_line("private static final long serialVersionUID = 1L;");
    for m in &exception.members {
        b.push_line(&format!("public {} {};", mapper.map(&m.type_name), m.name));
    }
    b.push_dedent().push_line("}");
}

fn push_operation(b: &mut CodeBuilder, operation: &Operation) {
    let mapper = JavaTypeMapper;
    let ret = match (&operation.return_type, operation.oneway) {
        (Some(ty), false) => mapper.map(ty),
        _ => "void".to_string(),
    };
    let params = operation
        .params
        .iter()
        .map(|p| format!("{} {}", mapper.map(&p.type_name), p.name))
        .collect::<Vec<_>>()
        .join(", ");
    if operation.oneway {
        b.push_javadoc("oneway");
    }
    b.push_line(&format!("{} {}({});", ret, operation.name, params));
}

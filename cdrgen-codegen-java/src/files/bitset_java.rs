use cdrgen_codegen::{Bindings, builder::CodeBuilder, templates};
use cdrgen_core::{RenderError, to_pascal_case};
use cdrgen_ir::{NodeRef, TypeCode};

/// A bitset packed into a single `long`.
///
/// Each member's value is its width in bits (default 1); fields are laid
/// out from bit 0 in declaration order.
pub struct BitsetJava<'a> {
    tc: &'a TypeCode,
    parent: Option<NodeRef<'a>>,
    extension: Option<&'a str>,
}

impl<'a> BitsetJava<'a> {
    pub fn from_bindings(bindings: &'a Bindings<'_>) -> Result<Self, RenderError> {
        bindings.require_context(templates::BITSET_TYPE, "ctx")?;
        Ok(Self {
            tc: bindings.require_type_code(templates::BITSET_TYPE, "bitset")?,
            parent: bindings.scope("parent"),
            extension: bindings.text("extension"),
        })
    }

    pub fn render(&self) -> String {
        let mut b = CodeBuilder::java();
        b.push_line(&format!(
            "{} class {} {{",
            super::class_modifiers(self.parent),
            self.tc.name
        ))
        .push_indent()
        .push_line("private long bits;");

        let mut offset = 0u32;
        for m in &self.tc.members {
            let width = m
                .value
                .as_deref()
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|w| (1..=64).contains(w))
                .unwrap_or(1);
            let mask = if width == 64 {
                u64::MAX
            } else {
                (1u64 << width) - 1
            };
            let pascal = to_pascal_case(&m.name);
            b.push_blank()
                .push_line(&format!("public long get{}() {{", pascal))
                .push_indent()
                .push_line(&format!("return (bits >>> {}) & 0x{:x}L;", offset, mask))
                .push_dedent()
                .push_line("}")
                .push_blank()
                .push_line(&format!("public void set{}(long value) {{", pascal))
                .push_indent()
                .push_line(&format!(
                    "bits = (bits & ~(0x{mask:x}L << {offset})) | ((value & 0x{mask:x}L) << {offset});"
                ))
                .push_dedent()
                .push_line("}");
            offset += width;
        }
        super::push_extension(&mut b, self.extension);
        b.push_dedent().push_line("}");
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use cdrgen_codegen::Value;
    use cdrgen_ir::{Kind, Member, RenderContext};

    use super::*;

    #[test]
    fn test_fields_are_packed_in_order() {
        let ctx = RenderContext::default();
        let tc = TypeCode::new(Kind::Bitset, "Header").with_members([
            Member::new("version", "bitfield<3>").with_value("3"),
            Member::new("urgent", "bitfield<1>"),
        ]);
        let bindings = Bindings::new()
            .with("bitset", Value::TypeCode(&tc))
            .with("ctx", Value::Context(&ctx));

        let text = BitsetJava::from_bindings(&bindings).unwrap().render();
        assert!(text.contains("return (bits >>> 0) & 0x7L;"));
        assert!(text.contains("return (bits >>> 3) & 0x1L;"));
        assert!(text.contains(
            "bits = (bits & ~(0x1L << 3)) | ((value & 0x1L) << 3);"
        ));
    }
}

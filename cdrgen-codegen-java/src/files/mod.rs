//! One renderer per built-in template.
//!
//! Each renderer reads its bindings with `from_bindings` and produces text
//! with [`CodeBuilder`]. Type bodies end with a newline so they can be
//! spliced into enclosing files with [`CodeBuilder::push_text`].

mod annotation_java;
mod bitmask_java;
mod bitset_java;
mod build_gradle;
mod enum_java;
mod interface_java;
mod main_java;
mod struct_java;
mod union_java;

pub use annotation_java::AnnotationJava;
pub use bitmask_java::BitmaskJava;
pub use bitset_java::BitsetJava;
pub use build_gradle::BuildGradle;
pub use enum_java::EnumJava;
pub use interface_java::InterfaceJava;
pub use main_java::MainJava;
pub use struct_java::StructJava;
pub use union_java::UnionJava;

use cdrgen_codegen::builder::CodeBuilder;
use cdrgen_core::to_pascal_case;
use cdrgen_ir::{Definition, NodeRef};

/// Class modifiers for a type declared at `parent`.
///
/// Types exported from an interface become static nested classes.
pub(crate) fn class_modifiers(parent: Option<NodeRef<'_>>) -> &'static str {
    match parent.map(|p| p.definition()) {
        Some(Definition::Interface(_)) => "public static",
        _ => "public",
    }
}

/// `::`-joined name of a declaration under `parent`.
pub(crate) fn scoped_name(parent: Option<NodeRef<'_>>, name: &str) -> String {
    match parent {
        Some(p) => format!("{}::{}", p.scoped_name(), name),
        None => name.to_string(),
    }
}

/// Bean-style getter and setter for one field.
pub(crate) fn push_accessors(b: &mut CodeBuilder, ty: &str, field: &str, set_first: Option<&str>) {
    let pascal = to_pascal_case(field);
    b.push_blank()
        .push_line(&format!("public {} get{}() {{", ty, pascal))
        .push_indent()
        .push_line(&format!("return {};", field))
        .push_dedent()
        .push_line("}")
        .push_blank()
        .push_line(&format!("public void set{}({} {}) {{", pascal, ty, field))
        .push_indent();
    if let Some(stmt) = set_first {
        b.push_line(stmt);
    }
    b.push_line(&format!("this.{} = {};", field, field))
        .push_dedent()
        .push_line("}");
}

/// `typeName()` accessor emitted when type objects are enabled.
pub(crate) fn push_type_name(b: &mut CodeBuilder, scoped: &str) {
    b.push_blank()
        .push_line("public static String typeName() {")
        .push_indent()
        .push_line(&format!("return \"{}\";", scoped))
        .push_dedent()
        .push_line("}");
}

/// Splice an extension fragment after a blank line. Blank fragments are
/// dropped.
pub(crate) fn push_extension(b: &mut CodeBuilder, extension: Option<&str>) {
    if let Some(text) = extension.filter(|t| !t.trim().is_empty()) {
        b.push_blank().push_text(text);
    }
}

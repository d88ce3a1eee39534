//! Parsing and validation of complete cdrgen.toml documents.

use std::path::Path;

use cdrgen_ir::{Encoding, ExtensionKey, Kind};
use cdrgen_manifest::{DefinitionKind, Error, Language, Manifest};

const GEO: &str = r#"
[generator]
library = "geolib"
package = "com.example"
output = "generated"

[context]
product = "fastcdr"
print_operation = true
encoding = "cdr"

[extensions]
struct_type = "struct_banner"

[templates]
struct_banner = "// {name}"

[[definitions]]
kind = "module"
name = "geo"

[[definitions.definitions]]
kind = "struct"
name = "Point"
members = [{ name = "x", type = "long" }, { name = "y", type = "long" }]

[[definitions.definitions]]
kind = "union"
name = "Shape"
attributes = { discriminator = "long" }
members = [{ name = "radius", type = "double", value = "1" }]

[[definitions]]
kind = "annotation"
name = "range"
members = [{ name = "min", type = "long", value = "0" }]
"#;

fn parse(src: &str) -> Result<Manifest, Box<Error>> {
    src.parse()
}

fn with_definitions(definitions: &str) -> String {
    format!("[generator]\nlibrary = \"lib\"\n\n{}", definitions)
}

#[test]
fn test_parse_complete_manifest() {
    let manifest = parse(GEO).unwrap();

    assert_eq!(manifest.generator.library, "geolib");
    assert_eq!(manifest.generator.package, "com.example");
    assert_eq!(manifest.generator.output, Path::new("generated"));
    assert_eq!(manifest.generator.language, Language::Java);
    assert!(!manifest.generator.overwrite);

    assert!(manifest.context.print_operation);
    assert!(!manifest.context.print_exception);
    assert_eq!(manifest.context.encoding, Encoding::Cdr);

    assert_eq!(
        manifest.extensions.get(ExtensionKey::StructType),
        Some("struct_banner")
    );
    assert_eq!(manifest.definition_count(), 4);
    assert_eq!(
        manifest.definitions[0].definitions[1].kind,
        DefinitionKind::Type(Kind::Union)
    );
}

#[test]
fn test_defaults() {
    let manifest = parse("[generator]\nlibrary = \"lib\"\n").unwrap();

    assert_eq!(manifest.generator.package, "");
    assert_eq!(manifest.generator.output, Path::new("."));
    assert_eq!(manifest.context.product, "fastcdr");
    assert!(manifest.extensions.is_empty());
    assert!(manifest.definitions.is_empty());
}

#[test]
fn test_missing_generator_is_parse_error() {
    let err = parse("[context]\nproduct = \"x\"\n").unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_unknown_extension_hook_is_parse_error() {
    let err = parse("[generator]\nlibrary = \"lib\"\n[extensions]\nclass_type = \"main\"\n")
        .unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_unknown_definition_kind_is_parse_error() {
    let err = parse(&with_definitions(
        "[[definitions]]\nkind = \"class\"\nname = \"A\"\n",
    ))
    .unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_extension_must_reference_known_template() {
    let err = parse("[generator]\nlibrary = \"lib\"\n[extensions]\nmain = \"banner\"\n")
        .unwrap_err();
    assert!(matches!(
        &*err,
        Error::UnknownTemplate { template, hook, .. } if template == "banner" && hook == "main"
    ));

    // Built-in ids are accepted without a [templates] entry.
    parse("[generator]\nlibrary = \"lib\"\n[extensions]\nmain = \"annotation\"\n").unwrap();
}

#[test]
fn test_user_template_cannot_shadow_builtin() {
    let err = parse("[generator]\nlibrary = \"lib\"\n[templates]\nmain = \"x\"\n").unwrap_err();
    assert!(err.to_string().contains("shadows a built-in template"));
}

#[test]
fn test_empty_library_is_rejected() {
    let err = parse("[generator]\nlibrary = \"  \"\n").unwrap_err();
    assert!(matches!(*err, Error::Validation { .. }));
}

#[test]
fn test_invalid_package_is_rejected() {
    let err = parse("[generator]\nlibrary = \"lib\"\npackage = \"com..example\"\n").unwrap_err();
    assert!(matches!(*err, Error::InvalidIdentifier { .. }));
}

#[test]
fn test_invalid_names_are_rejected() {
    let err = parse(&with_definitions(
        "[[definitions]]\nkind = \"module\"\nname = \"a/b\"\n",
    ))
    .unwrap_err();
    assert!(matches!(*err, Error::InvalidIdentifier { .. }));

    let err = parse(&with_definitions(
        "[[definitions]]\nkind = \"struct\"\nname = \"class\"\n",
    ))
    .unwrap_err();
    assert!(matches!(*err, Error::ReservedKeyword { .. }));
}

#[test]
fn test_operation_outside_interface_is_rejected() {
    let err = parse(&with_definitions(
        "[[definitions]]\nkind = \"operation\"\nname = \"add\"\n",
    ))
    .unwrap_err();
    assert!(err.to_string().contains("can only be declared in an interface"));
}

#[test]
fn test_module_inside_interface_is_rejected() {
    let err = parse(&with_definitions(
        r#"
[[definitions]]
kind = "interface"
name = "Calc"

[[definitions.exports]]
kind = "module"
name = "inner"
"#,
    ))
    .unwrap_err();
    assert!(err.to_string().contains("cannot be exported from an interface"));
}

#[test]
fn test_misplaced_field_is_rejected() {
    let err = parse(&with_definitions(
        "[[definitions]]\nkind = \"enum\"\nname = \"Color\"\nreturns = \"long\"\n",
    ))
    .unwrap_err();
    assert!(err.to_string().contains("field 'returns' does not apply"));
}

#[test]
fn test_duplicate_type_is_rejected_but_modules_reopen() {
    let err = parse(&with_definitions(
        "[[definitions]]\nkind = \"struct\"\nname = \"A\"\n\n[[definitions]]\nkind = \"enum\"\nname = \"A\"\n",
    ))
    .unwrap_err();
    assert!(err.to_string().contains("duplicate definition 'A'"));

    let manifest = parse(&with_definitions(
        "[[definitions]]\nkind = \"module\"\nname = \"m\"\n\n[[definitions]]\nkind = \"module\"\nname = \"m\"\n",
    ))
    .unwrap();
    assert_eq!(manifest.to_tree().unwrap().roots().len(), 2);
}

#[test]
fn test_validation_error_points_at_name() {
    let src = with_definitions("[[definitions]]\nkind = \"struct\"\nname = \"2d\"\n");
    let err = parse(&src).unwrap_err();
    let Error::InvalidIdentifier { span, .. } = *err else {
        panic!("expected invalid identifier");
    };
    let span = span.unwrap();
    assert_eq!(&src[span.offset()..span.offset() + span.len()], "2d");
}

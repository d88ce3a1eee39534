//! Snapshot tests for Java code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use cdrgen_codegen::Generator;
use cdrgen_codegen_java::JavaBackend;
use cdrgen_ir::{
    DeclTree, Definition, Exception, Export, ExtensionKey, ExtensionRegistry, Kind, Member,
    Operation, RenderContext, TypeCode,
};
use tempfile::TempDir;

/// ```idl
/// module geo {
///     struct Point { long x; long y; };
///     interface Calc {
///         struct Vector { double dx; };
///         exception DivByZero { string reason; };
///         long add(long a, long b);
///     };
///     enum Color { RED, GREEN };
///     bitmask Flags { flagRead, @position(3) flagWrite };
///     union Shape switch (long) { case 1: double radius; case 2: geo::Point corner; };
/// };
/// ```
fn geo_tree() -> DeclTree {
    let mut tree = DeclTree::new();
    let geo = tree.insert(None, Definition::module("geo")).unwrap();
    tree.insert(
        Some(geo),
        Definition::type_declaration(
            TypeCode::new(Kind::Struct, "Point")
                .with_member(Member::new("x", "long"))
                .with_member(Member::new("y", "long")),
        ),
    )
    .unwrap();

    let calc = tree.insert(Some(geo), Definition::interface("Calc")).unwrap();
    tree.insert(
        Some(calc),
        Definition::type_declaration(
            TypeCode::new(Kind::Struct, "Vector").with_member(Member::new("dx", "double")),
        ),
    )
    .unwrap();
    tree.push_export(
        calc,
        Export::Exception(Exception {
            name: "DivByZero".to_string(),
            members: vec![Member::new("reason", "string")],
        }),
    )
    .unwrap();
    tree.push_export(
        calc,
        Export::Operation(Operation {
            name: "add".to_string(),
            return_type: Some("long".to_string()),
            params: vec![Member::new("a", "long"), Member::new("b", "long")],
            oneway: false,
        }),
    )
    .unwrap();

    tree.insert(
        Some(geo),
        Definition::type_declaration(
            TypeCode::new(Kind::Enum, "Color")
                .with_members([Member::untyped("RED"), Member::untyped("GREEN")]),
        ),
    )
    .unwrap();
    tree.insert(
        Some(geo),
        Definition::type_declaration(TypeCode::new(Kind::Bitmask, "Flags").with_members([
            Member::untyped("flagRead"),
            Member::untyped("flagWrite").with_value("3"),
        ])),
    )
    .unwrap();
    tree.insert(
        Some(geo),
        Definition::type_declaration(
            TypeCode::new(Kind::Union, "Shape")
                .with_attribute("discriminator", "long")
                .with_member(Member::new("radius", "double").with_value("1"))
                .with_member(Member::new("corner", "geo::Point").with_value("2")),
        ),
    )
    .unwrap();
    tree
}

fn generate_files(ctx: &RenderContext, extensions: &ExtensionRegistry) -> Vec<(String, String)> {
    let backend = JavaBackend::new().with_template("vector_ext", "// extends {name}");
    let files = Generator::new(&backend, ctx, extensions)
        .preview(&geo_tree(), "", "geolib")
        .expect("generation failed");

    files
        .into_iter()
        .map(|f| (f.path.to_string_lossy().replace('\\', "/"), f.content))
        .collect()
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_files_in_declaration_order() {
    let files = generate_files(&RenderContext::default(), &ExtensionRegistry::new());
    let paths: Vec<_> = files.iter().map(|(p, _)| p.as_str()).collect();

    assert_eq!(
        paths,
        vec![
            "geo/Point.java",
            "geo/Calc.java",
            "geo/Color.java",
            "geo/Flags.java",
            "geo/Shape.java",
            "build.gradle",
        ]
    );
}

#[test]
fn test_struct_file() {
    let files = generate_files(&RenderContext::default(), &ExtensionRegistry::new());
    let point = get_file(&files, "geo/Point.java").expect("Point.java not found");

    insta::assert_snapshot!(point, @r"
    // Generated by cdrgen for fastcdr (fastcdr). Do not edit.

    package geo;

    public class Point {
        private int x;
        private int y;

        public Point() {
        }

        public int getX() {
            return x;
        }

        public void setX(int x) {
            this.x = x;
        }

        public int getY() {
            return y;
        }

        public void setY(int y) {
            this.y = y;
        }
    }
    ");
}

#[test]
fn test_interface_with_operations_and_exceptions() {
    let ctx = RenderContext {
        print_exception: true,
        print_operation: true,
        ..RenderContext::default()
    };
    let files = generate_files(&ctx, &ExtensionRegistry::new());
    let calc = get_file(&files, "geo/Calc.java").expect("Calc.java not found");

    insta::assert_snapshot!(calc, @r"
    // Generated by cdrgen for fastcdr (fastcdr). Do not edit.

    package geo;

    public interface Calc {
        public static class Vector {
            private double dx;

            public Vector() {
            }

            public double getDx() {
                return dx;
            }

            public void setDx(double dx) {
                this.dx = dx;
            }
        }

        public static class DivByZero extends Exception {
            private static final long serialVersionUID = 1L;
            public String reason;
        }

        int add(int a, int b);
    }
    ");
}

#[test]
fn test_interface_hides_operations_by_default() {
    let files = generate_files(&RenderContext::default(), &ExtensionRegistry::new());
    let calc = get_file(&files, "geo/Calc.java").expect("Calc.java not found");

    assert!(calc.contains("public static class Vector {"));
    assert!(!calc.contains("DivByZero"));
    assert!(!calc.contains("add("));
}

#[test]
fn test_user_extension_is_spliced_into_nested_type() {
    let extensions = ExtensionRegistry::new().with(ExtensionKey::StructType, "vector_ext");
    let files = generate_files(&RenderContext::default(), &extensions);

    let calc = get_file(&files, "geo/Calc.java").unwrap();
    assert!(calc.contains("        }\n\n        // extends Vector\n    }\n"));
    let point = get_file(&files, "geo/Point.java").unwrap();
    assert!(point.contains("\n\n    // extends Point\n}\n"));
}

#[test]
fn test_enum_bitmask_and_union() {
    let files = generate_files(&RenderContext::default(), &ExtensionRegistry::new());

    let color = get_file(&files, "geo/Color.java").unwrap();
    assert!(color.ends_with("public enum Color {\n    RED,\n    GREEN;\n}\n"));

    let flags = get_file(&files, "geo/Flags.java").unwrap();
    assert!(flags.contains("public static final long FLAG_READ = 1L << 0;\n"));
    assert!(flags.contains("public static final long FLAG_WRITE = 1L << 3;\n"));
    assert!(flags.contains("private Flags() {\n"));

    let shape = get_file(&files, "geo/Shape.java").unwrap();
    assert!(shape.contains("private int _d;\n"));
    assert!(shape.contains("private geo.Point corner;\n"));
    assert!(shape.contains("public void setCorner(geo.Point corner) {\n        _d = 2;\n"));
}

#[test]
fn test_type_object_adds_type_name() {
    let ctx = RenderContext {
        type_object: true,
        ..RenderContext::default()
    };
    let files = generate_files(&ctx, &ExtensionRegistry::new());
    let point = get_file(&files, "geo/Point.java").unwrap();

    assert!(point.contains("return \"geo::Point\";"));
}

#[test]
fn test_build_gradle() {
    let files = generate_files(&RenderContext::default(), &ExtensionRegistry::new());
    let gradle = get_file(&files, "build.gradle").expect("build.gradle not found");

    insta::assert_snapshot!(gradle, @r"
    plugins {
        id 'java-library'
    }

    base {
        archivesName = 'geolib'
    }

    sourceSets {
        main {
            java {
                srcDirs = ['.']
            }
        }
    }
    ");
}

#[test]
fn test_generate_to_disk_and_rerun_skips() {
    let temp = TempDir::new().unwrap();
    let ctx = RenderContext::default();
    let extensions = ExtensionRegistry::new();
    let backend = JavaBackend::new();
    let generator = Generator::new(&backend, &ctx, &extensions);

    let first = generator
        .generate(&geo_tree(), temp.path(), "com.example", "geolib")
        .unwrap();
    assert_eq!(first.written.len(), 6);
    let point = std::fs::read_to_string(temp.path().join("geo/Point.java")).unwrap();
    assert!(point.contains("package com.example.geo;"));

    let second = generator
        .generate(&geo_tree(), temp.path(), "com.example", "geolib")
        .unwrap();
    assert!(second.written.is_empty());
    assert_eq!(second.skipped.len(), 6);
}

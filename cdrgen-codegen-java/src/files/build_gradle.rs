use cdrgen_codegen::{Bindings, builder::CodeBuilder, templates};
use cdrgen_core::RenderError;

/// Gradle build script for the generated library.
pub struct BuildGradle<'a> {
    name: &'a str,
}

impl<'a> BuildGradle<'a> {
    pub fn from_bindings(bindings: &'a Bindings<'_>) -> Result<Self, RenderError> {
        Ok(Self {
            name: bindings.require_text(templates::BUILD_DESCRIPTOR, "name")?,
        })
    }

    pub fn render(&self) -> String {
        CodeBuilder::java()
            .block_with_close("plugins {", "}", |b| b.line("id 'java-library'"))
            .blank()
            .block_with_close("base {", "}", |b| {
                b.line(&format!("archivesName = '{}'", self.name))
            })
            .blank()
            .block_with_close("sourceSets {", "}", |b| {
                b.block_with_close("main {", "}", |b| {
                    b.block_with_close("java {", "}", |b| b.line("srcDirs = ['.']"))
                })
            })
            .build()
    }
}

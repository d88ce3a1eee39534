//! Semantic checks run after deserialization.

use std::collections::HashSet;

use cdrgen_codegen::templates;

use super::{DefinitionKind, DefinitionSpec, Manifest};
use crate::{
    Result,
    error::SourceContext,
    validate::{ParseContext, validate_package},
};

/// Where a list of definitions sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Top level or inside a module.
    Module,
    /// An interface's `exports`.
    Interface,
}

pub(super) fn validate_manifest(manifest: &Manifest, source: &SourceContext) -> Result<()> {
    let ctx = ParseContext::new(source);
    let generator = &manifest.generator;

    if generator.library.trim().is_empty() {
        return Err(ctx.error("generator.library cannot be empty", "library"));
    }
    if let Some(reason) = validate_package(&generator.package) {
        return Err(source.invalid_identifier_error(
            &generator.package,
            "package",
            reason,
            ctx.find_span(&generator.package),
        ));
    }

    for id in manifest.templates.keys() {
        if id.is_empty() {
            return Err(ctx.error("template ids cannot be empty", "[templates]"));
        }
        if templates::is_builtin(id) {
            return Err(ctx.error(
                format!("template '{}' shadows a built-in template", id),
                id,
            ));
        }
    }
    for (hook, template) in manifest.extensions.iter() {
        if !templates::is_builtin(template) && !manifest.templates.contains_key(template) {
            return Err(source.unknown_template_error(
                template,
                hook.as_str(),
                ctx.find_span(template),
            ));
        }
    }

    validate_definitions(&ctx, &manifest.definitions, Scope::Module)
}

fn validate_definitions<'a>(
    ctx: &ParseContext<'a>,
    specs: &'a [DefinitionSpec],
    scope: Scope,
) -> Result<()> {
    let mut seen = HashSet::new();

    for spec in specs {
        let kind = spec.kind;
        ctx.validate_name(&spec.name, kind.as_str())?;

        let allowed = match scope {
            Scope::Module => !kind.is_export_only(),
            Scope::Interface => matches!(
                kind,
                DefinitionKind::Type(_) | DefinitionKind::Operation | DefinitionKind::Exception
            ),
        };
        if !allowed {
            let message = match scope {
                Scope::Module => format!(
                    "{} '{}' can only be declared in an interface's exports",
                    kind, spec.name
                ),
                Scope::Interface => {
                    format!("{} '{}' cannot be exported from an interface", kind, spec.name)
                }
            };
            return Err(ctx.error(message, &spec.name));
        }

        // Modules may be reopened; anything else would emit the same file twice.
        if kind != DefinitionKind::Module && !seen.insert(spec.name.as_str()) {
            return Err(ctx.error(
                format!("duplicate definition '{}' in {}", spec.name, ctx.context_for("scope")),
                &spec.name,
            ));
        }

        check_fields(ctx, spec)?;

        match kind {
            DefinitionKind::Module => {
                validate_definitions(&ctx.push(&spec.name), &spec.definitions, Scope::Module)?
            }
            DefinitionKind::Interface => {
                validate_definitions(&ctx.push(&spec.name), &spec.exports, Scope::Interface)?
            }
            DefinitionKind::Type(_)
            | DefinitionKind::Annotation
            | DefinitionKind::Operation
            | DefinitionKind::Exception => {}
        }
    }
    Ok(())
}

/// Reject fields that do not apply to the definition's kind.
fn check_fields(ctx: &ParseContext<'_>, spec: &DefinitionSpec) -> Result<()> {
    let kind = spec.kind;
    let is_type = matches!(kind, DefinitionKind::Type(_));
    let is_operation = kind == DefinitionKind::Operation;

    let misplaced = [
        ("definitions", !spec.definitions.is_empty(), kind == DefinitionKind::Module),
        ("exports", !spec.exports.is_empty(), kind == DefinitionKind::Interface),
        (
            "members",
            !spec.members.is_empty(),
            is_type || matches!(kind, DefinitionKind::Exception | DefinitionKind::Annotation),
        ),
        ("attributes", !spec.attributes.is_empty(), is_type),
        ("returns", spec.returns.is_some(), is_operation),
        ("params", !spec.params.is_empty(), is_operation),
        ("oneway", spec.oneway, is_operation),
    ]
    .into_iter()
    .find(|(_, present, applies)| *present && !applies);

    match misplaced {
        Some((field, _, _)) => Err(ctx.error(
            format!("field '{}' does not apply to {} '{}'", field, kind, spec.name),
            &spec.name,
        )),
        None => Ok(()),
    }
}

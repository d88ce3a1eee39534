//! `[[definitions]]` tables.

use std::{fmt, str::FromStr};

use cdrgen_ir::{Kind, Member};
use indexmap::IndexMap;
use serde::Deserialize;

/// What a definition table declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum DefinitionKind {
    Module,
    Interface,
    Annotation,
    /// Interface operation (exports only).
    Operation,
    /// Interface exception (exports only).
    Exception,
    /// A type declaration of the given kind.
    Type(Kind),
}

impl DefinitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefinitionKind::Module => "module",
            DefinitionKind::Interface => "interface",
            DefinitionKind::Annotation => "annotation",
            DefinitionKind::Operation => "operation",
            DefinitionKind::Exception => "exception",
            DefinitionKind::Type(kind) => kind.as_str(),
        }
    }

    /// Whether the kind may only appear under an interface's `exports`.
    pub fn is_export_only(&self) -> bool {
        matches!(self, DefinitionKind::Operation | DefinitionKind::Exception)
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefinitionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "module" => Ok(DefinitionKind::Module),
            "interface" => Ok(DefinitionKind::Interface),
            "annotation" => Ok(DefinitionKind::Annotation),
            "operation" => Ok(DefinitionKind::Operation),
            "exception" => Ok(DefinitionKind::Exception),
            other => other.parse::<Kind>().map(DefinitionKind::Type).map_err(|_| {
                format!(
                    "unknown definition kind '{}', expected module, interface, annotation, \
                     operation, exception or a type kind",
                    other
                )
            }),
        }
    }
}

impl TryFrom<String> for DefinitionKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One `[[definitions]]` or `[[...exports]]` table.
///
/// Which optional fields are meaningful depends on `kind`; validation
/// rejects fields that do not apply.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefinitionSpec {
    pub kind: DefinitionKind,
    pub name: String,
    /// Children of a module.
    #[serde(default)]
    pub definitions: Vec<DefinitionSpec>,
    /// Exports of an interface.
    #[serde(default)]
    pub exports: Vec<DefinitionSpec>,
    /// Members of a type, exception or annotation.
    #[serde(default)]
    pub members: Vec<Member>,
    /// Resolved type attributes (e.g. `discriminator`).
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
    /// Operation return type; absent for `void`.
    #[serde(default)]
    pub returns: Option<String>,
    /// Operation parameters.
    #[serde(default)]
    pub params: Vec<Member>,
    #[serde(default)]
    pub oneway: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            "module".parse::<DefinitionKind>(),
            Ok(DefinitionKind::Module)
        );
        assert_eq!(
            "bitmask".parse::<DefinitionKind>(),
            Ok(DefinitionKind::Type(Kind::Bitmask))
        );
        assert!("class".parse::<DefinitionKind>().is_err());
    }

    #[test]
    fn test_deserialize_spec() {
        let spec: DefinitionSpec = serde_json::from_str(
            r#"{"kind": "struct", "name": "Point", "members": [{"name": "x", "type": "long"}]}"#,
        )
        .unwrap();
        assert_eq!(spec.kind, DefinitionKind::Type(Kind::Struct));
        assert_eq!(spec.members[0].type_name, "long");
        assert!(spec.definitions.is_empty());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = serde_json::from_str::<DefinitionSpec>(
            r#"{"kind": "struct", "name": "Point", "fields": []}"#,
        );
        assert!(result.is_err());
    }
}

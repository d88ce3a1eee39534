//! Type codes carried by type declarations.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Structural category of a type declaration.
///
/// Only the first five kinds are emitted as source files; the rest exist in
/// resolved models but have no template yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Struct,
    Union,
    Enum,
    Bitset,
    Bitmask,
    Alias,
    Sequence,
    Array,
    Map,
    String,
    Primitive,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 11] = [
        Kind::Struct,
        Kind::Union,
        Kind::Enum,
        Kind::Bitset,
        Kind::Bitmask,
        Kind::Alias,
        Kind::Sequence,
        Kind::Array,
        Kind::Map,
        Kind::String,
        Kind::Primitive,
    ];

    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Struct => "struct",
            Kind::Union => "union",
            Kind::Enum => "enum",
            Kind::Bitset => "bitset",
            Kind::Bitmask => "bitmask",
            Kind::Alias => "alias",
            Kind::Sequence => "sequence",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::String => "string",
            Kind::Primitive => "primitive",
        }
    }

    /// Returns true for kinds that are emitted as their own source file.
    pub fn is_constructed(&self) -> bool {
        matches!(
            self,
            Kind::Struct | Kind::Union | Kind::Enum | Kind::Bitset | Kind::Bitmask
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown type kind '{}'", s))
    }
}

/// A named member of a type code, operation or annotation.
///
/// `value` is interpreted per kind: the case label of a union member, the
/// bit position of a bitmask flag, the bit width of a bitset field or the
/// default value of an annotation member.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Member {
    /// Member name.
    pub name: String,
    /// IDL type name (empty for enumerators and bitmask flags).
    #[serde(default, rename = "type")]
    pub type_name: String,
    /// Kind-specific value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Member {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            value: None,
        }
    }

    /// Create a member without a type (enumerators, bitmask flags).
    pub fn untyped(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Resolved type information for a declaration.
///
/// The attribute bag is opaque to the generator and only read by templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCode {
    /// Declared type name.
    pub name: String,
    /// Structural category.
    pub kind: Kind,
    /// Ordered members.
    pub members: Vec<Member>,
    /// Additional resolved attributes (e.g. `discriminator`, `bit_bound`).
    pub attributes: IndexMap<String, String>,
}

impl TypeCode {
    pub fn new(kind: Kind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            members: Vec::new(),
            attributes: IndexMap::new(),
        }
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.extend(members);
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

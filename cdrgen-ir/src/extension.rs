//! Caller-registered extension templates.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The fixed set of hook points an extension template can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionKey {
    Interface,
    Annotation,
    StructType,
    UnionType,
    EnumType,
    BitsetType,
    BitmaskType,
    Main,
}

impl ExtensionKey {
    /// All keys, in registry order.
    pub const ALL: [ExtensionKey; 8] = [
        ExtensionKey::Interface,
        ExtensionKey::Annotation,
        ExtensionKey::StructType,
        ExtensionKey::UnionType,
        ExtensionKey::EnumType,
        ExtensionKey::BitsetType,
        ExtensionKey::BitmaskType,
        ExtensionKey::Main,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtensionKey::Interface => "interface",
            ExtensionKey::Annotation => "annotation",
            ExtensionKey::StructType => "struct_type",
            ExtensionKey::UnionType => "union_type",
            ExtensionKey::EnumType => "enum_type",
            ExtensionKey::BitsetType => "bitset_type",
            ExtensionKey::BitmaskType => "bitmask_type",
            ExtensionKey::Main => "main",
        }
    }
}

impl fmt::Display for ExtensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtensionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExtensionKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown extension key '{}'", s))
    }
}

/// Mapping from hook point to extension template id.
///
/// A missing key means no extension is rendered for that hook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ExtensionRegistry {
    entries: IndexMap<ExtensionKey, String>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the template for a hook point.
    pub fn register(&mut self, key: ExtensionKey, template: impl Into<String>) {
        self.entries.insert(key, template.into());
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, key: ExtensionKey, template: impl Into<String>) -> Self {
        self.register(key, template);
        self
    }

    /// Template id registered for a hook point.
    pub fn get(&self, key: ExtensionKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ExtensionKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use std::fmt;

/// Dotted namespace path accumulated while descending into modules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namespace(String);

impl Namespace {
    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into())
    }

    /// Namespace of a child module. An empty namespace has no leading dot.
    pub fn child(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }

    /// Value for the `package` binding; `None` when the namespace is empty.
    pub fn as_package(&self) -> Option<&str> {
        if self.0.is_empty() { None } else { Some(&self.0) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Read-only render policy handed to every template as `ctx`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Serialization engine the generated types target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Classic CDR.
    Cdr,
    /// Fast CDR (the default).
    #[default]
    Fastcdr,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Cdr => "cdr",
            Encoding::Fastcdr => "fastcdr",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Naming and feature policy for one generation run.
///
/// Supplied once and never mutated while the tree is walked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderContext {
    /// Product tag stamped into generated headers.
    pub product: String,
    /// Namespace of the whole model, if any.
    pub namespace: Option<String>,
    /// Namespace guard name.
    pub guard: Option<String>,
    /// Emit exception types declared in interfaces.
    pub print_exception: bool,
    /// Emit interface operations.
    pub print_operation: bool,
    /// Emit type object support.
    pub type_object: bool,
    /// Target serialization engine.
    pub encoding: Encoding,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            product: "fastcdr".to_string(),
            namespace: None,
            guard: None,
            print_exception: false,
            print_operation: false,
            type_object: false,
            encoding: Encoding::default(),
        }
    }
}

impl RenderContext {
    pub fn is_cdr(&self) -> bool {
        self.encoding == Encoding::Cdr
    }

    pub fn is_fastcdr(&self) -> bool {
        self.encoding == Encoding::Fastcdr
    }

    /// Guard name, falling back to the upper-cased product tag.
    pub fn guard_name(&self) -> String {
        self.guard
            .clone()
            .unwrap_or_else(|| self.product.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ctx = RenderContext::default();
        assert!(ctx.is_fastcdr());
        assert!(!ctx.is_cdr());
        assert!(!ctx.print_exception);
        assert_eq!(ctx.guard_name(), "FASTCDR");
    }

    #[test]
    fn test_deserialize_partial() {
        let ctx: RenderContext = toml::from_str(
            r#"
            product = "shapes"
            encoding = "cdr"
            print_operation = true
            "#,
        )
        .unwrap();

        assert_eq!(ctx.product, "shapes");
        assert!(ctx.is_cdr());
        assert!(ctx.print_operation);
        assert!(!ctx.type_object);
    }
}

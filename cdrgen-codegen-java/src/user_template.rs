//! Literal templates supplied by the user.

use cdrgen_codegen::{Bindings, Value};

/// Literal text with `{name}`, `{scope}`, `{package}` and `{product}`
/// placeholders.
///
/// `{name}` is the name of the first bound declaration (or the `name` text
/// binding), `{scope}` the scoped name of `parent`, `{package}` the
/// `package` binding and `{product}` the context's product tag. Absent
/// values expand to the empty string; other braces are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTemplate {
    text: String,
}

impl UserTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn render(&self, bindings: &Bindings<'_>) -> String {
        let name = declared_name(bindings).unwrap_or_default();
        let scope = bindings
            .scope("parent")
            .map(|p| p.scoped_name())
            .unwrap_or_default();
        let package = bindings.text("package").unwrap_or_default();
        let product = match bindings.get("ctx") {
            Some(Value::Context(ctx)) => ctx.product.as_str(),
            _ => "",
        };

        self.text
            .replace("{name}", &name)
            .replace("{scope}", &scope)
            .replace("{package}", package)
            .replace("{product}", product)
    }
}

fn declared_name(bindings: &Bindings<'_>) -> Option<String> {
    bindings
        .names()
        .find_map(|key| match bindings.get(key)? {
            Value::TypeCode(tc) => Some(tc.name.clone()),
            Value::Interface(ifc) => Some(ifc.name.clone()),
            Value::Annotation(a) => Some(a.name.clone()),
            _ => None,
        })
        .or_else(|| bindings.text("name").map(str::to_string))
}

//! Named template bindings.

use cdrgen_core::RenderError;
use cdrgen_ir::{AnnotationDeclaration, Interface, NodeRef, RenderContext, TypeCode};
use indexmap::IndexMap;

/// A value bound to a template attribute.
///
/// Model values are borrowed from the declaration tree for the duration of
/// a render call; rendered fragments are owned text.
#[derive(Debug, Clone)]
pub enum Value<'a> {
    /// The run's render policy (`ctx`).
    Context(&'a RenderContext),
    /// A node of the tree, used for `parent`.
    Scope(NodeRef<'a>),
    Interface(&'a Interface),
    Annotation(&'a AnnotationDeclaration),
    /// A type code (`struct`, `union`, `enum`, `bitset`, `bitmask`).
    TypeCode(&'a TypeCode),
    /// Rendered or literal text.
    Text(String),
    /// Ordered rendered fragments (`exports`).
    List(Vec<String>),
}

impl Value<'_> {
    /// Type label used in binding errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Context(_) => "context",
            Value::Scope(_) => "scope",
            Value::Interface(_) => "interface",
            Value::Annotation(_) => "annotation",
            Value::TypeCode(_) => "type code",
            Value::Text(_) => "text",
            Value::List(_) => "list",
        }
    }
}

/// Ordered set of named values handed to one template.
///
/// An attribute that was never set is absent, which templates treat
/// differently from an empty string (e.g. no `package` statement at all).
#[derive(Debug, Clone, Default)]
pub struct Bindings<'a> {
    values: IndexMap<&'static str, Value<'a>>,
}

impl<'a> Bindings<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value.
    pub fn set(&mut self, name: &'static str, value: Value<'a>) -> &mut Self {
        self.values.insert(name, value);
        self
    }

    /// Set an attribute only when a value is present.
    pub fn set_opt(&mut self, name: &'static str, value: Option<Value<'a>>) -> &mut Self {
        if let Some(value) = value {
            self.values.insert(name, value);
        }
        self
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: &'static str, value: Value<'a>) -> Self {
        self.set(name, value);
        self
    }

    /// Append a fragment to a list attribute.
    ///
    /// Later fragments are added after earlier ones; a single text value
    /// already bound under `name` becomes the first list element.
    pub fn append(&mut self, name: &'static str, fragment: String) -> &mut Self {
        let slot = self
            .values
            .entry(name)
            .or_insert_with(|| Value::List(Vec::new()));
        *slot = match std::mem::replace(slot, Value::List(Vec::new())) {
            Value::List(mut items) => {
                items.push(fragment);
                Value::List(items)
            }
            Value::Text(first) => Value::List(vec![first, fragment]),
            _ => Value::List(vec![fragment]),
        };
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value<'a>> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Attribute names in the order they were first set.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Text attribute, if bound as text.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::Text(t)) => Some(t.as_str()),
            _ => None,
        }
    }

    /// List attribute; a single text value reads as a one-element list.
    pub fn list(&self, name: &str) -> Option<&[String]> {
        match self.get(name) {
            Some(Value::List(items)) => Some(items),
            Some(Value::Text(t)) => Some(std::slice::from_ref(t)),
            _ => None,
        }
    }

    pub fn scope(&self, name: &str) -> Option<NodeRef<'a>> {
        match self.get(name) {
            Some(Value::Scope(node)) => Some(*node),
            _ => None,
        }
    }

    /// Required render context.
    pub fn require_context(
        &self,
        template: &str,
        name: &str,
    ) -> Result<&'a RenderContext, RenderError> {
        match self.require(template, name)? {
            Value::Context(ctx) => Ok(*ctx),
            _ => Err(type_error(template, name, "context")),
        }
    }

    /// Required type code.
    pub fn require_type_code(
        &self,
        template: &str,
        name: &str,
    ) -> Result<&'a TypeCode, RenderError> {
        match self.require(template, name)? {
            Value::TypeCode(tc) => Ok(*tc),
            _ => Err(type_error(template, name, "type code")),
        }
    }

    /// Required interface.
    pub fn require_interface(
        &self,
        template: &str,
        name: &str,
    ) -> Result<&'a Interface, RenderError> {
        match self.require(template, name)? {
            Value::Interface(ifc) => Ok(*ifc),
            _ => Err(type_error(template, name, "interface")),
        }
    }

    /// Required annotation.
    pub fn require_annotation(
        &self,
        template: &str,
        name: &str,
    ) -> Result<&'a AnnotationDeclaration, RenderError> {
        match self.require(template, name)? {
            Value::Annotation(a) => Ok(*a),
            _ => Err(type_error(template, name, "annotation")),
        }
    }

    /// Required text.
    pub fn require_text(&self, template: &str, name: &str) -> Result<&str, RenderError> {
        match self.require(template, name)? {
            Value::Text(t) => Ok(t.as_str()),
            _ => Err(type_error(template, name, "text")),
        }
    }

    fn require(&self, template: &str, name: &str) -> Result<&Value<'a>, RenderError> {
        self.get(name).ok_or_else(|| RenderError::MissingBinding {
            template: template.to_string(),
            binding: name.to_string(),
        })
    }
}

fn type_error(template: &str, name: &str, expected: &'static str) -> RenderError {
    RenderError::BindingType {
        template: template.to_string(),
        binding: name.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use cdrgen_ir::Kind;

    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut bindings = Bindings::new();
        bindings
            .append("exports", "A".to_string())
            .append("exports", "B".to_string())
            .append("exports", "C".to_string());

        assert_eq!(
            bindings.list("exports"),
            Some(&["A".to_string(), "B".to_string(), "C".to_string()][..])
        );
    }

    #[test]
    fn test_append_to_text_promotes_to_list() {
        let mut bindings = Bindings::new().with("exports", Value::Text("first".to_string()));
        bindings.append("exports", "second".to_string());

        assert_eq!(bindings.list("exports").map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_set_opt_none_leaves_attribute_absent() {
        let mut bindings = Bindings::new();
        bindings.set_opt("package", None);

        assert!(!bindings.contains("package"));
        assert!(bindings.text("package").is_none());
        assert!(bindings.is_empty());
    }

    #[test]
    fn test_require_reports_missing_and_mistyped() {
        let tc = TypeCode::new(Kind::Struct, "Point");
        let bindings = Bindings::new().with("struct", Value::TypeCode(&tc));

        assert_eq!(
            bindings.require_context("struct_type", "ctx").unwrap_err(),
            RenderError::MissingBinding {
                template: "struct_type".to_string(),
                binding: "ctx".to_string()
            }
        );
        assert_eq!(
            bindings.require_text("struct_type", "struct").unwrap_err(),
            RenderError::BindingType {
                template: "struct_type".to_string(),
                binding: "struct".to_string(),
                expected: "text"
            }
        );
        assert_eq!(
            bindings.require_type_code("struct_type", "struct").unwrap().name,
            "Point"
        );
    }

    #[test]
    fn test_names_keep_insertion_order() {
        let ctx = RenderContext::default();
        let bindings = Bindings::new()
            .with("struct", Value::Text(String::new()))
            .with("extension", Value::Text(String::new()))
            .with("ctx", Value::Context(&ctx));

        let names: Vec<_> = bindings.names().collect();
        assert_eq!(names, vec!["struct", "extension", "ctx"]);
    }
}

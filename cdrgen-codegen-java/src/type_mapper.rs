//! IDL to Java type mapping.

/// Maps IDL type spellings to Java types.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTypeMapper;

impl JavaTypeMapper {
    /// Java type for an IDL type name.
    ///
    /// Unsigned integers map to the signed Java type of the same width.
    /// Scoped names (`a::b::C`) become qualified names (`a.b.C`); anything
    /// else is passed through.
    pub fn map(&self, idl: &str) -> String {
        let idl = idl.trim();
        if let Some(inner) = generic_argument(idl, "sequence") {
            return format!("java.util.List<{}>", self.boxed(&self.map(inner)));
        }
        if idl.starts_with("string") || idl.starts_with("wstring") {
            return "String".to_string();
        }
        let primitive = match idl {
            "boolean" => "boolean",
            "char" | "wchar" => "char",
            "octet" | "int8" | "uint8" => "byte",
            "short" | "unsigned short" | "int16" | "uint16" => "short",
            "long" | "unsigned long" | "int32" | "uint32" => "int",
            "long long" | "unsigned long long" | "int64" | "uint64" => "long",
            "float" => "float",
            "double" | "long double" => "double",
            other => return other.replace("::", "."),
        };
        primitive.to_string()
    }

    /// Boxed form of a Java type, for use as a generic argument.
    pub fn boxed(&self, java: &str) -> String {
        let boxed = match java {
            "boolean" => "Boolean",
            "char" => "Character",
            "byte" => "Byte",
            "short" => "Short",
            "int" => "Integer",
            "long" => "Long",
            "float" => "Float",
            "double" => "Double",
            other => other,
        };
        boxed.to_string()
    }
}

/// First argument of `name<...>`, ignoring a trailing bound.
fn generic_argument<'a>(idl: &'a str, name: &str) -> Option<&'a str> {
    let inner = idl.strip_prefix(name)?.trim_start().strip_prefix('<')?;
    let inner = inner.strip_suffix('>')?;
    let mut depth = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return Some(inner[..i].trim()),
            _ => {}
        }
    }
    Some(inner.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_primitives() {
        let mapper = JavaTypeMapper;
        assert_eq!(mapper.map("long"), "int");
        assert_eq!(mapper.map("unsigned long long"), "long");
        assert_eq!(mapper.map("octet"), "byte");
        assert_eq!(mapper.map("boolean"), "boolean");
        assert_eq!(mapper.map("double"), "double");
        assert_eq!(mapper.map("string<32>"), "String");
    }

    #[test]
    fn test_map_sequences_box_their_element() {
        let mapper = JavaTypeMapper;
        assert_eq!(mapper.map("sequence<long>"), "java.util.List<Integer>");
        assert_eq!(mapper.map("sequence<double, 8>"), "java.util.List<Double>");
        assert_eq!(
            mapper.map("sequence<sequence<octet>>"),
            "java.util.List<java.util.List<Byte>>"
        );
    }

    #[test]
    fn test_map_scoped_names() {
        let mapper = JavaTypeMapper;
        assert_eq!(mapper.map("geo::Point"), "geo.Point");
        assert_eq!(mapper.map("Point"), "Point");
    }
}

//! Indentation of generated sources.

/// One indentation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// A run of spaces of the given width.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// Java and Gradle sources use four spaces.
    pub const JAVA: Self = Self::Spaces(4);

    /// Append `level` steps to `buf`.
    pub fn write(self, buf: &mut String, level: usize) {
        match self {
            Indent::Spaces(width) => {
                buf.extend(std::iter::repeat_n(' ', level * usize::from(width)));
            }
            Indent::Tab => buf.extend(std::iter::repeat_n('\t', level)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indented(indent: Indent, level: usize) -> String {
        let mut buf = String::new();
        indent.write(&mut buf, level);
        buf
    }

    #[test]
    fn test_spaces_scale_with_level() {
        assert_eq!(indented(Indent::Spaces(2), 2), "    ");
        assert_eq!(indented(Indent::Spaces(3), 1), "   ");
        assert_eq!(indented(Indent::JAVA, 0), "");
    }

    #[test]
    fn test_tabs() {
        assert_eq!(indented(Indent::Tab, 3), "\t\t\t");
    }
}

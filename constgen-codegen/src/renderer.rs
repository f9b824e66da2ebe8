//! Language-agnostic rendering contract.

use constgen_core::KeyTable;

use crate::language::Language;

/// Everything a renderer needs to produce one output file.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    /// Ordered (path, identifier) pairs.
    pub table: &'a KeyTable,
    /// Target package or module name. Renderers apply their own default.
    pub package: Option<&'a str>,
    /// Prefix prepended to every constant name.
    pub prefix: &'a str,
    /// Header comment placed at the top of the file.
    pub header: &'a str,
}

/// Trait for language-specific constant renderers.
pub trait ConstRenderer {
    /// Target language of this renderer.
    fn language(&self) -> Language;

    /// File extension for generated source files (e.g., "go", "rs").
    fn file_extension(&self) -> &'static str {
        self.language().file_extension()
    }

    /// Render the key table to source text.
    fn render(&self, request: &RenderRequest<'_>) -> String;
}

/// Escape a path for embedding in a double-quoted string literal.
pub(crate) fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("plain.path"), "plain.path");
        assert_eq!(escape_string(r#"quo"te"#), r#"quo\"te"#);
        assert_eq!(escape_string(r"back\slash"), r"back\\slash");
    }
}

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::format::DocumentFormat;

/// Result type for document operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(constgen::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {format} document: {message}")]
    #[diagnostic(code(constgen::parse_error))]
    Parse {
        format: DocumentFormat,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("document root must be a mapping, found a {kind}")]
    #[diagnostic(
        code(constgen::root_not_mapping),
        help("wrap the value in a top-level key, e.g. 'values: [...]'")
    )]
    RootNotMapping {
        #[source_code]
        src: NamedSource<String>,
        kind: &'static str,
    },

    #[error("cannot infer the document format of '{path}'")]
    #[diagnostic(
        code(constgen::unknown_format),
        help("use a .yaml, .yml, .json, or .toml extension, or pass an explicit format")
    )]
    UnknownFormat { path: PathBuf },
}

impl Error {
    /// Create a parse error with source context and an optional byte span.
    pub fn parse(
        format: DocumentFormat,
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Parse {
            format,
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }

    /// Create a root-not-mapping error with source context.
    pub fn root_not_mapping(kind: &'static str, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::RootNotMapping {
            src: NamedSource::new(filename, src.to_string()),
            kind,
        })
    }
}

/// A one-byte span at `offset`, clamped to the source length.
pub(crate) fn span_at(src: &str, offset: usize) -> SourceSpan {
    let start = offset.min(src.len());
    let len = if start < src.len() { 1 } else { 0 };
    SourceSpan::from((start, len))
}

/// Byte offset of a 1-based line/column position.
pub(crate) fn offset_of(src: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (i, l) in src.lines().enumerate() {
        if i + 1 == line {
            return offset + column.saturating_sub(1).min(l.len());
        }
        // +1 for the newline consumed by lines()
        offset += l.len() + 1;
    }
    src.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "ab\ncd\nef";
        assert_eq!(offset_of(src, 1, 1), 0);
        assert_eq!(offset_of(src, 2, 1), 3);
        assert_eq!(offset_of(src, 2, 2), 4);
        assert_eq!(offset_of(src, 3, 2), 7);
        // Past the end falls back to the source length
        assert_eq!(offset_of(src, 9, 1), src.len());
    }

    #[test]
    fn test_span_at_clamped() {
        let span = span_at("abc", 10);
        assert_eq!(span.offset(), 3);
        assert_eq!(span.len(), 0);

        let span = span_at("abc", 1);
        assert_eq!(span.offset(), 1);
        assert_eq!(span.len(), 1);
    }
}

//! Reading and parsing source documents.

use std::path::{Path, PathBuf};

use constgen_core::{Document, Scalar, Value};
use miette::SourceSpan;

use crate::error::{Error, Result, offset_of, span_at};
use crate::format::DocumentFormat;

/// Parse a document from a string.
///
/// The root must be a mapping; a null root (e.g. an empty YAML file) is
/// accepted and treated as an empty document.
pub fn parse_str(content: &str, format: DocumentFormat, filename: &str) -> Result<Document> {
    let value = match format {
        DocumentFormat::Yaml => serde_yaml::from_str::<Value>(content).map_err(|e| {
            let span = e.location().map(|loc| span_at(content, loc.index()));
            Error::parse(format, e.to_string(), content, filename, span)
        })?,
        DocumentFormat::Json => serde_json::from_str::<Value>(content).map_err(|e| {
            let span = span_at(content, offset_of(content, e.line(), e.column()));
            Error::parse(format, e.to_string(), content, filename, Some(span))
        })?,
        DocumentFormat::Toml => toml::from_str::<Value>(content).map_err(|e| {
            let span = e.span().map(SourceSpan::from);
            Error::parse(format, e.message().to_string(), content, filename, span)
        })?,
    };

    match value {
        // An empty (or explicit null) document flattens to nothing
        Value::Scalar(Scalar::Null) => Ok(Document::default()),
        other => other
            .into_mapping()
            .map(Document::new)
            .map_err(|v| Error::root_not_mapping(v.kind(), content, filename)),
    }
}

/// A source document file: raw content plus the parsed document.
#[derive(Debug)]
pub struct SourceDocument {
    path: PathBuf,
    content: String,
    format: DocumentFormat,
    document: Document,
}

impl SourceDocument {
    /// Open and parse a document file.
    ///
    /// When no explicit format is given it is inferred from the file
    /// extension.
    pub fn open(path: impl AsRef<Path>, format: Option<DocumentFormat>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let format = match format {
            Some(format) => format,
            None => DocumentFormat::from_path(&path)
                .ok_or_else(|| Box::new(Error::UnknownFormat { path: path.clone() }))?,
        };
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let document = parse_str(&content, format, &filename)?;

        Ok(Self {
            path,
            content,
            format,
            document,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

//! Target languages for generated constants.

use std::{fmt, str::FromStr};

use crate::go::GoRenderer;
use crate::renderer::ConstRenderer;
use crate::rust::RustRenderer;

/// Supported target languages for code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Go
    #[default]
    Go,
    /// Rust
    Rust,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Rust => "rust",
        }
    }

    /// File extension for generated source files.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Rust => "rs",
        }
    }

    /// The renderer for this language.
    pub fn renderer(&self) -> Box<dyn ConstRenderer> {
        match self {
            Language::Go => Box::new(GoRenderer),
            Language::Rust => Box::new(RustRenderer),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "go" | "golang" => Ok(Language::Go),
            "rust" | "rs" => Ok(Language::Rust),
            _ => Err(format!("unknown language '{}', expected 'go' or 'rust'", s)),
        }
    }
}

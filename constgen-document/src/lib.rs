// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Document loading for the constgen constant generator.
//!
//! Reads YAML, JSON, or TOML configuration files into the shared
//! [`constgen_core::Document`] model and reports parse failures as rich
//! miette diagnostics.

mod error;
mod format;
mod source;

pub use error::{Error, Result};
pub use format::DocumentFormat;
pub use source::{SourceDocument, parse_str};

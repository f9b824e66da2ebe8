//! Constant rendering for the constgen constant generator.
//!
//! Takes the ordered key table produced by `constgen-core` and renders it as
//! a source file of named string constants, in Go or Rust, followed by a
//! canonical formatting pass.

mod builder;
mod fmt;
mod go;
mod indent;
mod language;
mod renderer;
mod rust;

pub use builder::CodeBuilder;
pub use fmt::{FormatError, canonicalize};
pub use go::GoRenderer;
pub use indent::Indent;
pub use language::Language;
pub use renderer::{ConstRenderer, RenderRequest};
pub use rust::RustRenderer;

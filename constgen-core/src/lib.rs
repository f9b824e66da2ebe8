//! Core types and algorithms for the constgen constant generator.
//!
//! This crate provides the document value model, the flattener that turns
//! nested documents into dotted key paths, the identifier caser, and the
//! ordered key table consumed by the renderers.

mod casing;
mod flatten;
mod table;
mod value;

// Casing
pub use casing::{COMMON_INITIALISMS, to_identifier};
// Flattening
pub use flatten::flatten;
// Key table
pub use table::{ConstEntry, KeyTable};
// Value model
pub use value::{Document, Scalar, Value};

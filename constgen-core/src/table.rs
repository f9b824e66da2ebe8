//! The ordered key table fed to renderers.

use indexmap::IndexMap;

use crate::casing::to_identifier;
use crate::value::Scalar;

/// One generated constant: the flattened path and its derived identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstEntry {
    pub path: String,
    pub ident: String,
}

/// The ordered sequence of (path, identifier) pairs.
///
/// Paths are sorted byte-lexicographically ascending so that generated output
/// is byte-for-byte reproducible across runs on the same input.
#[derive(Debug, Clone, Default)]
pub struct KeyTable {
    entries: Vec<ConstEntry>,
}

impl KeyTable {
    /// Build the table from a flattened document.
    pub fn from_flat(flat: &IndexMap<String, Scalar>) -> Self {
        let mut paths: Vec<&String> = flat.keys().collect();
        // Paths are unique within one flattening, so unstable sort is safe.
        paths.sort_unstable();

        let entries = paths
            .into_iter()
            .map(|path| ConstEntry {
                path: path.clone(),
                ident: to_identifier(path),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ConstEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConstEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

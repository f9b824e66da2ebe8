//! Nested document flattening.

use indexmap::IndexMap;

use crate::value::{Document, Scalar, Value};

/// Flatten a document into a single-level mapping of dotted paths to scalars.
///
/// Mapping keys and sequence indices are joined to their parent path with a
/// literal `.`. Scalars terminate recursion and produce one entry each; empty
/// mappings and sequences contribute nothing.
///
/// Known limitation: the separator is not escaped, so a key literally named
/// `"a.b"` produces the same path as nested keys `a` -> `b`. The later entry
/// in document order wins.
pub fn flatten(doc: &Document) -> IndexMap<String, Scalar> {
    let mut flat = IndexMap::new();
    for (key, value) in doc.root() {
        walk(key.clone(), value, &mut flat);
    }
    flat
}

fn walk(path: String, value: &Value, flat: &mut IndexMap<String, Scalar>) {
    match value {
        Value::Scalar(scalar) => {
            flat.insert(path, scalar.clone());
        }
        Value::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                walk(format!("{}.{}", path, index), item, flat);
            }
        }
        Value::Mapping(entries) => {
            for (key, item) in entries {
                walk(format!("{}.{}", path, key), item, flat);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> Document {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        Document::new(value.into_mapping().unwrap())
    }

    #[test]
    fn test_flatten_nested_mappings() {
        let flat = flatten(&doc("server:\n  host: localhost\n  port: 8080\n"));
        assert_eq!(flat.len(), 2);
        assert_eq!(flat["server.host"], Scalar::Str("localhost".to_string()));
        assert_eq!(flat["server.port"], Scalar::Int(8080));
    }

    #[test]
    fn test_flatten_sequences() {
        let flat = flatten(&doc("hosts:\n  - a\n  - b\nmatrix:\n  - [1, 2]\n"));
        assert_eq!(flat["hosts.0"], Scalar::Str("a".to_string()));
        assert_eq!(flat["hosts.1"], Scalar::Str("b".to_string()));
        assert_eq!(flat["matrix.0.0"], Scalar::Int(1));
        assert_eq!(flat["matrix.0.1"], Scalar::Int(2));
    }

    #[test]
    fn test_flatten_empty_document() {
        let flat = flatten(&Document::default());
        assert!(flat.is_empty());
    }

    #[test]
    fn test_empty_containers_contribute_nothing() {
        let flat = flatten(&doc("empty_map: {}\nempty_seq: []\nreal: 1\n"));
        assert_eq!(flat.len(), 1);
        assert!(flat.contains_key("real"));
    }

    #[test]
    fn test_top_level_scalar() {
        let flat = flatten(&doc("debug: true\n"));
        assert_eq!(flat["debug"], Scalar::Bool(true));
    }

    #[test]
    fn test_paths_unique() {
        let flat = flatten(&doc("a:\n  b: 1\n  c: 2\nd:\n  - x\n  - y\n"));
        let mut paths: Vec<&String> = flat.keys().collect();
        let total = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }

    #[test]
    fn test_separator_collision_last_write_wins() {
        let flat = flatten(&doc("a.b: first\na:\n  b: second\n"));
        assert_eq!(flat.len(), 1);
        assert_eq!(flat["a.b"], Scalar::Str("second".to_string()));
    }
}

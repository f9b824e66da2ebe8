//! Document value model.
//!
//! A parsed document is a tree of [`Value`] nodes: mappings, sequences, and
//! scalars. The model is format-agnostic; any self-describing serde format
//! (YAML, JSON, TOML) deserializes into it through the visitor below.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

/// A leaf value in a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Str(v) => f.write_str(v),
        }
    }
}

/// A node in a parsed document tree.
///
/// Mappings preserve insertion order so that duplicate-path resolution
/// (last write wins) is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Sequence(Vec<Value>),
    Mapping(IndexMap<String, Value>),
}

impl Value {
    /// Human-readable name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    /// Consume the value, returning the mapping if this is one.
    pub fn into_mapping(self) -> Result<IndexMap<String, Value>, Value> {
        match self {
            Value::Mapping(map) => Ok(map),
            other => Err(other),
        }
    }

    /// Coerce a value used as a mapping key to its textual form.
    ///
    /// Scalar keys use their display representation; composite keys are not
    /// representable as a path fragment.
    fn into_key(self) -> Result<String, &'static str> {
        match self {
            Value::Scalar(Scalar::Str(s)) => Ok(s),
            Value::Scalar(s) => Ok(s.to_string()),
            Value::Sequence(_) | Value::Mapping(_) => {
                Err("mapping keys must be scalars")
            }
        }
    }
}

/// A document: a tree rooted at a mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    root: IndexMap<String, Value>,
}

impl Document {
    pub fn new(root: IndexMap<String, Value>) -> Self {
        Self { root }
    }

    /// The top-level mapping.
    pub fn root(&self) -> &IndexMap<String, Value> {
        &self.root
    }

    /// True when the document has no top-level keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

// The toml crate smuggles datetime values through a single-entry map keyed by
// this marker; collapse it back to the datetime text so it stays a scalar.
const TOML_DATETIME_FIELD: &str = "$__toml_private_datetime";

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a configuration value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Scalar(Scalar::Bool(v)))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Scalar(Scalar::Int(v)))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        // u64 values above i64::MAX degrade to floats
        match i64::try_from(v) {
            Ok(v) => Ok(Value::Scalar(Scalar::Int(v))),
            Err(_) => Ok(Value::Scalar(Scalar::Float(v as f64))),
        }
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Scalar(Scalar::Float(v)))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::Scalar(Scalar::Str(v.to_string())))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::Scalar(Scalar::Str(v)))
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Scalar(Scalar::Null))
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Scalar(Scalar::Null))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<Value>()? {
            let key = key.into_key().map_err(de::Error::custom)?;
            let value = map.next_value()?;
            entries.insert(key, value);
        }
        if entries.len() == 1 {
            if let Some(Value::Scalar(Scalar::Str(text))) = entries.get(TOML_DATETIME_FIELD) {
                return Ok(Value::Scalar(Scalar::Str(text.clone())));
            }
        }
        Ok(Value::Mapping(entries))
    }
}

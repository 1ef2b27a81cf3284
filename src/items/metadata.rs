//! Item Metadata Tree
//!
//! A small typed tree of named values, the shape hosts use for per-stack
//! persisted data. Compounds are ordered maps so encodings are stable.

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named children of a compound node
pub type MetadataCompound = BTreeMap<String, MetadataValue>;

/// One node of the metadata tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetadataValue {
    I32(i32),
    I64(i64),
    F64(f64),
    String(String),
    List(Vec<MetadataValue>),
    Compound(MetadataCompound),
}

impl MetadataValue {
    /// Short type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            MetadataValue::I32(_) => "i32",
            MetadataValue::I64(_) => "i64",
            MetadataValue::F64(_) => "f64",
            MetadataValue::String(_) => "string",
            MetadataValue::List(_) => "list",
            MetadataValue::Compound(_) => "compound",
        }
    }

    /// Integer value, widening i32
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            MetadataValue::I32(v) => Some(*v as i64),
            MetadataValue::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&MetadataCompound> {
        match self {
            MetadataValue::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[MetadataValue]> {
        match self {
            MetadataValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::String(value.to_string())
    }
}

impl From<i32> for MetadataValue {
    fn from(value: i32) -> Self {
        MetadataValue::I32(value)
    }
}

fn type_mismatch(key: &str, expected: &str, found: &MetadataValue) -> EngineError {
    EngineError::DeserializationError {
        context: format!("metadata key '{}'", key),
        error: format!("expected {}, found {}", expected, found.type_name()),
    }
}

// ============================================================================
// TREE ACCESS
// ============================================================================

/// Child compound, if present and actually a compound
pub fn get_compound<'a>(parent: &'a MetadataCompound, key: &str) -> Option<&'a MetadataCompound> {
    parent.get(key).and_then(MetadataValue::as_compound)
}

/// Child list, if present and actually a list
pub fn get_list<'a>(parent: &'a MetadataCompound, key: &str) -> Option<&'a [MetadataValue]> {
    parent.get(key).and_then(MetadataValue::as_list)
}

/// Child compound, created empty when missing
///
/// A value of another type under `key` is left untouched and reported.
pub fn get_or_create_compound<'a>(
    parent: &'a mut MetadataCompound,
    key: &str,
) -> EngineResult<&'a mut MetadataCompound> {
    match parent
        .entry(key.to_string())
        .or_insert_with(|| MetadataValue::Compound(MetadataCompound::new()))
    {
        MetadataValue::Compound(compound) => Ok(compound),
        other => Err(type_mismatch(key, "compound", other)),
    }
}

/// Child list, created empty when missing
pub fn get_or_create_list<'a>(
    parent: &'a mut MetadataCompound,
    key: &str,
) -> EngineResult<&'a mut Vec<MetadataValue>> {
    match parent
        .entry(key.to_string())
        .or_insert_with(|| MetadataValue::List(Vec::new()))
    {
        MetadataValue::List(items) => Ok(items),
        other => Err(type_mismatch(key, "list", other)),
    }
}

// ============================================================================
// ENCODING
// ============================================================================

/// Encode a metadata tree for host persistence
pub fn encode_metadata(metadata: &MetadataCompound) -> EngineResult<Vec<u8>> {
    Ok(bincode::serialize(metadata)?)
}

/// Decode a tree written by `encode_metadata`
pub fn decode_metadata(bytes: &[u8]) -> EngineResult<MetadataCompound> {
    bincode::deserialize(bytes).map_err(|e| EngineError::DeserializationError {
        context: "item metadata".to_string(),
        error: e.to_string(),
    })
}

/// Pretty JSON rendering, for logs and debugging
pub fn metadata_to_json(metadata: &MetadataCompound) -> EngineResult<String> {
    Ok(serde_json::to_string_pretty(metadata)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MetadataCompound {
        let mut root = MetadataCompound::new();
        let info = get_or_create_compound(&mut root, "aura:upgrade_info")
            .expect("Failed to create compound");
        let list = get_or_create_list(info, "Upgrades").expect("Failed to create list");

        let mut entry = MetadataCompound::new();
        entry.insert("Name".to_string(), "haste".into());
        entry.insert("Level".to_string(), 2.into());
        list.push(MetadataValue::Compound(entry));
        root
    }

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut root = sample();
        let info = get_or_create_compound(&mut root, "aura:upgrade_info")
            .expect("Failed to reopen compound");
        assert_eq!(
            get_or_create_list(info, "Upgrades")
                .expect("Failed to reopen list")
                .len(),
            1
        );
    }

    #[test]
    fn test_wrong_type_is_reported_not_replaced() {
        let mut root = MetadataCompound::new();
        root.insert("display".to_string(), MetadataValue::I32(3));

        let result = get_or_create_compound(&mut root, "display");
        assert!(matches!(result, Err(EngineError::DeserializationError { .. })));
        assert_eq!(root.get("display"), Some(&MetadataValue::I32(3)));
    }

    #[test]
    fn test_bincode_encoding() {
        let root = sample();
        let bytes = encode_metadata(&root).expect("Failed to encode metadata");
        let decoded = decode_metadata(&bytes).expect("Failed to decode metadata");
        assert_eq!(decoded, root);

        assert!(decode_metadata(&[0xff, 0xff, 0xff]).is_err());
    }

    #[test]
    fn test_json_rendering_names_keys() {
        let json = metadata_to_json(&sample()).expect("Failed to render json");
        assert!(json.contains("aura:upgrade_info"));
        assert!(json.contains("haste"));
    }

    #[test]
    fn test_integer_widening() {
        assert_eq!(MetadataValue::I32(7).as_i64(), Some(7));
        assert_eq!(MetadataValue::I64(-2).as_i64(), Some(-2));
        assert_eq!(MetadataValue::F64(1.0).as_i64(), None);
    }
}

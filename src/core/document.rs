//! Ordered key/value telemetry documents and their JSON form.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::{DeviceInfoError, Result};

/// Serialized form of a document that is unavailable
pub const EMPTY_DOCUMENT: &str = "{}";

/// A single field value. Documents never nest beyond a flat string list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f32),
    Bool(bool),
    Text(String),
    List(Vec<String>),
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(i64::from(v))
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::Int(i64::from(v))
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        FieldValue::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(v: Vec<String>) -> Self {
        FieldValue::List(v)
    }
}

/// One telemetry snapshot: string keys in insertion order.
///
/// Re-inserting a key replaces the value and keeps the original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceInfoDocument {
    fields: Vec<(String, FieldValue)>,
}

impl DeviceInfoDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>, V: Into<FieldValue>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Builder-style insert
    pub fn with<K: Into<String>, V: Into<FieldValue>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge `other` into this document; keys from `other` win
    pub fn merge(&mut self, other: DeviceInfoDocument) {
        for (key, value) in other.fields {
            self.insert(key, value);
        }
    }

    /// Serialize to a JSON object string.
    ///
    /// Fails on non-finite floats, which have no JSON representation.
    pub fn to_json(&self) -> Result<String> {
        if let Some((key, _)) = self
            .fields
            .iter()
            .find(|(_, v)| matches!(v, FieldValue::Float(f) if !f.is_finite()))
        {
            return Err(DeviceInfoError::NonFiniteValue(key.clone()));
        }

        Ok(serde_json::to_string(self)?)
    }

    /// Serialize, degrading any failure to `"{}"`
    pub fn to_json_or_empty(&self) -> String {
        self.to_json().unwrap_or_else(|e| {
            log::warn!("Failed to serialize document: {}", e);
            EMPTY_DOCUMENT.to_string()
        })
    }
}

impl Serialize for DeviceInfoDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for DeviceInfoDocument {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut doc = DeviceInfoDocument::new();
        for (key, value) in iter {
            doc.insert(key, value);
        }
        doc
    }
}

/// Merge several reader outputs into one document, later documents winning
pub fn assemble<I>(documents: I) -> DeviceInfoDocument
where
    I: IntoIterator<Item = DeviceInfoDocument>,
{
    let mut merged = DeviceInfoDocument::new();
    for doc in documents {
        merged.merge(doc);
    }
    merged
}

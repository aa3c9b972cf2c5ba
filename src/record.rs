// src/record.rs
//! # Field Records
//! Flat key/value map holding everything collected for one ticker.
//!
//! Keys are namespaced by source (`fundamentus_pl`, `statusInvest_erro`, ...) except for the
//! cross-cutting `ticker` and `atualizado_em`. A [`SourceGroup`] is the slice of a record that
//! belongs to one source; it is the unit the reconciler keeps, replaces, or restores.
//!
//! Both keep insertion order, so a saved record reads `ticker`, then each source group in schema
//! order, then `atualizado_em`, and a loaded file round-trips without reshuffling.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const TICKER_KEY: &str = "ticker";
pub const UPDATED_AT_KEY: &str = "atualizado_em";

/// Stored form of `atualizado_em` and `<source>_data_atualizacao`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Error code a source reports when every credential it rotates through is spent.
pub const QUOTA_EXHAUSTED: &str = "ALL_KEYS_EXHAUSTED";

/// A single stored value. Serialized untagged so the JSON file holds plain scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

/// One ticker's complete collected data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRecord {
    fields: IndexMap<String, FieldValue>,
}

impl FieldRecord {
    /// Empty record carrying only the ticker.
    pub fn new(ticker: &str) -> Self {
        let mut rec = Self::default();
        rec.insert(TICKER_KEY, ticker);
        rec
    }

    pub fn ticker(&self) -> Option<&str> {
        self.fields
            .get(TICKER_KEY)
            .and_then(FieldValue::as_str)
            .filter(|t| !t.trim().is_empty())
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    /// Copy out every key under `prefix` (e.g. `"statusInvest_"`).
    /// Returns `None` when the record has no key in that namespace.
    pub fn group(&self, source: &str) -> Option<SourceGroup> {
        let prefix = group_prefix(source);
        let fields: IndexMap<String, FieldValue> = self
            .fields
            .iter()
            .filter(|(k, _)| k.starts_with(&prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if fields.is_empty() {
            None
        } else {
            Some(SourceGroup {
                source: source.to_string(),
                fields,
            })
        }
    }

    /// Plain key union; the group's values win on collision.
    pub fn merge_group(&mut self, group: &SourceGroup) {
        for (k, v) in &group.fields {
            self.fields.insert(k.clone(), v.clone());
        }
    }

    /// Replace the whole namespace: keys the group lacks are dropped, kept keys stay in place.
    pub fn replace_group(&mut self, group: &SourceGroup) {
        let prefix = group_prefix(&group.source);
        self.fields
            .retain(|k, _| !k.starts_with(&prefix) || group.fields.contains_key(k));
        self.merge_group(group);
    }

    pub fn remove_group(&mut self, source: &str) {
        let prefix = group_prefix(source);
        self.fields.retain(|k, _| !k.starts_with(&prefix));
    }
}

/// `"<source>_"`, the namespace every key of a source starts with.
pub fn group_prefix(source: &str) -> String {
    format!("{source}_")
}

/// Keys of one source inside a [`FieldRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct SourceGroup {
    pub source: String,
    pub fields: IndexMap<String, FieldValue>,
}

impl SourceGroup {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            fields: IndexMap::new(),
        }
    }

    pub fn error_key(&self) -> String {
        format!("{}_erro", self.source)
    }

    /// Error text for this group; empty on success.
    pub fn error(&self) -> &str {
        self.fields
            .get(&self.error_key())
            .and_then(FieldValue::as_str)
            .unwrap_or_default()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        let key = self.error_key();
        self.fields.insert(key, FieldValue::Text(message.into()));
    }

    pub fn is_quota_exhausted(&self) -> bool {
        self.error() == QUOTA_EXHAUSTED
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Values from `other` replace ours key by key.
    pub fn overlay(&mut self, other: &SourceGroup) {
        for (k, v) in &other.fields {
            self.fields.insert(k.clone(), v.clone());
        }
    }
}

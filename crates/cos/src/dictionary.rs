//! Insertion-ordered dictionary of named entries.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::{CosError, CosName, CosValue};

/// Name → value map.
///
/// Keys are kept in insertion order (mirrors how entries are written back
/// out). Removing an entry shifts later entries down rather than swapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CosDictionary {
    entries: IndexMap<CosName, CosValue>,
}

impl CosDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&CosValue> {
        self.entries.get(key.as_ref())
    }

    pub fn get_mut(&mut self, key: impl AsRef<str>) -> Option<&mut CosValue> {
        self.entries.get_mut(key.as_ref())
    }

    /// Insert or replace an entry. Returns the previous value, if any.
    pub fn set(&mut self, key: CosName, value: impl Into<CosValue>) -> Option<CosValue> {
        self.entries.insert(key, value.into())
    }

    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<CosValue> {
        self.entries.shift_remove(key.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CosName, &CosValue)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CosName> {
        self.entries.keys()
    }

    // ── Typed getters ────────────────────────────────────────────────────

    pub fn get_str(&self, key: impl AsRef<str>) -> Option<&str> {
        self.get(key).and_then(CosValue::as_str)
    }

    pub fn get_int(&self, key: impl AsRef<str>) -> Option<i64> {
        self.get(key).and_then(CosValue::as_int)
    }

    pub fn get_name(&self, key: impl AsRef<str>) -> Option<&CosName> {
        self.get(key).and_then(CosValue::as_name)
    }

    pub fn get_array(&self, key: impl AsRef<str>) -> Option<&[CosValue]> {
        self.get(key).and_then(CosValue::as_array)
    }

    /// Like [`get_name`](Self::get_name) but distinguishes a missing entry
    /// from one of the wrong type.
    pub fn require_name(&self, key: impl AsRef<str>) -> Result<&CosName, CosError> {
        let key = key.as_ref();
        match self.get(key) {
            Some(CosValue::Name(n)) => Ok(n),
            Some(other) => Err(CosError::UnexpectedType {
                key: CosName::new(key),
                expected: "name",
                found: other.type_name(),
            }),
            None => Err(CosError::MissingEntry(CosName::new(key))),
        }
    }

    // ── Typed setters ────────────────────────────────────────────────────

    pub fn set_str(&mut self, key: CosName, value: impl Into<String>) {
        self.set(key, CosValue::String(value.into()));
    }

    pub fn set_int(&mut self, key: CosName, value: i64) {
        self.set(key, CosValue::Integer(value));
    }

    pub fn set_name(&mut self, key: CosName, value: CosName) {
        self.set(key, CosValue::Name(value));
    }

    // ── Bit fields ───────────────────────────────────────────────────────

    /// True when every bit of `mask` is set in the integer entry `key`.
    /// A missing or non-integer entry reads as `0`.
    pub fn get_flag(&self, key: impl AsRef<str>, mask: i64) -> bool {
        (self.get_int(key).unwrap_or(0) & mask) == mask
    }

    /// Set or clear the bits of `mask` in the integer entry `key`, creating
    /// the entry from `0` when it is missing.
    pub fn set_flag(&mut self, key: CosName, mask: i64, on: bool) {
        let current = self.get_int(&key).unwrap_or(0);
        let next = if on { current | mask } else { current & !mask };
        log::debug!("flag {key} {current:#x} -> {next:#x}");
        self.set_int(key, next);
    }

    /// JSON object view; keys are rendered without the leading `/`.
    pub fn view(&self) -> Value {
        let mut map = Map::new();
        for (key, value) in &self.entries {
            map.insert(key.as_str().to_string(), value.view());
        }
        Value::Object(map)
    }
}

impl FromIterator<(CosName, CosValue)> for CosDictionary {
    fn from_iter<I: IntoIterator<Item = (CosName, CosValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

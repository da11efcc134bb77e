//! Choice field options and their `/Opt` encoding.
//!
//! The `/Opt` entry comes in two legal shapes:
//!
//! | Shape  | Stored as                              | Display value        |
//! |--------|----------------------------------------|----------------------|
//! | Flat   | `["a", "b"]`                           | same as export value |
//! | Paired | `[["a", "Label A"], ["b", "Label B"]]` | second element       |
//!
//! Reading decodes either shape (and arrays mixing both) into an
//! [`OptionList`]. Writing goes through [`StoredOptions`], which is built
//! fresh for every write and replaces the whole entry. An empty list is never
//! stored; the entry is removed instead.

use pdf_forms_cos::{CosDictionary, CosName, CosValue};
use serde::{Deserialize, Serialize};

use crate::error::{FormError, OPTION_COUNT_MISMATCH};

// ── ChoiceOption ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Value submitted when the option is selected.
    pub export: String,
    /// Label shown to the user.
    pub display: String,
}

impl ChoiceOption {
    pub fn new(export: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            export: export.into(),
            display: display.into(),
        }
    }

    /// Option without a separate label.
    pub fn flat(value: impl Into<String>) -> Self {
        let export = value.into();
        Self {
            display: export.clone(),
            export,
        }
    }
}

// ── OptionList ────────────────────────────────────────────────────────────

/// Ordered options; order is presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionList(Vec<ChoiceOption>);

impl OptionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `/Opt` value. Never fails: anything that is not an array
    /// decodes as the empty list and unusable elements are skipped.
    pub fn decode(value: Option<&CosValue>) -> Self {
        let items = match value {
            None => return Self::default(),
            Some(CosValue::Array(items)) => items,
            Some(other) => {
                log::warn!("ignoring {} /Opt entry, expected array", other.type_name());
                return Self::default();
            }
        };
        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| decode_item(index, item))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChoiceOption> {
        self.0.iter()
    }

    pub fn export_values(&self) -> Vec<String> {
        self.0.iter().map(|o| o.export.clone()).collect()
    }

    pub fn display_values(&self) -> Vec<String> {
        self.0.iter().map(|o| o.display.clone()).collect()
    }

    /// Stable ascending sort on the display value, compared byte-wise.
    pub fn sort_by_display(&mut self) {
        self.0.sort_by(|a, b| a.display.cmp(&b.display));
    }
}

impl FromIterator<ChoiceOption> for OptionList {
    fn from_iter<I: IntoIterator<Item = ChoiceOption>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for OptionList {
    type Item = ChoiceOption;
    type IntoIter = std::vec::IntoIter<ChoiceOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a ChoiceOption;
    type IntoIter = std::slice::Iter<'a, ChoiceOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn decode_item(index: usize, item: &CosValue) -> Option<ChoiceOption> {
    match item {
        CosValue::String(value) => Some(ChoiceOption::flat(value.as_str())),
        CosValue::Array(pair) => {
            let Some(export) = pair.first().and_then(CosValue::as_str) else {
                log::warn!("skipping /Opt[{index}]: pair without export string");
                return None;
            };
            let display = pair.get(1).and_then(CosValue::as_str).unwrap_or(export);
            Some(ChoiceOption::new(export, display))
        }
        other => {
            log::warn!("skipping /Opt[{index}]: unexpected {}", other.type_name());
            None
        }
    }
}

// ── StoredOptions ─────────────────────────────────────────────────────────

/// Storage-side shape of the option list, produced by the setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredOptions {
    /// No `/Opt` entry.
    Absent,
    /// Array of strings.
    Flat(Vec<String>),
    /// Array of `[export, display]` arrays.
    Paired(OptionList),
}

impl StoredOptions {
    /// Export values only. `None` and an empty slice both mean no options.
    pub fn flat(export_values: Option<&[String]>) -> Self {
        match export_values {
            Some(values) if !values.is_empty() => StoredOptions::Flat(values.to_vec()),
            _ => StoredOptions::Absent,
        }
    }

    /// Export and display values, pairwise.
    ///
    /// When both lists are given their lengths must match. Missing export
    /// values mean no options; missing display values fall back to
    /// [`flat`](Self::flat). `sort` orders the pairs by display value.
    pub fn paired(
        export_values: Option<&[String]>,
        display_values: Option<&[String]>,
        sort: bool,
    ) -> Result<Self, FormError> {
        if let (Some(export), Some(display)) = (export_values, display_values) {
            if export.len() != display.len() {
                return Err(FormError::invalid(OPTION_COUNT_MISMATCH));
            }
        }
        let (export, display) = match (export_values, display_values) {
            (Some(export), _) if export.is_empty() => return Ok(StoredOptions::Absent),
            (None, _) => return Ok(StoredOptions::Absent),
            (Some(export), None) => return Ok(Self::flat(Some(export))),
            (Some(export), Some(display)) => (export, display),
        };

        let mut options: OptionList = export
            .iter()
            .zip(display)
            .map(|(e, d)| ChoiceOption::new(e.as_str(), d.as_str()))
            .collect();
        if sort {
            options.sort_by_display();
        }
        Ok(StoredOptions::Paired(options))
    }

    pub fn to_value(&self) -> Option<CosValue> {
        match self {
            StoredOptions::Absent => None,
            StoredOptions::Flat(values) => Some(CosValue::string_array(values.iter().cloned())),
            StoredOptions::Paired(options) => Some(CosValue::Array(
                options
                    .iter()
                    .map(|o| CosValue::string_array([o.export.as_str(), o.display.as_str()]))
                    .collect(),
            )),
        }
    }

    /// Replace the `/Opt` entry of `dict` with this shape.
    pub fn write(&self, dict: &mut CosDictionary) {
        match self.to_value() {
            Some(value) => {
                log::debug!("writing {} options to /Opt", self.len());
                dict.set(CosName::OPT, value);
            }
            None => {
                if dict.remove(CosName::OPT).is_some() {
                    log::debug!("removed /Opt");
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            StoredOptions::Absent => 0,
            StoredOptions::Flat(values) => values.len(),
            StoredOptions::Paired(options) => options.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn decode_absent_and_non_array() {
        assert!(OptionList::decode(None).is_empty());
        assert!(OptionList::decode(Some(&CosValue::from("x"))).is_empty());
        assert!(OptionList::decode(Some(&CosValue::Integer(3))).is_empty());
    }

    #[test]
    fn decode_mixed_and_malformed_elements() {
        let raw = CosValue::Array(vec![
            CosValue::from("plain"),
            CosValue::string_array(["e1", "d1"]),
            CosValue::string_array(["lonely"]),
            CosValue::string_array(["e2", "d2", "extra"]),
            CosValue::Array(vec![]),
            CosValue::Array(vec![CosValue::Integer(1), CosValue::from("d")]),
            CosValue::Integer(9),
        ]);
        let list = OptionList::decode(Some(&raw));
        assert_eq!(list.export_values(), strings(&["plain", "e1", "lonely", "e2"]));
        assert_eq!(list.display_values(), strings(&["plain", "d1", "lonely", "d2"]));
    }

    #[test]
    fn paired_sort_is_stable() {
        let export = strings(&["a", "b", "c", "d"]);
        let display = strings(&["y", "x", "y", "x"]);
        let StoredOptions::Paired(list) =
            StoredOptions::paired(Some(&export), Some(&display), true).unwrap()
        else {
            panic!("expected paired options");
        };
        assert_eq!(list.export_values(), strings(&["b", "d", "a", "c"]));
        assert_eq!(list.display_values(), strings(&["x", "x", "y", "y"]));
    }

    #[test]
    fn paired_normalization_matrix() {
        let two = strings(&["a", "b"]);
        let empty: Vec<String> = Vec::new();

        assert_eq!(
            StoredOptions::paired(None, Some(&two), false),
            Ok(StoredOptions::Absent)
        );
        assert_eq!(
            StoredOptions::paired(Some(&empty), None, true),
            Ok(StoredOptions::Absent)
        );
        assert_eq!(
            StoredOptions::paired(Some(&empty), Some(&empty), false),
            Ok(StoredOptions::Absent)
        );
        assert_eq!(
            StoredOptions::paired(Some(&two), None, true),
            Ok(StoredOptions::Flat(two.clone()))
        );
        assert_eq!(
            StoredOptions::paired(Some(&two), Some(&empty), false),
            Err(FormError::InvalidArgument(OPTION_COUNT_MISMATCH.to_string()))
        );
        assert_eq!(
            StoredOptions::paired(Some(&empty), Some(&two), false),
            Err(FormError::InvalidArgument(OPTION_COUNT_MISMATCH.to_string()))
        );
    }

    #[test]
    fn encoded_shapes() {
        let flat = StoredOptions::flat(Some(&strings(&["a", "b"])));
        assert_eq!(flat.to_value().map(|v| v.view()), Some(json!(["a", "b"])));

        let paired =
            StoredOptions::paired(Some(&strings(&["a"])), Some(&strings(&["A"])), false).unwrap();
        assert_eq!(paired.to_value().map(|v| v.view()), Some(json!([["a", "A"]])));

        assert_eq!(StoredOptions::flat(None).to_value(), None);
        assert!(StoredOptions::flat(Some(&[])).is_empty());
    }

    #[test]
    fn option_list_serializes_as_array_of_objects() {
        let list: OptionList = [ChoiceOption::new("e", "d"), ChoiceOption::flat("f")]
            .into_iter()
            .collect();
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!([{"export": "e", "display": "d"}, {"export": "f", "display": "f"}])
        );
    }
}

//! Choice field wrapper over its field dictionary.

use pdf_forms_cos::{CosDictionary, CosName, CosValue};

use crate::flags::ChoiceFlags;
use crate::options::{OptionList, StoredOptions};
use crate::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    ListBox,
    ComboBox,
}

/// A list box or combo box.
///
/// All state lives in the field dictionary; every accessor reads it afresh
/// and every setter writes it directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceField {
    pub(crate) dict: CosDictionary,
}

impl ChoiceField {
    pub fn list_box(partial_name: impl Into<String>) -> Self {
        Self::with_kind(partial_name.into(), ChoiceKind::ListBox)
    }

    pub fn combo_box(partial_name: impl Into<String>) -> Self {
        Self::with_kind(partial_name.into(), ChoiceKind::ComboBox)
    }

    fn with_kind(partial_name: String, kind: ChoiceKind) -> Self {
        let mut dict = CosDictionary::new();
        dict.set_name(CosName::FT, CosName::CH);
        dict.set_str(CosName::T, partial_name);
        if kind == ChoiceKind::ComboBox {
            dict.set_flag(CosName::FF, ChoiceFlags::COMBO, true);
        }
        Self { dict }
    }

    /// Wrap an existing field dictionary; its `/FT` must be `/Ch`.
    pub fn from_dictionary(dict: CosDictionary) -> Result<Self, FormError> {
        let field_type = dict.require_name(CosName::FT)?;
        if *field_type != CosName::CH {
            return Err(FormError::invalid(format!(
                "expected field type {}, found {field_type}",
                CosName::CH
            )));
        }
        Ok(Self { dict })
    }

    pub fn dictionary(&self) -> &CosDictionary {
        &self.dict
    }

    pub fn into_dictionary(self) -> CosDictionary {
        self.dict
    }

    pub fn kind(&self) -> ChoiceKind {
        if self.is_combo() {
            ChoiceKind::ComboBox
        } else {
            ChoiceKind::ListBox
        }
    }

    pub fn partial_name(&self) -> Option<&str> {
        self.dict.get_str(CosName::T)
    }

    // ── Options ──────────────────────────────────────────────────────────

    /// Decoded `/Opt` entry.
    pub fn option_list(&self) -> OptionList {
        OptionList::decode(self.dict.get(CosName::OPT))
    }

    /// Export values of the options. Empty when there is no `/Opt` entry.
    pub fn options(&self) -> Vec<String> {
        self.option_list().export_values()
    }

    /// Same as [`options`](Self::options).
    pub fn options_export_values(&self) -> Vec<String> {
        self.options()
    }

    /// Display values; equal to the export values for flat options.
    pub fn options_display_values(&self) -> Vec<String> {
        self.option_list().display_values()
    }

    /// Store options without separate labels. `None` or an empty slice
    /// removes the `/Opt` entry. The sort flag is not applied here.
    pub fn set_options(&mut self, export_values: Option<&[String]>) {
        StoredOptions::flat(export_values).write(&mut self.dict);
    }

    /// Store `[export, display]` pairs, ordered by display value when the
    /// sort flag is set.
    ///
    /// Fails without touching the dictionary when both lists are given with
    /// different lengths.
    pub fn set_options_with_display(
        &mut self,
        export_values: Option<&[String]>,
        display_values: Option<&[String]>,
    ) -> Result<(), FormError> {
        let stored = StoredOptions::paired(export_values, display_values, self.is_sort())?;
        stored.write(&mut self.dict);
        Ok(())
    }

    // ── Value ────────────────────────────────────────────────────────────

    /// Current value (`/V`) as a list; a single string yields one element.
    pub fn value(&self) -> Vec<String> {
        string_list(self.dict.get(CosName::V))
    }

    pub fn default_value(&self) -> Vec<String> {
        string_list(self.dict.get(CosName::DV))
    }

    /// Set or clear `/V`.
    ///
    /// Unless the field is an editable combo box, a value must be one of the
    /// export values whenever options exist.
    pub fn set_value(&mut self, value: Option<&str>) -> Result<(), FormError> {
        let Some(value) = value else {
            self.dict.remove(CosName::V);
            return Ok(());
        };
        if !self.is_edit() {
            let options = self.options();
            if !options.is_empty() && !options.iter().any(|o| o == value) {
                return Err(FormError::invalid(
                    "The value is not contained in the selectable options.",
                ));
            }
        }
        log::debug!("setting /V of {:?}", self.partial_name());
        self.dict.set_str(CosName::V, value);
        Ok(())
    }

    // ── Top index ────────────────────────────────────────────────────────

    /// Index of the first visible option of a list box.
    pub fn top_index(&self) -> usize {
        self.dict
            .get_int(CosName::TI)
            .and_then(|i| usize::try_from(i).ok())
            .unwrap_or(0)
    }

    /// `None` or `0` removes `/TI`.
    pub fn set_top_index(&mut self, index: Option<usize>) -> Result<(), FormError> {
        match index {
            None | Some(0) => {
                self.dict.remove(CosName::TI);
            }
            Some(index) => {
                let index = i64::try_from(index)
                    .map_err(|_| FormError::invalid(format!("top index {index} out of range")))?;
                self.dict.set_int(CosName::TI, index);
            }
        }
        Ok(())
    }
}

fn string_list(value: Option<&CosValue>) -> Vec<String> {
    match value {
        Some(CosValue::String(s)) => vec![s.clone()],
        Some(CosValue::Array(items)) => items
            .iter()
            .filter_map(CosValue::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

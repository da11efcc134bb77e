//! Choice field flags, stored in the `/Ff` bit field.
//!
//! | Bit (1-based) | Mask      | Meaning                                  |
//! |---------------|-----------|------------------------------------------|
//! | 18            | `1 << 17` | Combo box rather than list box           |
//! | 19            | `1 << 18` | Combo box has an editable text box       |
//! | 20            | `1 << 19` | Options are sorted by display value      |
//! | 22            | `1 << 21` | More than one option may be selected     |
//! | 23            | `1 << 22` | Editable text is not spell-checked       |
//! | 27            | `1 << 26` | Commit value as soon as selection changes |

use pdf_forms_cos::CosName;

use crate::{ChoiceField, FormError};

pub struct ChoiceFlags;

impl ChoiceFlags {
    pub const COMBO: i64 = 1 << 17;
    pub const EDIT: i64 = 1 << 18;
    pub const SORT: i64 = 1 << 19;
    pub const MULTI_SELECT: i64 = 1 << 21;
    pub const DO_NOT_SPELL_CHECK: i64 = 1 << 22;
    pub const COMMIT_ON_SEL_CHANGE: i64 = 1 << 26;
}

impl ChoiceField {
    fn flag(&self, mask: i64) -> bool {
        self.dict.get_flag(CosName::FF, mask)
    }

    fn set_flag(&mut self, mask: i64, on: bool) {
        self.dict.set_flag(CosName::FF, mask, on);
    }

    pub fn is_combo(&self) -> bool {
        self.flag(ChoiceFlags::COMBO)
    }

    pub fn is_sort(&self) -> bool {
        self.flag(ChoiceFlags::SORT)
    }

    /// Only affects later paired option writes; stored options are not
    /// reordered.
    pub fn set_sort(&mut self, sort: bool) {
        self.set_flag(ChoiceFlags::SORT, sort);
    }

    pub fn is_multi_select(&self) -> bool {
        self.flag(ChoiceFlags::MULTI_SELECT)
    }

    pub fn set_multi_select(&mut self, multi_select: bool) {
        self.set_flag(ChoiceFlags::MULTI_SELECT, multi_select);
    }

    pub fn is_do_not_spell_check(&self) -> bool {
        self.flag(ChoiceFlags::DO_NOT_SPELL_CHECK)
    }

    pub fn set_do_not_spell_check(&mut self, do_not_spell_check: bool) {
        self.set_flag(ChoiceFlags::DO_NOT_SPELL_CHECK, do_not_spell_check);
    }

    pub fn is_commit_on_sel_change(&self) -> bool {
        self.flag(ChoiceFlags::COMMIT_ON_SEL_CHANGE)
    }

    pub fn set_commit_on_sel_change(&mut self, commit_on_sel_change: bool) {
        self.set_flag(ChoiceFlags::COMMIT_ON_SEL_CHANGE, commit_on_sel_change);
    }

    /// Editable text box; only combo boxes carry it.
    pub fn is_edit(&self) -> bool {
        self.is_combo() && self.flag(ChoiceFlags::EDIT)
    }

    pub fn set_edit(&mut self, edit: bool) -> Result<(), FormError> {
        if !self.is_combo() {
            return Err(FormError::invalid(
                "The edit flag is only defined for combo boxes.",
            ));
        }
        self.set_flag(ChoiceFlags::EDIT, edit);
        Ok(())
    }
}

//! Interactive form field model.
//!
//! This crate covers choice fields (list boxes and combo boxes) and, in
//! particular, their option list: the `/Opt` entry of the field dictionary,
//! which stores options either as plain strings or as `[export, display]`
//! pairs.
//!
//! This module provides:
//! - The field wrapper ([`ChoiceField`]) over a [`CosDictionary`]
//! - Typed options ([`ChoiceOption`], [`OptionList`]) and the storage-side
//!   variant ([`StoredOptions`])
//! - Choice field flag masks ([`ChoiceFlags`])
//! - Errors ([`FormError`])
//!
//! ```
//! use pdf_forms::ChoiceField;
//!
//! let mut field = ChoiceField::list_box("colors");
//! let export = vec!["r".to_string(), "g".to_string()];
//! let display = vec!["Red".to_string(), "Green".to_string()];
//! field.set_sort(true);
//! field
//!     .set_options_with_display(Some(export.as_slice()), Some(display.as_slice()))
//!     .unwrap();
//! assert_eq!(field.options_display_values(), vec!["Green", "Red"]);
//! assert_eq!(field.options_export_values(), vec!["g", "r"]);
//! ```

pub mod error;
pub mod field;
pub mod flags;
pub mod options;

pub use error::{FormError, OPTION_COUNT_MISMATCH};
pub use field::{ChoiceField, ChoiceKind};
pub use flags::ChoiceFlags;
pub use options::{ChoiceOption, OptionList, StoredOptions};

pub use pdf_forms_cos::{CosDictionary, CosName, CosValue};

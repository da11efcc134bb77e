use pdf_forms_cos::CosError;
use thiserror::Error;

/// Message of the paired option setter when export and display lists differ
/// in length. Callers match on this text, so it must stay stable.
pub const OPTION_COUNT_MISMATCH: &str =
    "The number of entries for exportValue and displayValue shall be the same.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Cos(#[from] CosError),
}

impl FormError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        FormError::InvalidArgument(message.into())
    }
}

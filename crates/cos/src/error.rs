use thiserror::Error;

use crate::CosName;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CosError {
    #[error("missing entry {0}")]
    MissingEntry(CosName),
    #[error("entry {key} is {found}, expected {expected}")]
    UnexpectedType {
        key: CosName,
        expected: &'static str,
        found: &'static str,
    },
}

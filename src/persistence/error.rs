//! Slot record decode errors

use thiserror::Error;

/// Why a persisted slot record could not be turned into a stack
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotDecodeError {
    #[error("slot record is not a compound")]
    NotACompound,

    #[error("slot record is missing field `{0}`")]
    MissingField(&'static str),

    #[error("slot record field `{field}` has invalid value {value}")]
    InvalidField { field: &'static str, value: String },
}

use thiserror::Error;

use crate::persistence::SlotDecodeError;

/// Errors reported by inventory bulk and load operations.
///
/// Click transactions never produce these; invalid clicks are rejected
/// through `TxOutcome` instead.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("slot {index} out of range for inventory of {len} slots")]
    SlotOutOfRange { index: usize, len: usize },

    #[error("slot {index} could not be decoded: {source}")]
    Decode {
        index: usize,
        #[source]
        source: SlotDecodeError,
    },

    #[error("item list entry {position} is malformed: {source}")]
    MalformedRecord {
        position: usize,
        #[source]
        source: SlotDecodeError,
    },
}

pub type InventoryResult<T> = Result<T, InventoryError>;

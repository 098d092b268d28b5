//! Persisted container contents

pub mod error;
pub mod slot_record;

pub use error::SlotDecodeError;
pub use slot_record::{
    decode_slot_index, decode_slot_record, encode_slot_record, encode_slot_records,
    load_slot_records, TAG_COUNT, TAG_DAMAGE, TAG_ID, TAG_SLOT,
};

use serde_json::{json, Map, Value};

use super::SlotDecodeError;
use crate::inventory::{Inventory, InventoryError, InventorySubscriber, SlotStack, MAX_STACK_SIZE};
use crate::item::{ItemData, ItemId};

/// Item type tag
pub const TAG_ID: &str = "id";
/// Stack size tag
pub const TAG_COUNT: &str = "Count";
/// Auxiliary data tag; optional, defaults to 0
pub const TAG_DAMAGE: &str = "Damage";
/// Slot index tag, only present in container item lists
pub const TAG_SLOT: &str = "Slot";

fn compound(record: &Value) -> Result<&Map<String, Value>, SlotDecodeError> {
    record.as_object().ok_or(SlotDecodeError::NotACompound)
}

fn integer_field(
    fields: &Map<String, Value>,
    field: &'static str,
    max: u64,
) -> Result<Option<u64>, SlotDecodeError> {
    let Some(value) = fields.get(field) else {
        return Ok(None);
    };
    match value.as_u64() {
        Some(n) if n <= max => Ok(Some(n)),
        _ => Err(SlotDecodeError::InvalidField {
            field,
            value: value.to_string(),
        }),
    }
}

fn required_field(
    fields: &Map<String, Value>,
    field: &'static str,
    max: u64,
) -> Result<u64, SlotDecodeError> {
    integer_field(fields, field, max)?.ok_or(SlotDecodeError::MissingField(field))
}

/// Decode one persisted slot record into a stack
pub fn decode_slot_record(record: &Value) -> Result<SlotStack, SlotDecodeError> {
    let fields = compound(record)?;
    let item_id = required_field(fields, TAG_ID, u64::from(u16::MAX))?;
    let count = required_field(fields, TAG_COUNT, u64::from(MAX_STACK_SIZE))?;
    let data = integer_field(fields, TAG_DAMAGE, u64::from(ItemData::MAX))?.unwrap_or(0);

    // Bounds were checked above
    let mut stack = SlotStack::new(ItemId(item_id as u16), count as u32, data as ItemData);
    stack.normalize();
    Ok(stack)
}

/// Read the `Slot` tag of a container list entry
pub fn decode_slot_index(record: &Value) -> Result<usize, SlotDecodeError> {
    let fields = compound(record)?;
    let index = required_field(fields, TAG_SLOT, u64::from(u8::MAX))?;
    Ok(index as usize)
}

/// Encode a stack as a list entry for slot `index`
pub fn encode_slot_record(stack: &SlotStack, index: usize) -> Value {
    json!({
        TAG_ID: stack.item_id.0,
        TAG_COUNT: stack.count,
        TAG_DAMAGE: stack.data,
        TAG_SLOT: index,
    })
}

/// Encode every non-empty slot, in slot order
pub fn encode_slot_records<S: InventorySubscriber>(inventory: &Inventory<S>) -> Vec<Value> {
    inventory
        .iter()
        .enumerate()
        .filter(|(_, stack)| !stack.is_empty())
        .map(|(index, stack)| encode_slot_record(stack, index))
        .collect()
}

/// Load a container item list into `inventory`.
///
/// Each entry names its own slot. Bad entries are skipped and reported;
/// the rest still load. Slots without an entry are left as they are.
pub fn load_slot_records<S: InventorySubscriber>(
    inventory: &mut Inventory<S>,
    records: &[Value],
) -> Vec<InventoryError> {
    let mut errors = Vec::new();
    for (position, record) in records.iter().enumerate() {
        let result = decode_slot_index(record)
            .map_err(|source| InventoryError::MalformedRecord { position, source })
            .and_then(|index| inventory.read_slot_record(record, index));
        if let Err(err) = result {
            log::warn!("Skipping slot record {}: {}", position, err);
            errors.push(err);
        }
    }
    errors
}

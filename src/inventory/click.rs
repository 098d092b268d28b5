use serde::{Serialize, Deserialize};

use super::SlotStack;

/// Slot index as sent by clients. Negative values are representable on
/// the wire and are rejected by the store.
pub type SlotId = i16;

/// Client-chosen transaction identifier, echoed back in the outcome
pub type TxId = i16;

/// Result of a click transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxOutcome {
    Accepted,
    Rejected,
}

impl TxOutcome {
    pub fn is_accepted(self) -> bool {
        self == TxOutcome::Accepted
    }
}

/// One client click against a single slot.
///
/// `cursor` is the stack the client holds and is updated in place.
/// `expected_slot` is what the client believed the slot held when it
/// clicked; a mismatch with the authoritative slot rejects the click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Click {
    pub slot: SlotId,
    pub cursor: SlotStack,
    pub right_click: bool,
    pub shift_click: bool,
    pub tx_id: TxId,
    pub expected_slot: SlotStack,
}

impl Click {
    /// Left click with the given cursor and expected slot contents
    pub fn left(slot: SlotId, cursor: SlotStack, expected_slot: SlotStack, tx_id: TxId) -> Self {
        Self {
            slot,
            cursor,
            right_click: false,
            shift_click: false,
            tx_id,
            expected_slot,
        }
    }

    /// Right click with the given cursor and expected slot contents
    pub fn right(slot: SlotId, cursor: SlotStack, expected_slot: SlotStack, tx_id: TxId) -> Self {
        Self {
            right_click: true,
            ..Self::left(slot, cursor, expected_slot, tx_id)
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift_click = true;
        self
    }
}

/// The mutation a click performs, chosen from the cursor state and button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Empty cursor, right button: take half of the slot
    Split,
    /// Empty cursor, left button: pick up the slot
    Swap,
    /// Holding items, right button: take one more from the slot
    TakeOne,
    /// Holding items, left button: drop as many as fit into the slot
    Merge,
}

impl ClickAction {
    pub fn select(cursor_empty: bool, right_click: bool) -> Self {
        match (cursor_empty, right_click) {
            (true, true) => ClickAction::Split,
            (true, false) => ClickAction::Swap,
            (false, true) => ClickAction::TakeOne,
            (false, false) => ClickAction::Merge,
        }
    }

    /// Apply the action. TakeOne and Merge fall back to a full swap when
    /// they cannot move anything.
    pub fn apply(self, slot: &mut SlotStack, cursor: &mut SlotStack) {
        match self {
            ClickAction::Split => {
                slot.split_into(cursor);
            }
            ClickAction::Swap => slot.swap(cursor),
            ClickAction::TakeOne => {
                if !cursor.add_one(slot) {
                    slot.swap(cursor);
                }
            }
            ClickAction::Merge => {
                if !slot.add(cursor) {
                    slot.swap(cursor);
                }
            }
        }
    }
}

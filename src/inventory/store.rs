use serde_json::Value;

use super::click::{Click, ClickAction, SlotId, TxOutcome};
use super::error::{InventoryError, InventoryResult};
use super::subscriber::{InventorySubscriber, NoSubscriber, ProgressBarId, ProgressValue};
use super::SlotStack;
use crate::persistence::decode_slot_record;

/// Fixed-size slot storage behind every container.
///
/// The slot count never changes after construction. Every mutation is
/// reported to the single subscriber `S`; an inventory built with
/// [`Inventory::new`] has no subscriber until one is attached with
/// [`Inventory::with_subscriber`].
#[derive(Debug, Clone)]
pub struct Inventory<S = NoSubscriber> {
    slots: Vec<SlotStack>,
    subscriber: S,
}

impl Inventory {
    /// Create an empty inventory with `size` slots
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![SlotStack::empty(); size],
            subscriber: NoSubscriber,
        }
    }
}

impl<S: InventorySubscriber> Inventory<S> {
    /// Attach a subscriber, consuming this inventory
    pub fn with_subscriber<T: InventorySubscriber>(self, subscriber: T) -> Inventory<T> {
        Inventory {
            slots: self.slots,
            subscriber,
        }
    }

    /// Replace the subscriber, returning the previous one
    pub fn set_subscriber(&mut self, subscriber: S) -> S {
        std::mem::replace(&mut self.subscriber, subscriber)
    }

    pub fn subscriber(&self) -> &S {
        &self.subscriber
    }

    pub fn subscriber_mut(&mut self) -> &mut S {
        &mut self.subscriber
    }

    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    /// Snapshot of one slot
    pub fn slot(&self, index: usize) -> Option<SlotStack> {
        self.slots.get(index).copied()
    }

    /// Resolve a client slot id against the slot range
    fn resolve(&self, slot: SlotId) -> Option<usize> {
        usize::try_from(slot)
            .ok()
            .filter(|index| *index < self.slots.len())
    }

    /// Bounds and staleness checks shared by both click flavours
    fn check_click(&self, click: &Click) -> Option<usize> {
        let index = self.resolve(click.slot)?;
        if click.expected_slot != self.slots[index] {
            return None;
        }
        Some(index)
    }

    /// Apply a client click to a slot.
    ///
    /// The click is rejected without touching anything if the slot id is
    /// out of range or the client's `expected_slot` no longer matches the
    /// slot. Otherwise exactly one [`ClickAction`] is applied, the cursor is
    /// updated in place and the slot is re-announced to the subscriber,
    /// even when the action moved nothing.
    pub fn click(&mut self, click: &mut Click) -> TxOutcome {
        let Some(index) = self.check_click(click) else {
            log::debug!("Rejected click on slot {} (tx {})", click.slot, click.tx_id);
            return TxOutcome::Rejected;
        };

        // Shift-click is carried through but currently behaves like a plain click.
        let action = ClickAction::select(click.cursor.is_empty(), click.right_click);
        let slot = &mut self.slots[index];
        action.apply(slot, &mut click.cursor);

        self.subscriber.slot_update(&self.slots[index], index);
        TxOutcome::Accepted
    }

    /// Click handler for output-only slots.
    ///
    /// Only the whole slot can be picked up, and only if the cursor can
    /// hold all of it; otherwise nothing moves. The click is still
    /// accepted in that case.
    pub fn take_only_click(&mut self, click: &mut Click) -> TxOutcome {
        let Some(index) = self.check_click(click) else {
            log::debug!("Rejected take-only click on slot {} (tx {})", click.slot, click.tx_id);
            return TxOutcome::Rejected;
        };

        if click.cursor.add_whole(&mut self.slots[index]) {
            self.subscriber.slot_update(&self.slots[index], index);
        }
        TxOutcome::Accepted
    }

    /// Move a single item from a slot into `into`.
    ///
    /// Returns false if the slot does not exist or nothing could move.
    pub fn take_one_item(&mut self, index: usize, into: &mut SlotStack) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };
        if !into.add_one(slot) {
            return false;
        }
        self.subscriber.slot_update(&self.slots[index], index);
        true
    }

    /// Put as much of `item` as possible into the inventory.
    ///
    /// Slots are filled in index order; whatever does not fit stays in
    /// `item`.
    pub fn put_item(&mut self, item: &mut SlotStack) {
        for index in 0..self.slots.len() {
            if item.is_empty() {
                break;
            }
            if self.slots[index].add(item) {
                self.subscriber.slot_update(&self.slots[index], index);
            }
        }
    }

    /// Whether at least one item of `item` would fit. Mutates nothing.
    pub fn can_take_item(&self, item: &SlotStack) -> bool {
        if item.is_empty() {
            return false;
        }

        self.slots.iter().any(|slot| {
            let mut slot_copy = *slot;
            let mut item_copy = *item;
            slot_copy.add(&mut item_copy)
        })
    }

    /// Empty every occupied slot, returning what was removed in slot order
    pub fn take_all_items(&mut self) -> Vec<SlotStack> {
        let mut items = Vec::new();
        for index in 0..self.slots.len() {
            if self.slots[index].is_empty() {
                continue;
            }
            items.push(self.slots[index].take());
            self.subscriber.slot_update(&self.slots[index], index);
        }
        items
    }

    /// Overwrite a slot from container logic (e.g. a furnace producing
    /// output). Subscribers are notified.
    pub fn set_slot(&mut self, index: usize, stack: SlotStack) -> InventoryResult<()> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(InventoryError::SlotOutOfRange { index, len })?;
        *slot = stack;
        slot.normalize();
        self.subscriber.slot_update(&self.slots[index], index);
        Ok(())
    }

    /// Forward a progress bar change to the subscriber
    pub fn progress_update(&mut self, bar: ProgressBarId, value: ProgressValue) {
        self.subscriber.progress_update(bar, value);
    }

    /// Copy of all slots, in index order
    pub fn snapshot(&self) -> Vec<SlotStack> {
        self.slots.clone()
    }

    /// Copy the slots into `out`, up to the shorter of the two lengths
    pub fn write_snapshot(&self, out: &mut [SlotStack]) {
        for (dest, src) in out.iter_mut().zip(&self.slots) {
            *dest = *src;
        }
    }

    /// Load one slot from a persisted record.
    ///
    /// On failure no slot is modified. Loading does not notify the
    /// subscriber.
    pub fn read_slot_record(&mut self, record: &Value, index: usize) -> InventoryResult<()> {
        let len = self.slots.len();
        if index >= len {
            return Err(InventoryError::SlotOutOfRange { index, len });
        }
        let stack = decode_slot_record(record)
            .map_err(|source| InventoryError::Decode { index, source })?;
        self.slots[index] = stack;
        Ok(())
    }

    /// Iterate over the slots in index order
    pub fn iter(&self) -> impl Iterator<Item = &SlotStack> {
        self.slots.iter()
    }
}

use crate::item::{ItemData, ItemId};
use serde::{Serialize, Deserialize};

/// Maximum items in a single stack
pub const MAX_STACK_SIZE: u32 = 64;

/// The contents of one inventory slot (or of a player's cursor).
///
/// A stack with `count == 0` is empty; its `item_id` and `data` carry no
/// meaning and are ignored by equality and merging.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SlotStack {
    pub item_id: ItemId,
    pub count: u32,
    pub data: ItemData,
}

impl PartialEq for SlotStack {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() && other.is_empty() {
            return true;
        }
        self.item_id == other.item_id && self.count == other.count && self.data == other.data
    }
}

impl Eq for SlotStack {}

impl SlotStack {
    /// Create a new item stack
    pub fn new(item_id: ItemId, count: u32, data: ItemData) -> Self {
        Self {
            item_id,
            count: count.min(MAX_STACK_SIZE),
            data,
        }
    }

    /// An empty slot
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a single item
    pub fn single(item_id: ItemId, data: ItemData) -> Self {
        Self::new(item_id, 1, data)
    }

    /// Check if stack is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if stack is full
    pub fn is_full(&self) -> bool {
        self.count >= MAX_STACK_SIZE
    }

    /// Units that can still be added before the stack is full
    pub fn space(&self) -> u32 {
        MAX_STACK_SIZE.saturating_sub(self.count)
    }

    /// Both stacks hold items of the same type and data
    pub fn is_mergeable_with(&self, other: &SlotStack) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.item_id == other.item_id
            && self.data == other.data
    }

    /// Forget the identity of an empty stack
    pub fn normalize(&mut self) {
        if self.count == 0 {
            self.item_id = ItemId::AIR;
            self.data = 0;
        }
    }

    /// Remove the whole stack, leaving this one empty
    pub fn take(&mut self) -> SlotStack {
        std::mem::take(self)
    }

    /// Exchange the complete contents of two stacks
    pub fn swap(&mut self, other: &mut SlotStack) {
        std::mem::swap(self, other);
    }

    /// Split this stack in half into an empty `dest`.
    ///
    /// This stack keeps the larger half; a single item moves entirely.
    /// Returns false if there was nothing to split.
    pub fn split_into(&mut self, dest: &mut SlotStack) -> bool {
        if self.is_empty() {
            return false;
        }

        let taken = if self.count == 1 { 1 } else { self.count / 2 };
        *dest = SlotStack {
            item_id: self.item_id,
            count: taken,
            data: self.data,
        };
        self.count -= taken;
        self.normalize();
        true
    }

    /// Move as many items from `src` into this stack as will fit.
    ///
    /// An empty stack adopts the identity of `src`. Returns true if at
    /// least one item moved.
    pub fn add(&mut self, src: &mut SlotStack) -> bool {
        if src.is_empty() {
            return false;
        }
        if self.is_empty() {
            self.item_id = src.item_id;
            self.data = src.data;
            self.count = 0;
        } else if !self.is_mergeable_with(src) {
            return false;
        }

        let moved = src.count.min(self.space());
        if moved == 0 {
            return false;
        }
        self.count += moved;
        src.count -= moved;
        src.normalize();
        true
    }

    /// Move exactly one item from `src` into this stack
    pub fn add_one(&mut self, src: &mut SlotStack) -> bool {
        if src.is_empty() || self.is_full() {
            return false;
        }
        if self.is_empty() {
            self.item_id = src.item_id;
            self.data = src.data;
        } else if !self.is_mergeable_with(src) {
            return false;
        }

        self.count += 1;
        src.count -= 1;
        src.normalize();
        true
    }

    /// Move all of `src` into this stack, or nothing at all
    pub fn add_whole(&mut self, src: &mut SlotStack) -> bool {
        if src.is_empty() {
            return false;
        }
        if !self.is_empty() && !self.is_mergeable_with(src) {
            return false;
        }
        if src.count > self.space() {
            return false;
        }
        self.add(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(id: u16, count: u32, data: ItemData) -> SlotStack {
        SlotStack::new(ItemId(id), count, data)
    }

    #[test]
    fn empty_stacks_compare_equal_despite_stale_identity() {
        let a = SlotStack { item_id: ItemId(5), count: 0, data: 3 };
        let b = SlotStack { item_id: ItemId(9), count: 0, data: 0 };
        assert_eq!(a, b);
        assert_ne!(a, stack(5, 1, 3));
        assert_ne!(stack(5, 1, 3), stack(5, 1, 4));
    }

    #[test]
    fn split_keeps_larger_half() {
        let mut slot = stack(1, 7, 0);
        let mut cursor = SlotStack::empty();
        assert!(slot.split_into(&mut cursor));
        assert_eq!(slot.count, 4);
        assert_eq!(cursor.count, 3);
        assert_eq!(cursor.item_id, ItemId(1));
    }

    #[test]
    fn split_single_item_moves_it() {
        let mut slot = stack(1, 1, 2);
        let mut cursor = SlotStack::empty();
        assert!(slot.split_into(&mut cursor));
        assert!(slot.is_empty());
        assert_eq!(cursor, stack(1, 1, 2));
    }

    #[test]
    fn add_respects_capacity() {
        let mut slot = stack(4, 60, 0);
        let mut cursor = stack(4, 10, 0);
        assert!(slot.add(&mut cursor));
        assert_eq!(slot.count, MAX_STACK_SIZE);
        assert_eq!(cursor.count, 6);
        assert!(!slot.add(&mut cursor));
    }

    #[test]
    fn add_refuses_different_data() {
        let mut slot = stack(35, 3, 1);
        let mut cursor = stack(35, 3, 2);
        assert!(!slot.add(&mut cursor));
        assert_eq!(slot.count, 3);
        assert_eq!(cursor.count, 3);
    }

    #[test]
    fn add_into_empty_adopts_identity() {
        let mut slot = SlotStack { item_id: ItemId(99), count: 0, data: 9 };
        let mut item = stack(3, 12, 0);
        assert!(slot.add(&mut item));
        assert_eq!(slot, stack(3, 12, 0));
        assert!(item.is_empty());
        assert_eq!(item.item_id, ItemId::AIR);
    }

    #[test]
    fn add_whole_is_all_or_nothing() {
        let mut cursor = stack(1, 60, 0);
        let mut slot = stack(1, 5, 0);
        assert!(!cursor.add_whole(&mut slot));
        assert_eq!(cursor.count, 60);
        assert_eq!(slot.count, 5);

        let mut cursor = stack(1, 59, 0);
        assert!(cursor.add_whole(&mut slot));
        assert_eq!(cursor.count, 64);
        assert!(slot.is_empty());
    }

    #[test]
    fn add_one_moves_single_unit() {
        let mut cursor = stack(280, 2, 0);
        let mut slot = stack(280, 5, 0);
        assert!(cursor.add_one(&mut slot));
        assert_eq!(cursor.count, 3);
        assert_eq!(slot.count, 4);
    }
}

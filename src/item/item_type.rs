use serde::{Serialize, Deserialize};

/// Unique identifier for an item type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u16);

impl ItemId {
    pub const AIR: ItemId = ItemId(0);
    pub const STONE: ItemId = ItemId(1);
    pub const DIRT: ItemId = ItemId(3);
    pub const COBBLESTONE: ItemId = ItemId(4);
    pub const PLANKS: ItemId = ItemId(5);
    pub const CHEST: ItemId = ItemId(54);
    pub const WORKBENCH: ItemId = ItemId(58);
    pub const FURNACE: ItemId = ItemId(61);
    pub const COAL: ItemId = ItemId(263);
    pub const IRON_INGOT: ItemId = ItemId(265);
    pub const STICK: ItemId = ItemId(280);
    pub const WOOL: ItemId = ItemId(35);
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Auxiliary per-stack value (damage, colour, variant).
///
/// Two stacks only merge when both the item type and this value match.
pub type ItemData = u16;

use super::{Inventory, InventorySubscriber};
use crate::world::{ItemSpawner, VoxelPos};

/// Handles items leaving a container into the world
pub struct ItemDropHandler;

impl ItemDropHandler {
    /// Empty the inventory and spawn one item entity per removed stack at
    /// `location`, keeping type, count and data.
    ///
    /// Returns the number of stacks spawned.
    pub fn eject_all<S: InventorySubscriber>(
        inventory: &mut Inventory<S>,
        location: VoxelPos,
        spawner: &mut impl ItemSpawner,
    ) -> usize {
        let items = inventory.take_all_items();
        for stack in &items {
            spawner.spawn_item_at(location, stack.item_id, stack.count, stack.data);
        }
        if !items.is_empty() {
            log::info!("Ejected {} stacks from container at {}", items.len(), location);
        }
        items.len()
    }
}

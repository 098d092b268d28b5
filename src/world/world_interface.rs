use crate::item::{ItemData, ItemId};
use crate::network::{ClientId, ContainerHandle};
use crate::world::VoxelPos;

/// Visibility bookkeeping owned by the chunk/shard layer.
///
/// Containers register every viewer here so that a client which stops
/// observing the container's chunk is unsubscribed automatically. The
/// registry decides *when* visibility is lost; the container decides what
/// happens afterwards.
pub trait VisibilityRegistry {
    /// Ask to be told when `client` can no longer see `location`
    fn register_auto_unsubscribe(&mut self, client: ClientId, location: VoxelPos, handle: ContainerHandle);
    
    /// Cancel an earlier registration. Unknown entries are ignored.
    fn unregister_auto_unsubscribe(&mut self, client: ClientId, location: VoxelPos, handle: ContainerHandle);
}

/// Materialises loose items in the world
pub trait ItemSpawner {
    /// Spawn one item entity holding `count` units at the given block
    fn spawn_item_at(&mut self, location: VoxelPos, item_id: ItemId, count: u32, data: ItemData);
}

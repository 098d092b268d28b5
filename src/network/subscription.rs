use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Serialize, Deserialize};

use super::{ClientHandle, ClientId, ContainerMessage};
use crate::config::Config;
use crate::inventory::{
    Click, ContainerKind, ContainerTypeId, Inventory, InventorySubscriber, ItemDropHandler,
    ProgressBarId, ProgressValue, SlotStack, TxOutcome,
};
use crate::world::{ItemSpawner, VisibilityRegistry, VoxelPos};

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Identifies one container subscription towards the visibility registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContainerHandle(pub u64);

impl ContainerHandle {
    /// Allocate a process-unique handle
    pub fn next() -> Self {
        Self(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }
}

/// The clients currently viewing one container.
///
/// Attached to the container's inventory as its subscriber, so every slot
/// and progress change is broadcast to all of them.
#[derive(Debug)]
pub struct Viewers {
    location: VoxelPos,
    clients: HashMap<ClientId, ClientHandle>,
}

impl Viewers {
    fn new(location: VoxelPos) -> Self {
        Self {
            location,
            clients: HashMap::new(),
        }
    }
    
    pub fn len(&self) -> usize {
        self.clients.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
    
    pub fn contains(&self, client: ClientId) -> bool {
        self.clients.contains_key(&client)
    }
    
    fn broadcast(&self, message: &ContainerMessage) {
        for client in self.clients.values() {
            client.deliver(message.clone());
        }
    }
}

impl InventorySubscriber for Viewers {
    fn slot_update(&mut self, slot: &SlotStack, index: usize) {
        self.broadcast(&ContainerMessage::SlotChanged {
            location: self.location,
            slot: *slot,
            index,
        });
    }
    
    fn progress_update(&mut self, bar: ProgressBarId, value: ProgressValue) {
        self.broadcast(&ContainerMessage::ProgressChanged {
            location: self.location,
            bar,
            value,
        });
    }
}

/// Fan-out and lifecycle for one in-world container.
///
/// Owns the container's inventory together with the table of viewing
/// clients. All methods are expected to run on the single context that
/// owns the container's location; nothing here locks.
#[derive(Debug)]
pub struct ContainerSubscription {
    handle: ContainerHandle,
    location: VoxelPos,
    container_type: ContainerTypeId,
    eject_on_empty: bool,
    destroyed: bool,
    inventory: Inventory<Viewers>,
}

impl ContainerSubscription {
    pub fn new(
        location: VoxelPos,
        inventory: Inventory,
        eject_on_empty: bool,
        container_type: ContainerTypeId,
    ) -> Self {
        Self {
            handle: ContainerHandle::next(),
            location,
            container_type,
            eject_on_empty,
            destroyed: false,
            inventory: inventory.with_subscriber(Viewers::new(location)),
        }
    }
    
    /// Empty container of the given kind, with the ejection flag taken
    /// from configuration
    pub fn for_kind(kind: ContainerKind, location: VoxelPos, config: &Config) -> Self {
        Self::new(
            location,
            Inventory::new(kind.num_slots()),
            config.ejects_on_close(kind),
            kind.type_id(),
        )
    }
    
    pub fn handle(&self) -> ContainerHandle {
        self.handle
    }
    
    pub fn location(&self) -> VoxelPos {
        self.location
    }
    
    pub fn container_type(&self) -> ContainerTypeId {
        self.container_type
    }
    
    pub fn eject_on_empty(&self) -> bool {
        self.eject_on_empty
    }
    
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
    
    pub fn subscriber_count(&self) -> usize {
        self.inventory.subscriber().len()
    }
    
    pub fn is_subscribed(&self, client: ClientId) -> bool {
        self.inventory.subscriber().contains(client)
    }
    
    pub fn inventory(&self) -> &Inventory<Viewers> {
        &self.inventory
    }
    
    /// Mutable access for container logic such as smelting. Slot writes
    /// made through it are broadcast like any other change.
    pub fn inventory_mut(&mut self) -> &mut Inventory<Viewers> {
        &mut self.inventory
    }
    
    /// Apply a click from `client`.
    ///
    /// Whatever the outcome, the resulting cursor and the transaction
    /// result go back to `client` alone. Slot changes reach every viewer
    /// through the inventory's subscriber.
    pub fn click(&mut self, client: &ClientHandle, click: &mut Click) -> TxOutcome {
        let outcome = if self.destroyed {
            TxOutcome::Rejected
        } else {
            if click.shift_click {
                log::debug!("Shift-click from client {} treated as plain click", client.id());
            }
            self.inventory.click(click)
        };
        self.reply(client, click, outcome);
        outcome
    }
    
    /// Like [`ContainerSubscription::click`] for output-only slots
    pub fn take_only_click(&mut self, client: &ClientHandle, click: &mut Click) -> TxOutcome {
        let outcome = if self.destroyed {
            TxOutcome::Rejected
        } else {
            self.inventory.take_only_click(click)
        };
        self.reply(client, click, outcome);
        outcome
    }
    
    fn reply(&self, client: &ClientHandle, click: &Click, outcome: TxOutcome) {
        client.deliver(ContainerMessage::CursorCorrected {
            location: self.location,
            cursor: click.cursor,
        });
        client.deliver(ContainerMessage::TransactionResult {
            location: self.location,
            tx_id: click.tx_id,
            accepted: outcome.is_accepted(),
        });
    }
    
    /// Broadcast a progress bar change to every viewer
    pub fn progress_update(&mut self, bar: ProgressBarId, value: ProgressValue) {
        self.inventory.progress_update(bar, value);
    }
    
    /// Start showing the container to `client`.
    ///
    /// The client is registered for automatic removal when it loses sight
    /// of the location, then receives the full contents. Adding a client
    /// that is already subscribed replaces its handle and resends the
    /// contents. Ignored once the container is destroyed.
    pub fn add_subscriber(&mut self, client: ClientHandle, registry: &mut impl VisibilityRegistry) {
        if self.destroyed {
            log::debug!("Ignoring subscribe of client {} to destroyed container at {}", client.id(), self.location);
            return;
        }
        
        let id = client.id();
        registry.register_auto_unsubscribe(id, self.location, self.handle);
        client.deliver(ContainerMessage::Subscribed {
            location: self.location,
            container_type: self.container_type,
            slots: self.inventory.snapshot(),
        });
        self.inventory.subscriber_mut().clients.insert(id, client);
        log::debug!("Client {} subscribed to container at {}", id, self.location);
    }
    
    /// Stop showing the container to `client`.
    ///
    /// When the last viewer leaves a container flagged `eject_on_empty`,
    /// its contents are dropped into the world at the container location.
    /// Unknown clients are ignored.
    pub fn remove_subscriber(
        &mut self,
        client: ClientId,
        registry: &mut impl VisibilityRegistry,
        spawner: &mut impl ItemSpawner,
    ) {
        if self.inventory.subscriber_mut().clients.remove(&client).is_none() {
            return;
        }
        registry.unregister_auto_unsubscribe(client, self.location, self.handle);
        log::debug!("Client {} unsubscribed from container at {}", client, self.location);
        
        if self.eject_on_empty && self.inventory.subscriber().is_empty() {
            ItemDropHandler::eject_all(&mut self.inventory, self.location, spawner);
        }
    }
    
    /// Callback for the visibility registry when `client` can no longer
    /// see the container. Same effect as [`ContainerSubscription::remove_subscriber`].
    pub fn visibility_lost(
        &mut self,
        client: ClientId,
        registry: &mut impl VisibilityRegistry,
        spawner: &mut impl ItemSpawner,
    ) {
        self.remove_subscriber(client, registry, spawner);
    }
    
    /// The container block was removed from the world.
    ///
    /// Every viewer is told the container is gone and unregistered. Items
    /// are left for the block's own destruction logic. Terminal.
    pub fn destroyed(&mut self, registry: &mut impl VisibilityRegistry) {
        let location = self.location;
        let handle = self.handle;
        let viewers = self.inventory.subscriber_mut();
        for (id, client) in viewers.clients.drain() {
            client.deliver(ContainerMessage::Unsubscribed { location });
            registry.unregister_auto_unsubscribe(id, location, handle);
        }
        self.destroyed = true;
        log::debug!("Container at {} destroyed", location);
    }
}

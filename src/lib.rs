//! Server-side container inventories.
//!
//! [`inventory::Inventory`] holds a container's slots and applies client
//! clicks under an optimistic-concurrency check. [`network::ContainerSubscription`]
//! owns one such inventory, fans its changes out to every viewing client
//! and handles viewers leaving, including dropping a crafting grid's
//! contents into the world when its last viewer is gone.

pub mod config;
pub mod inventory;
pub mod item;
pub mod logging;
pub mod network;
pub mod persistence;
pub mod world;

pub use config::{Config, ConfigError};
pub use inventory::{
    Click, ContainerKind, Inventory, InventoryError, InventorySubscriber, SlotStack, TxOutcome,
    MAX_STACK_SIZE,
};
pub use item::{ItemData, ItemId};
pub use network::{ClientHandle, ClientId, ContainerHandle, ContainerMessage, ContainerSubscription, InterestManager};
pub use world::{ChunkPos, ItemSpawner, VisibilityRegistry, VoxelPos};

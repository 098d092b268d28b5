pub mod click;
pub mod drop_handler;
pub mod error;
pub mod item;
pub mod kind;
pub mod store;
pub mod subscriber;

pub use click::{Click, ClickAction, SlotId, TxId, TxOutcome};
pub use drop_handler::ItemDropHandler;
pub use error::{InventoryError, InventoryResult};
pub use item::{SlotStack, MAX_STACK_SIZE};
pub use kind::{ContainerKind, ContainerTypeId, BURN_TIME, SMELT_PROGRESS};
pub use store::Inventory;
pub use subscriber::{InventorySubscriber, NoSubscriber, ProgressBarId, ProgressValue};

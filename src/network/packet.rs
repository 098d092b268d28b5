use serde::{Serialize, Deserialize};

use crate::inventory::{ContainerTypeId, ProgressBarId, ProgressValue, SlotStack, TxId};
use crate::world::VoxelPos;

/// Container messages sent from the server to a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerMessage {
    /// The client opened a container; full contents follow
    Subscribed {
        location: VoxelPos,
        container_type: ContainerTypeId,
        slots: Vec<SlotStack>,
    },
    /// A slot changed its contents
    SlotChanged {
        location: VoxelPos,
        slot: SlotStack,
        index: usize,
    },
    /// A progress bar changed (furnace smelting and burn time)
    ProgressChanged {
        location: VoxelPos,
        bar: ProgressBarId,
        value: ProgressValue,
    },
    /// The container is gone; close the window
    Unsubscribed {
        location: VoxelPos,
    },
    /// Authoritative cursor contents after a click
    CursorCorrected {
        location: VoxelPos,
        cursor: SlotStack,
    },
    /// Outcome of the client's click transaction
    TransactionResult {
        location: VoxelPos,
        tx_id: TxId,
        accepted: bool,
    },
}

impl ContainerMessage {
    /// Location of the container the message refers to
    pub fn location(&self) -> VoxelPos {
        match self {
            ContainerMessage::Subscribed { location, .. }
            | ContainerMessage::SlotChanged { location, .. }
            | ContainerMessage::ProgressChanged { location, .. }
            | ContainerMessage::Unsubscribed { location }
            | ContainerMessage::CursorCorrected { location, .. }
            | ContainerMessage::TransactionResult { location, .. } => *location,
        }
    }
    
    /// Serialize message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }
    
    /// Deserialize message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

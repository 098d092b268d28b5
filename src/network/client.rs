use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::{Serialize, Deserialize};

use super::error::{NetworkResult, SendError};
use super::ContainerMessage;

/// Identity of a connected client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClientId(pub u32);

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sending half of a client's outbound message queue.
///
/// Each client has its own bounded queue, so delivery is FIFO per client
/// and independent across clients. Sends never block.
#[derive(Debug, Clone)]
pub struct ClientHandle {
    id: ClientId,
    tx: Sender<ContainerMessage>,
}

impl ClientHandle {
    pub fn new(id: ClientId, tx: Sender<ContainerMessage>) -> Self {
        Self { id, tx }
    }
    
    /// Create a handle with a fresh bounded queue, returning the receiving
    /// half for the session's writer
    pub fn channel(id: ClientId, capacity: usize) -> (Self, Receiver<ContainerMessage>) {
        let (tx, rx) = bounded(capacity);
        (Self::new(id, tx), rx)
    }
    
    pub fn id(&self) -> ClientId {
        self.id
    }
    
    /// Queue a message without blocking
    pub fn send(&self, message: ContainerMessage) -> NetworkResult<()> {
        self.tx.try_send(message).map_err(|err| match err {
            TrySendError::Full(_) => SendError::Full(self.id),
            TrySendError::Disconnected(_) => SendError::Disconnected(self.id),
        })
    }
    
    /// Queue a message, logging and dropping it if the client can't take it
    pub fn deliver(&self, message: ContainerMessage) {
        if let Err(err) = self.send(message) {
            log::warn!("Dropped container message: {}", err);
        }
    }
}

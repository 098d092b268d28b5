//! Network-specific error handling

use thiserror::Error;

use super::ClientId;

/// Failure to queue a message for a client.
///
/// Container fan-out logs these and carries on; a slow or vanished client
/// never stalls the shard that owns the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("outbound queue for client {0} is full")]
    Full(ClientId),

    #[error("client {0} is disconnected")]
    Disconnected(ClientId),
}

/// Type alias for network-specific results
pub type NetworkResult<T> = Result<T, SendError>;

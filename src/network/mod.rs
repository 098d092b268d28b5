//! Client-facing side of containers: outbound messages, per-client queues,
//! subscription fan-out and visibility tracking.

pub mod client;
pub mod error;
pub mod interest;
pub mod packet;
pub mod subscription;

pub use client::{ClientHandle, ClientId};
pub use error::{NetworkResult, SendError};
pub use interest::InterestManager;
pub use packet::ContainerMessage;
pub use subscription::{ContainerHandle, ContainerSubscription, Viewers};

use std::collections::{HashMap, HashSet};

use super::{ClientId, ContainerHandle};
use crate::world::{ChunkPos, VisibilityRegistry, VoxelPos, CHUNK_SIZE};

/// Containers a client is watching, grouped by the chunk they sit in
#[derive(Debug, Default)]
struct ClientInterest {
    chunks: HashMap<ChunkPos, HashSet<(VoxelPos, ContainerHandle)>>,
}

impl ClientInterest {
    fn len(&self) -> usize {
        self.chunks.values().map(HashSet::len).sum()
    }
}

/// Chunk-granular visibility bookkeeping for open containers.
///
/// Containers register the clients viewing them here. When the session
/// layer reports that a client no longer sees a chunk, the manager hands
/// back every container in that chunk the client was watching so the
/// owning shard can call `ContainerSubscription::visibility_lost` on each.
#[derive(Debug)]
pub struct InterestManager {
    chunk_size: u32,
    clients: HashMap<ClientId, ClientInterest>,
}

impl Default for InterestManager {
    fn default() -> Self {
        Self::new(CHUNK_SIZE)
    }
}

impl InterestManager {
    pub fn new(chunk_size: u32) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            clients: HashMap::new(),
        }
    }
    
    /// `client` lost sight of `chunk`. Returns the containers in that
    /// chunk it was subscribed to and forgets them.
    pub fn client_left_chunk(&mut self, client: ClientId, chunk: ChunkPos) -> Vec<(VoxelPos, ContainerHandle)> {
        let Some(interest) = self.clients.get_mut(&client) else {
            return Vec::new();
        };
        let lost: Vec<_> = interest
            .chunks
            .remove(&chunk)
            .map(|entries| entries.into_iter().collect())
            .unwrap_or_default();
        if interest.chunks.is_empty() {
            self.clients.remove(&client);
        }
        if !lost.is_empty() {
            log::debug!("Client {} left chunk {:?}, losing {} containers", client, chunk, lost.len());
        }
        lost
    }
    
    /// Forget everything about a client, returning all containers it was
    /// still watching
    pub fn client_disconnected(&mut self, client: ClientId) -> Vec<(VoxelPos, ContainerHandle)> {
        self.clients
            .remove(&client)
            .map(|interest| interest.chunks.into_values().flatten().collect())
            .unwrap_or_default()
    }
    
    pub fn is_registered(&self, client: ClientId, location: VoxelPos, handle: ContainerHandle) -> bool {
        let chunk = location.to_chunk_pos(self.chunk_size);
        self.clients
            .get(&client)
            .and_then(|interest| interest.chunks.get(&chunk))
            .map_or(false, |entries| entries.contains(&(location, handle)))
    }
    
    /// Total registrations across all clients
    pub fn registration_count(&self) -> usize {
        self.clients.values().map(ClientInterest::len).sum()
    }
}

impl VisibilityRegistry for InterestManager {
    fn register_auto_unsubscribe(&mut self, client: ClientId, location: VoxelPos, handle: ContainerHandle) {
        let chunk = location.to_chunk_pos(self.chunk_size);
        self.clients
            .entry(client)
            .or_default()
            .chunks
            .entry(chunk)
            .or_insert_with(HashSet::new)
            .insert((location, handle));
    }
    
    fn unregister_auto_unsubscribe(&mut self, client: ClientId, location: VoxelPos, handle: ContainerHandle) {
        let chunk = location.to_chunk_pos(self.chunk_size);
        let Some(interest) = self.clients.get_mut(&client) else {
            return;
        };
        if let Some(entries) = interest.chunks.get_mut(&chunk) {
            entries.remove(&(location, handle));
            if entries.is_empty() {
                interest.chunks.remove(&chunk);
            }
        }
        if interest.chunks.is_empty() {
            self.clients.remove(&client);
        }
    }
}

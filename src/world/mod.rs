pub mod position;
pub mod world_interface;

pub use position::{ChunkPos, VoxelPos, CHUNK_SIZE};
pub use world_interface::{ItemSpawner, VisibilityRegistry};

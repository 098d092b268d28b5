pub mod item_type;

pub use item_type::{ItemData, ItemId};

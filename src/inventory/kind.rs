use serde::{Serialize, Deserialize};

use super::subscriber::ProgressBarId;

/// Window type id sent to clients when they open a container
pub type ContainerTypeId = i8;

/// Furnace progress bar: smelting progress of the current item
pub const SMELT_PROGRESS: ProgressBarId = 0;
/// Furnace progress bar: remaining burn time of the current fuel
pub const BURN_TIME: ProgressBarId = 1;

/// The kinds of block containers the world knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerKind {
    Chest,
    Workbench,
    Furnace,
    Dispenser,
}

impl ContainerKind {
    pub fn type_id(self) -> ContainerTypeId {
        match self {
            ContainerKind::Chest => 0,
            ContainerKind::Workbench => 1,
            ContainerKind::Furnace => 2,
            ContainerKind::Dispenser => 3,
        }
    }
    
    pub fn num_slots(self) -> usize {
        match self {
            ContainerKind::Chest => 27,
            // 3x3 crafting grid plus the output slot
            ContainerKind::Workbench => 10,
            // input, fuel, output
            ContainerKind::Furnace => 3,
            ContainerKind::Dispenser => 9,
        }
    }
    
    /// Whether items are dropped into the world once the last viewer
    /// closes the window. Only containers without their own storage do.
    pub fn ejects_on_close(self) -> bool {
        matches!(self, ContainerKind::Workbench)
    }
}

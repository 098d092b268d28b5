use super::SlotStack;

/// Identifier of a progress bar inside a container window
pub type ProgressBarId = i16;

/// Current value of a progress bar
pub type ProgressValue = i16;

/// Observer of an inventory's state changes.
///
/// An inventory notifies exactly one subscriber; both methods default to
/// doing nothing so observers only implement what they forward.
pub trait InventorySubscriber {
    /// A slot changed its contents
    fn slot_update(&mut self, _slot: &SlotStack, _index: usize) {}
    
    /// A progress bar inside the inventory changed
    fn progress_update(&mut self, _bar: ProgressBarId, _value: ProgressValue) {}
}

/// Placeholder for inventories nobody is watching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoSubscriber;

impl InventorySubscriber for NoSubscriber {}

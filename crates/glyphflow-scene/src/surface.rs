//! Display capability used by animated elements.

use glyphflow_core::Cell;

/// Handle to one text slot on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

impl SlotId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// Something that can hold text at positions on a character grid.
pub trait Surface {
    /// Create a new, empty slot anchored at `origin`.
    fn attach(&mut self, origin: Cell) -> SlotId;

    /// Replace the text shown in `slot`. Multi-line text is laid out one row
    /// per line starting at the slot origin.
    fn write(&mut self, slot: SlotId, text: &str);
}

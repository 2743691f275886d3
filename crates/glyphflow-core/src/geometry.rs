//! Character-grid geometry.

use std::num::NonZeroU16;

use serde::Deserialize;

/// Logical position of an element, in grid units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct GridPos {
    pub x: u16,
    pub y: u16,
}

impl GridPos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Position on the display surface, in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
}

/// Fixed scale from grid units to display cells.
///
/// Every element goes through the same scale so they all line up on one
/// grid. The default maps one grid unit to one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridScale {
    pub cell_width: NonZeroU16,
    pub cell_height: NonZeroU16,
}

impl Default for GridScale {
    fn default() -> Self {
        Self {
            cell_width: NonZeroU16::MIN,
            cell_height: NonZeroU16::MIN,
        }
    }
}

impl GridScale {
    /// Translate a grid position to its display cell, saturating at the edge.
    pub fn to_cell(self, pos: GridPos) -> Cell {
        Cell {
            x: pos.x.saturating_mul(self.cell_width.get()),
            y: pos.y.saturating_mul(self.cell_height.get()),
        }
    }
}

//! Sweep directions and their glyphs.

use serde::Deserialize;

/// Axis a sweep travels along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// One line of text, marker moving across columns.
    Horizontal,
    /// One glyph per line, marker moving across rows.
    Vertical,
}

/// Direction an arrow marker travels during a sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Arrow head drawn at the marker position.
    pub fn marker(self) -> char {
        match self {
            Direction::Right => '▶',
            Direction::Left => '◀',
            Direction::Down => '▼',
            Direction::Up => '▲',
        }
    }

    /// Glyph filling the rest of the track.
    pub fn track(self) -> char {
        match self.orientation() {
            Orientation::Horizontal => '─',
            Orientation::Vertical => '│',
        }
    }

    pub fn orientation(self) -> Orientation {
        match self {
            Direction::Right | Direction::Left => Orientation::Horizontal,
            Direction::Down | Direction::Up => Orientation::Vertical,
        }
    }

    /// True when the marker travels against reading order (leftward or upward).
    pub fn is_reversed(self) -> bool {
        matches!(self, Direction::Left | Direction::Up)
    }
}

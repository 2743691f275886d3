//! Frame sequences and the bar/sweep builders.

use glyphflow_core::{Direction, Orientation};

use crate::chars::{EMPTY, FILLED};

/// Rejected frame input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("sequence length must not be negative, got {0}")]
    NegativeLength(i64),
    #[error("sequence length must be at most {max}, got {length}")]
    TooLong { length: i64, max: usize },
    #[error("a frame sequence needs at least one frame")]
    Empty,
}

/// Ordered, cyclic list of frames. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<String>,
}

impl FrameSequence {
    /// Wrap a list of frames, rejecting an empty list.
    pub fn new(frames: Vec<String>) -> Result<Self, FrameError> {
        if frames.is_empty() {
            return Err(FrameError::Empty);
        }
        Ok(Self { frames })
    }

    /// One-frame sequence, used for static text.
    pub fn single(text: impl Into<String>) -> Self {
        Self {
            frames: vec![text.into()],
        }
    }

    /// Number of frames in one cycle (at least 1).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.frames.get(index).map(String::as_str)
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Same frames, played back to front.
    pub fn reversed(&self) -> Self {
        Self {
            frames: self.frames.iter().rev().cloned().collect(),
        }
    }
}

/// Longest bar or sweep track, in cells.
pub const MAX_LENGTH: usize = 1024;

fn checked_length(length: i64) -> Result<usize, FrameError> {
    let cells = usize::try_from(length).map_err(|_| FrameError::NegativeLength(length))?;
    if cells > MAX_LENGTH {
        return Err(FrameError::TooLong {
            length,
            max: MAX_LENGTH,
        });
    }
    Ok(cells)
}

/// Build a loading bar that fills (`growing`) or drains over one cycle.
///
/// Produces `length + 1` frames. Frame `i` of a growing bar has `i` filled
/// cells followed by `length - i` empty ones; a draining bar starts full
/// and has `length - i` filled cells followed by `i` empty ones.
pub fn build_fill_sequence(growing: bool, length: i64) -> Result<FrameSequence, FrameError> {
    let length = checked_length(length)?;

    let frames = (0..=length)
        .map(|i| {
            let filled = if growing { i } else { length - i };
            let mut frame = String::with_capacity(length * FILLED.len_utf8());
            frame.extend(std::iter::repeat_n(FILLED, filled));
            frame.extend(std::iter::repeat_n(EMPTY, length - filled));
            frame
        })
        .collect();

    FrameSequence::new(frames)
}

/// Build an arrow marker sweeping along a track in `direction`.
///
/// Produces `length + 1` frames, each `length` track glyphs plus one marker.
/// For [`Direction::Right`] frame `i` has `i` track glyphs before the marker.
/// Leftward and upward sweeps mirror that, and vertical sweeps put one glyph
/// on each line.
pub fn build_sweep_sequence(direction: Direction, length: i64) -> Result<FrameSequence, FrameError> {
    let length = checked_length(length)?;
    let track = direction.track();
    let marker = direction.marker();
    let separator = match direction.orientation() {
        Orientation::Horizontal => "",
        Orientation::Vertical => "\n",
    };

    let frames = (0..=length)
        .map(|i| {
            let before = if direction.is_reversed() { length - i } else { i };
            let glyphs: Vec<String> = std::iter::repeat_n(track, before)
                .chain(std::iter::once(marker))
                .chain(std::iter::repeat_n(track, length - before))
                .map(String::from)
                .collect();
            glyphs.join(separator)
        })
        .collect();

    FrameSequence::new(frames)
}

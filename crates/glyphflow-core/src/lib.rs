//! Core types shared by the glyphflow crates.
//!
//! Everything here is plain data: grid geometry, element speeds, sweep
//! directions and display options. Frame generation lives in
//! `glyphflow-frames`, playback in `glyphflow-scene`.

mod direction;
mod geometry;
mod speed;
mod theme;

pub use direction::{Direction, Orientation};
pub use geometry::{Cell, GridPos, GridScale};
pub use speed::{Speed, SpeedError};
pub use theme::ColorTheme;

use serde::Deserialize;

/// What an animated element shows between attach and its first advance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InitialPaint {
    /// Write frame 0 as soon as the element is attached.
    #[default]
    FirstFrame,
    /// Leave the slot empty until the first tick the speed divides.
    Blank,
}

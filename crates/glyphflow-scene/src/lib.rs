//! Playback for glyphflow scenes.
//!
//! An [`AnimatedElement`] owns one slot on a [`Surface`] and cycles through
//! its frames as the [`Driver`] ticks. Construction is pure data; the
//! display is attached in a separate step so elements can be exercised
//! against any surface, including the ratatui-backed [`Canvas`].

mod canvas;
mod driver;
mod element;
mod surface;

pub use canvas::Canvas;
pub use driver::Driver;
pub use element::{AnimatedElement, SceneError};
pub use surface::{SlotId, Surface};

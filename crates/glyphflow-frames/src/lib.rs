//! Frame sequence generators for glyphflow.
//!
//! A frame is one text snapshot of an element. A [`FrameSequence`] is the
//! ordered, cyclic list of frames for one animation cycle. The builders
//! here are pure: same input, same frames.

mod art;
mod chars;
mod sequence;

pub use art::{DEMO_DIAGRAM, DEMO_ORIGIN};
pub use chars::{EMPTY, FILLED};
pub use sequence::{
    FrameError, FrameSequence, MAX_LENGTH, build_fill_sequence, build_sweep_sequence,
};

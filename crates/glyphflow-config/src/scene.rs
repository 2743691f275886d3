//! Element descriptions as they appear in the config file.

use std::num::NonZeroU64;

use glyphflow_core::{Direction, GridPos, Speed};
use glyphflow_frames::{
    DEMO_DIAGRAM, DEMO_ORIGIN, FrameSequence, build_fill_sequence, build_sweep_sequence,
};
use glyphflow_scene::{AnimatedElement, SceneError};
use serde::Deserialize;

/// How an element's frames are produced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub enum FrameSpec {
    /// A single frame of literal text.
    Text { text: String },
    /// An explicit list of frames.
    Frames { frames: Vec<String> },
    /// A loading bar that fills or drains.
    Fill { growing: bool, length: i64 },
    /// An arrow sweeping along a track.
    Sweep {
        #[serde(default)]
        direction: Direction,
        length: i64,
    },
}

impl FrameSpec {
    pub fn build(&self) -> Result<FrameSequence, SceneError> {
        let frames = match self {
            FrameSpec::Text { text } => FrameSequence::single(text.as_str()),
            FrameSpec::Frames { frames } => FrameSequence::new(frames.clone())?,
            FrameSpec::Fill { growing, length } => build_fill_sequence(*growing, *length)?,
            FrameSpec::Sweep { direction, length } => build_sweep_sequence(*direction, *length)?,
        };
        Ok(frames)
    }
}

/// One `[[elements]]` entry. Keys that are neither element fields nor
/// fields of the chosen `kind` are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ElementSpec {
    pub x: u16,
    pub y: u16,
    /// Tick interval, or `"static"`. Defaults to static.
    #[serde(default = "static_speed")]
    pub speed: Speed,
    #[serde(flatten)]
    pub frames: FrameSpec,
}

fn static_speed() -> Speed {
    Speed::Static
}

impl ElementSpec {
    pub fn build(&self) -> Result<AnimatedElement, SceneError> {
        let frames = self.frames.build()?;
        Ok(AnimatedElement::new(
            GridPos::new(self.x, self.y),
            frames,
            self.speed,
        ))
    }
}

const SWEEP_INTERVAL: NonZeroU64 = NonZeroU64::new(2).unwrap();
const BAR_INTERVAL: NonZeroU64 = NonZeroU64::new(20).unwrap();

/// The built-in scene: the demo diagram with a sweeping arrow and a
/// draining bar on top.
pub fn demo_elements() -> Vec<ElementSpec> {
    vec![
        ElementSpec {
            x: DEMO_ORIGIN.x,
            y: DEMO_ORIGIN.y,
            speed: Speed::Static,
            frames: FrameSpec::Text {
                text: DEMO_DIAGRAM.to_string(),
            },
        },
        ElementSpec {
            x: 17,
            y: 16,
            speed: Speed::Every(SWEEP_INTERVAL),
            frames: FrameSpec::Sweep {
                direction: Direction::Right,
                length: 15,
            },
        },
        ElementSpec {
            x: 4,
            y: 21,
            speed: Speed::Every(BAR_INTERVAL),
            frames: FrameSpec::Fill {
                growing: false,
                length: 10,
            },
        },
    ]
}

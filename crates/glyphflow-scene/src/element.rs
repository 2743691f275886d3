//! A single animated slot.

use glyphflow_core::{GridPos, GridScale, InitialPaint, Speed, SpeedError};
use glyphflow_frames::{FrameError, FrameSequence};
use tracing::{debug, warn};

use crate::surface::{SlotId, Surface};

/// Rejected element input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error(transparent)]
    InvalidSpeed(#[from] SpeedError),
    #[error(transparent)]
    Frames(#[from] FrameError),
}

/// One visual slot cycling through a frame sequence.
#[derive(Debug, Clone)]
pub struct AnimatedElement {
    /// Grid position of the slot's top-left corner.
    position: GridPos,
    frames: FrameSequence,
    speed: Speed,
    /// Index into `frames`, always in range.
    current: usize,
    /// Display slot, set once by [`AnimatedElement::attach`].
    slot: Option<SlotId>,
}

impl AnimatedElement {
    /// Create an element showing frame 0. Nothing is displayed until
    /// [`attach`](Self::attach) is called.
    pub fn new(position: GridPos, frames: FrameSequence, speed: Speed) -> Self {
        Self {
            position,
            frames,
            speed,
            current: 0,
            slot: None,
        }
    }

    /// Create an element from a raw tick interval, rejecting zero and
    /// negative intervals.
    pub fn with_interval(
        position: GridPos,
        frames: FrameSequence,
        ticks: i64,
    ) -> Result<Self, SceneError> {
        let speed = Speed::try_from(ticks)?;
        Ok(Self::new(position, frames, speed))
    }

    /// Create a static element that always shows `text`.
    pub fn fixed(position: GridPos, text: impl Into<String>) -> Self {
        Self::new(position, FrameSequence::single(text), Speed::Static)
    }

    pub fn frames(&self) -> &FrameSequence {
        &self.frames
    }

    /// Index of the frame currently shown.
    pub fn current_frame(&self) -> usize {
        self.current
    }

    /// Text of the frame currently shown.
    pub fn current_text(&self) -> &str {
        // `current` is kept in range, so the lookup cannot miss.
        self.frames.get(self.current).unwrap_or_default()
    }

    pub fn slot(&self) -> Option<SlotId> {
        self.slot
    }

    /// Claim a slot on `surface` at this element's position.
    ///
    /// The position goes through `scale` so every element shares one grid.
    /// With [`InitialPaint::FirstFrame`] the current frame is written right
    /// away; with [`InitialPaint::Blank`] the slot stays empty until the
    /// first advance. Static elements never advance, so they are always
    /// painted here. An element owns exactly one slot: attaching again
    /// returns the existing one.
    pub fn attach<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        scale: GridScale,
        initial: InitialPaint,
    ) -> SlotId {
        if let Some(slot) = self.slot {
            warn!(slot = slot.index(), "element already attached");
            return slot;
        }

        let origin = scale.to_cell(self.position);
        let slot = surface.attach(origin);
        self.slot = Some(slot);
        debug!(
            slot = slot.index(),
            x = origin.x,
            y = origin.y,
            frames = self.frames.len(),
            speed = ?self.speed,
            "attached element"
        );

        if initial == InitialPaint::FirstFrame || self.speed.is_static() {
            surface.write(slot, self.current_text());
        }
        slot
    }

    /// Advance one frame if `speed` divides `tick`, and redraw the slot.
    ///
    /// Ticks the speed does not divide leave the element untouched.
    pub fn update<S: Surface + ?Sized>(&mut self, tick: u64, surface: &mut S) {
        if !self.speed.is_due(tick) {
            return;
        }

        self.current = (self.current + 1) % self.frames.len();
        if let Some(slot) = self.slot {
            surface.write(slot, self.current_text());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphflow_core::{Cell, Direction};
    use glyphflow_frames::{build_fill_sequence, build_sweep_sequence};

    /// Surface that records every write.
    #[derive(Debug, Default)]
    struct Recorder {
        origins: Vec<Cell>,
        texts: Vec<String>,
        writes: Vec<(usize, String)>,
    }

    impl Surface for Recorder {
        fn attach(&mut self, origin: Cell) -> SlotId {
            self.origins.push(origin);
            self.texts.push(String::new());
            SlotId::new(self.origins.len() - 1)
        }

        fn write(&mut self, slot: SlotId, text: &str) {
            self.texts[slot.index()] = text.to_string();
            self.writes.push((slot.index(), text.to_string()));
        }
    }

    fn run(element: &mut AnimatedElement, surface: &mut Recorder, ticks: u64) {
        for tick in 0..ticks {
            element.update(tick, surface);
        }
    }

    fn bar_element(speed: u64) -> AnimatedElement {
        let frames = build_fill_sequence(false, 10).unwrap();
        AnimatedElement::new(GridPos::new(4, 21), frames, Speed::every(speed).unwrap())
    }

    #[test]
    fn test_zero_speed_rejected() {
        let frames = build_fill_sequence(true, 3).unwrap();
        let err = AnimatedElement::with_interval(GridPos::default(), frames, 0).unwrap_err();
        assert_eq!(err, SceneError::InvalidSpeed(SpeedError::NonPositive(0)));
    }

    #[test]
    fn test_draining_bar_scenario() {
        let mut surface = Recorder::default();
        let mut element = bar_element(20);
        element.attach(&mut surface, GridScale::default(), InitialPaint::FirstFrame);

        run(&mut element, &mut surface, 20);
        assert_eq!(element.current_frame(), 1);

        let mut element = bar_element(20);
        run(&mut element, &mut surface, 200);
        assert_eq!(element.current_frame(), 10);

        let mut element = bar_element(20);
        run(&mut element, &mut surface, 220);
        assert_eq!(element.current_frame(), 0);
    }

    #[test]
    fn test_sweep_scenario() {
        let mut surface = Recorder::default();
        let frames = build_sweep_sequence(Direction::Right, 15).unwrap();
        let mut element = AnimatedElement::with_interval(GridPos::new(17, 16), frames, 2).unwrap();
        element.attach(&mut surface, GridScale::default(), InitialPaint::FirstFrame);
        assert_eq!(element.current_frame(), 0);
        assert_eq!(surface.texts[0], "▶───────────────");

        run(&mut element, &mut surface, 2);
        assert_eq!(element.current_frame(), 1);
        assert_eq!(surface.texts[0], "─▶──────────────");

        for tick in 2..32 {
            element.update(tick, &mut surface);
        }
        assert_eq!(element.current_frame(), 0);
    }

    #[test]
    fn test_update_off_interval_is_noop() {
        let mut surface = Recorder::default();
        let mut element = bar_element(20);
        element.attach(&mut surface, GridScale::default(), InitialPaint::FirstFrame);
        element.update(0, &mut surface);
        let writes = surface.writes.len();
        let text = surface.texts[0].clone();

        for tick in [1, 7, 19, 21, 399] {
            element.update(tick, &mut surface);
            assert_eq!(element.current_frame(), 1);
            assert_eq!(surface.texts[0], text);
        }
        assert_eq!(surface.writes.len(), writes);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut surface = Recorder::default();
        for (length, speed) in [(0, 1), (3, 1), (4, 3), (10, 7)] {
            let frames = build_fill_sequence(true, length).unwrap();
            let n = frames.len() as u64;
            let mut element = AnimatedElement::new(
                GridPos::default(),
                frames,
                Speed::every(speed).unwrap(),
            );
            run(&mut element, &mut surface, n * speed);
            assert_eq!(element.current_frame(), 0);
        }
    }

    #[test]
    fn test_static_never_changes() {
        let mut surface = Recorder::default();
        let mut element = AnimatedElement::fixed(GridPos::new(3, 2), "┌──┐");
        element.attach(&mut surface, GridScale::default(), InitialPaint::FirstFrame);
        assert_eq!(surface.writes.len(), 1);

        for tick in [0, 1, 2, 1_000, u64::MAX] {
            element.update(tick, &mut surface);
        }
        assert_eq!(element.current_frame(), 0);
        assert_eq!(surface.writes.len(), 1);
        assert_eq!(surface.texts[0], "┌──┐");
    }

    #[test]
    fn test_blank_first_frame() {
        let mut surface = Recorder::default();
        let frames = build_sweep_sequence(Direction::Right, 3).unwrap();
        let mut element = AnimatedElement::new(GridPos::default(), frames, Speed::every(4).unwrap());
        element.attach(&mut surface, GridScale::default(), InitialPaint::Blank);
        assert!(surface.writes.is_empty());
        assert_eq!(surface.texts[0], "");

        element.update(0, &mut surface);
        assert_eq!(surface.texts[0], "─▶──");
    }

    #[test]
    fn test_blank_still_paints_static() {
        let mut surface = Recorder::default();
        let mut element = AnimatedElement::fixed(GridPos::default(), "diagram");
        element.attach(&mut surface, GridScale::default(), InitialPaint::Blank);
        assert_eq!(surface.texts[0], "diagram");
    }

    #[test]
    fn test_attach_uses_scale_once() {
        let mut surface = Recorder::default();
        let scale = GridScale {
            cell_width: std::num::NonZeroU16::new(2).unwrap(),
            cell_height: std::num::NonZeroU16::new(1).unwrap(),
        };
        let mut element = bar_element(20);
        let first = element.attach(&mut surface, scale, InitialPaint::FirstFrame);
        let second = element.attach(&mut surface, scale, InitialPaint::FirstFrame);
        assert_eq!(first, second);
        assert_eq!(surface.origins, [Cell { x: 8, y: 21 }]);
    }

    #[test]
    fn test_update_before_attach_writes_nothing() {
        let mut surface = Recorder::default();
        let mut element = bar_element(1);
        element.update(0, &mut surface);
        assert_eq!(element.current_frame(), 1);
        assert!(surface.writes.is_empty());

        element.attach(&mut surface, GridScale::default(), InitialPaint::FirstFrame);
        assert_eq!(surface.texts[0], element.current_text());
    }
}

//! Tick driver for a fixed set of elements.

use glyphflow_core::{GridScale, InitialPaint};
use tracing::{debug, trace};

use crate::element::AnimatedElement;
use crate::surface::Surface;

/// Owns the elements of a scene and the tick counter that drives them.
///
/// The element set is fixed at construction. The host calls
/// [`Driver::cycle`] once per rendering cycle; the tick starts at 0 and only
/// ever increases.
#[derive(Debug, Clone, Default)]
pub struct Driver {
    elements: Vec<AnimatedElement>,
    tick: u64,
}

impl Driver {
    pub fn new(elements: Vec<AnimatedElement>) -> Self {
        Self { elements, tick: 0 }
    }

    /// Attach every element to `surface`, in construction order.
    pub fn attach<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        scale: GridScale,
        initial: InitialPaint,
    ) {
        for element in &mut self.elements {
            element.attach(surface, scale, initial);
        }
        debug!(elements = self.elements.len(), ?initial, "scene attached");
    }

    /// Run one cycle: update every element with the current tick, then
    /// advance the tick.
    pub fn cycle<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        trace!(tick = self.tick, "cycle");
        for element in &mut self.elements {
            element.update(self.tick, surface);
        }
        self.tick += 1;
    }

    /// Run `cycles` cycles back to back.
    pub fn run_for<S: Surface + ?Sized>(&mut self, cycles: u64, surface: &mut S) {
        for _ in 0..cycles {
            self.cycle(surface);
        }
    }

    /// Tick the next cycle will use.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn elements(&self) -> &[AnimatedElement] {
        &self.elements
    }
}

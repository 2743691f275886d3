//! In-memory surface rendered through ratatui.

use glyphflow_core::Cell;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::surface::{SlotId, Surface};

#[derive(Debug, Clone)]
struct Slot {
    origin: Cell,
    text: String,
}

/// Surface that keeps every slot in attach order and draws them as a widget.
///
/// Slots are painted in the order they were attached, so later slots (the
/// moving glyphs) are layered over earlier ones (the diagram).
#[derive(Debug, Default)]
pub struct Canvas {
    slots: Vec<Slot>,
    style: Style,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style applied to every slot.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Current text of a slot, if it exists.
    pub fn text(&self, slot: SlotId) -> Option<&str> {
        self.slots.get(slot.index()).map(|s| s.text.as_str())
    }

    #[cfg(test)]
    fn origin(&self, slot: SlotId) -> Option<Cell> {
        self.slots.get(slot.index()).map(|s| s.origin)
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl Surface for Canvas {
    fn attach(&mut self, origin: Cell) -> SlotId {
        self.slots.push(Slot {
            origin,
            text: String::new(),
        });
        SlotId::new(self.slots.len() - 1)
    }

    fn write(&mut self, slot: SlotId, text: &str) {
        if let Some(slot) = self.slots.get_mut(slot.index()) {
            slot.text.clear();
            slot.text.push_str(text);
        }
    }
}

impl Widget for &Canvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for slot in &self.slots {
            let x = area.x.saturating_add(slot.origin.x);
            if x >= area.right() {
                continue;
            }
            let max_width = (area.right() - x) as usize;

            for (row, line) in slot.text.lines().enumerate() {
                let Ok(row) = u16::try_from(row) else {
                    break;
                };
                let y = area.y.saturating_add(slot.origin.y).saturating_add(row);
                if y >= area.bottom() {
                    break;
                }
                buf.set_stringn(x, y, line, max_width, self.style);
            }
        }
    }
}

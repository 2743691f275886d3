//! Foreground color themes for the diagram.

use ratatui::style::Color;
use serde::Deserialize;

/// Color applied to every slot on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Green,
    Cyan,
    White,
    Amber,
    Magenta,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Green => ColorTheme::Cyan,
            ColorTheme::Cyan => ColorTheme::White,
            ColorTheme::White => ColorTheme::Amber,
            ColorTheme::Amber => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Green,
        }
    }

    /// Convert theme to a ratatui color.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Green => Color::Green,
            ColorTheme::Cyan => Color::Cyan,
            ColorTheme::White => Color::White,
            // Classic phosphor amber
            ColorTheme::Amber => Color::Rgb(255, 176, 0),
            ColorTheme::Magenta => Color::Magenta,
        }
    }
}

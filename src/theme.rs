//! Visual theme
//!
//! Maps every [`RenderAttribute`] to a ratatui style. This is the single
//! translation table between palette handles and what ends up on screen;
//! surfaces register it once at startup.

use ratatui::style::{Color, Style};

use crate::palette::{self, ColorIndex, RenderAttribute};

/// Theme configuration for the canvas and its chrome.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Confirmation window body
    pub prompt: Style,
    /// Selected option and cheatsheet key labels
    pub highlight: Style,
    /// Status line text
    pub status: Style,
    /// Canvas background (empty cells and drawable black)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Standard ANSI colors: white on green prompts, black on white highlights.
    pub fn classic() -> Self {
        Self {
            prompt: Style::default().fg(Color::White).bg(Color::Green),
            highlight: Style::default().fg(Color::Black).bg(Color::White),
            status: Style::default(),
            background: Color::Black,
        }
    }

    /// Background color a drawable color is painted with.
    pub fn swatch(&self, color: ColorIndex) -> Color {
        match color {
            ColorIndex::Red => Color::Red,
            ColorIndex::Green => Color::Green,
            ColorIndex::Blue => Color::Blue,
            ColorIndex::Cyan => Color::Cyan,
            ColorIndex::Magenta => Color::Magenta,
            ColorIndex::Yellow => Color::Yellow,
            ColorIndex::White => Color::White,
            ColorIndex::Black | ColorIndex::Empty => self.background,
        }
    }

    /// Every render attribute with its style.
    pub fn attribute_styles(&self) -> Vec<(RenderAttribute, Style)> {
        let mut styles = vec![
            (RenderAttribute::PROMPT, self.prompt),
            (RenderAttribute::HIGHLIGHT, self.highlight),
        ];
        styles.extend(palette::DRAWABLE.iter().map(|&color| {
            (
                palette::attribute_for(color),
                Style::default().fg(Color::Black).bg(self.swatch(color)),
            )
        }));
        styles
    }
}

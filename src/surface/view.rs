//! Rendering pieces for [`TuiSurface`](super::TuiSurface)
//!
//! Canvas cells, the cheatsheet and the centered confirmation window.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::canvas::Dimensions;
use crate::palette::RenderAttribute;
use crate::prompt::{Choice, YesNoPrompt};

/// Style table indexed by [`RenderAttribute::slot`].
#[derive(Debug, Clone, Default)]
pub struct AttributeStyles {
    styles: Vec<Style>,
}

impl AttributeStyles {
    pub fn register(&mut self, attr: RenderAttribute, style: Style) {
        let slot = attr.slot();
        if self.styles.len() <= slot {
            self.styles.resize(slot + 1, Style::default());
        }
        self.styles[slot] = style;
    }

    /// Style for `attr`; unregistered attributes render unstyled.
    pub fn get(&self, attr: RenderAttribute) -> Style {
        self.styles.get(attr.slot()).copied().unwrap_or_default()
    }
}

/// Paints a grid of render attributes as colored blank cells.
pub struct CanvasView<'a> {
    cells: &'a [RenderAttribute],
    size: Dimensions,
    styles: &'a AttributeStyles,
}

impl<'a> CanvasView<'a> {
    pub fn new(cells: &'a [RenderAttribute], size: Dimensions, styles: &'a AttributeStyles) -> Self {
        Self {
            cells,
            size,
            styles,
        }
    }
}

impl Widget for CanvasView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.size.rows.min(area.height as usize);
        let cols = self.size.cols.min(area.width as usize);
        for row in 0..rows {
            for col in 0..cols {
                let attr = self.cells[row * self.size.cols + col];
                let x = area.x + col as u16;
                let y = area.y + row as u16;
                buf[(x, y)].set_style(self.styles.get(attr));
            }
        }
    }
}

/// Lay out cheatsheet entries on at most `max_lines` lines of `width` cells.
///
/// Entries move to the next line when they would overflow; the last line
/// takes whatever is left and gets clipped by the renderer.
pub fn cheatsheet_lines(
    entries: &[(String, String)],
    width: usize,
    max_lines: usize,
    key_style: Style,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for (key, label) in entries {
        let entry_width = key.width() + label.width() + 2;
        if used > 0 && used + entry_width > width && lines.len() + 1 < max_lines {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        spans.push(Span::styled(key.clone(), key_style));
        spans.push(Span::raw(format!(" {} ", label)));
        used += entry_width;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

/// Center a window of `rows` x `cols` inside `area`, clamped to fit.
pub fn center_window(area: Rect, rows: usize, cols: usize) -> Rect {
    let width = (cols.min(u16::MAX as usize) as u16).min(area.width);
    let height = (rows.min(u16::MAX as usize) as u16).min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Render the confirmation window and return where the cursor belongs.
pub fn render_confirm(
    frame: &mut Frame,
    prompt: &YesNoPrompt,
    window_style: Style,
    selected_style: Style,
) -> Position {
    let size = prompt.size();
    let window = center_window(frame.area(), size.rows, size.cols);

    frame.render_widget(Clear, window);
    frame.render_widget(
        Block::default().borders(Borders::ALL).style(window_style),
        window,
    );

    let (no_style, yes_style) = match prompt.choice() {
        Choice::No => (selected_style, window_style),
        Choice::Yes => (window_style, selected_style),
    };
    let options_y = window.y + prompt.options_row() as u16;
    let no_x = window.x + prompt.no_col() as u16;
    let yes_x = window.x + prompt.yes_col() as u16;

    let buf = frame.buffer_mut();
    put(
        buf,
        window,
        no_x,
        window.y + prompt.message_row() as u16,
        prompt.message(),
        window_style,
    );
    put(buf, window, no_x, options_y, "No", no_style);
    put(buf, window, yes_x, options_y, "Yes", yes_style);

    let (_, col) = prompt.selection_offset();
    Position::new(
        (window.x + col as u16).min(window.right().saturating_sub(1)),
        options_y.min(window.bottom().saturating_sub(1)),
    )
}

/// Write `text` at (x, y), skipping it when the window got clipped by a
/// terminal smaller than the prompt.
fn put(buf: &mut Buffer, window: Rect, x: u16, y: u16, text: &str, style: Style) {
    if y < window.bottom() && x < window.right() {
        let room = (window.right() - x) as usize;
        buf.set_stringn(x, y, text, room, style);
    }
}

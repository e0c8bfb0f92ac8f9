//! ratatui-backed terminal surface
//!
//! Keeps a shadow grid of render attributes (the canvas store), the status
//! line, the cheatsheet and any open prompt, and redraws them through
//! `ratatui::Terminal` on every refresh. ratatui only flushes the cells
//! that changed, so redrawing the full frame stays cheap.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Position, Rect},
    text::Line,
    widgets::Paragraph,
    Terminal,
};
use tracing::trace;
use unicode_width::UnicodeWidthStr;

use super::keys::KeySource;
use super::view::{cheatsheet_lines, render_confirm, AttributeStyles, CanvasView};
use super::TerminalSurface;
use crate::canvas::{Coord, Dimensions, RESERVED_ROWS};
use crate::palette::RenderAttribute;
use crate::prompt::YesNoPrompt;
use crate::theme::Theme;

/// Text being typed into the status-row prompt.
#[derive(Debug, Clone)]
struct LineInput {
    prompt: String,
    text: String,
}

/// Terminal surface drawing through a ratatui backend.
pub struct TuiSurface<B: Backend, K: KeySource> {
    terminal: Terminal<B>,
    keys: K,
    size: Dimensions,
    cells: Vec<RenderAttribute>,
    styles: AttributeStyles,
    theme: Theme,
    cursor: Coord,
    cursor_visible: bool,
    status: String,
    cheatsheet: Vec<(String, String)>,
    confirm: Option<YesNoPrompt>,
    input: Option<LineInput>,
}

impl<B: Backend, K: KeySource> TuiSurface<B, K> {
    /// Wrap `backend`, reading the terminal size once.
    pub fn new(backend: B, keys: K) -> Result<Self> {
        let terminal = Terminal::new(backend)?;
        let area = terminal.size()?;
        let size = Dimensions::new(area.height as usize, area.width as usize);

        Ok(Self {
            terminal,
            keys,
            size,
            cells: vec![RenderAttribute::BACKGROUND; size.area()],
            styles: AttributeStyles::default(),
            theme: Theme::default(),
            cursor: Coord::default(),
            cursor_visible: true,
            status: String::new(),
            cheatsheet: Vec::new(),
            confirm: None,
            input: None,
        })
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    pub fn keys_mut(&mut self) -> &mut K {
        &mut self.keys
    }

    /// Current status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether a confirmation window is open.
    pub fn is_confirming(&self) -> bool {
        self.confirm.is_some()
    }

    fn index(&self, at: Coord) -> Option<usize> {
        (at.row < self.size.rows && at.col < self.size.cols).then(|| at.row * self.size.cols + at.col)
    }

    fn collect_line(&mut self) -> Result<()> {
        loop {
            let key = self.keys.next_key()?;
            let Some(input) = self.input.as_mut() else {
                return Ok(());
            };
            match key.code {
                KeyCode::Enter => return Ok(()),
                KeyCode::Backspace => {
                    input.text.pop();
                }
                KeyCode::Char(c) if !is_command(&key) => input.text.push(c),
                _ => {}
            }
            self.refresh()?;
        }
    }
}

fn is_command(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

impl<B: Backend, K: KeySource> TerminalSurface for TuiSurface<B, K> {
    fn init(&mut self, theme: &Theme) {
        for (attr, style) in theme.attribute_styles() {
            self.styles.register(attr, style);
        }
        self.theme = theme.clone();
    }

    fn terminal_size(&self) -> Dimensions {
        self.size
    }

    fn cursor(&self) -> Coord {
        self.cursor
    }

    fn move_cursor(&mut self, at: Coord) {
        self.cursor = at;
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    fn read_key(&mut self) -> Result<KeyEvent> {
        self.keys.next_key()
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.input = Some(LineInput {
            prompt: prompt.to_string(),
            text: String::new(),
        });
        self.refresh()?;

        let collected = self.collect_line();
        let line = self.input.take().map(|input| input.text).unwrap_or_default();
        collected?;

        self.refresh()?;
        Ok(line)
    }

    fn attribute_at(&self, at: Coord) -> RenderAttribute {
        self.index(at)
            .map(|i| self.cells[i])
            .unwrap_or(RenderAttribute::BACKGROUND)
    }

    fn set_attribute(&mut self, at: Coord, attr: RenderAttribute, to_end_of_row: bool) {
        let Some(start) = self.index(at) else {
            trace!(row = at.row, col = at.col, "Ignoring write outside the terminal");
            return;
        };
        let end = if to_end_of_row {
            (at.row + 1) * self.size.cols
        } else {
            start + 1
        };
        self.cells[start..end].fill(attr);
    }

    fn set_status(&mut self, message: &str) {
        self.status = message.to_string();
    }

    fn set_cheatsheet(&mut self, entries: &[(&str, &str)]) {
        self.cheatsheet = entries
            .iter()
            .map(|(key, label)| (key.to_string(), label.to_string()))
            .collect();
    }

    fn show_confirm(&mut self, prompt: Option<&YesNoPrompt>) {
        self.confirm = prompt.cloned();
    }

    fn refresh(&mut self) -> Result<()> {
        let Self {
            terminal,
            size,
            cells,
            styles,
            theme,
            cursor,
            cursor_visible,
            status,
            cheatsheet,
            confirm,
            input,
            ..
        } = self;

        let canvas_rows = size.rows.saturating_sub(RESERVED_ROWS);
        let width = size.cols as u16;
        let row_area = |row: usize, height: u16| Rect::new(0, row as u16, width, height);

        terminal.draw(|frame| {
            let area = frame.area();
            let canvas_area = row_area(0, canvas_rows as u16).intersection(area);
            frame.render_widget(
                CanvasView::new(cells, Dimensions::new(canvas_rows, size.cols), styles),
                canvas_area,
            );

            let mut cursor_at = cursor_visible
                .then(|| Position::new(cursor.col as u16, cursor.row as u16));

            let status_area = row_area(canvas_rows, 1).intersection(area);
            match input {
                Some(line) => {
                    let text = format!("{}{}", line.prompt, line.text);
                    let end = (text.width() as u16).min(width.saturating_sub(1));
                    frame.render_widget(Paragraph::new(text), status_area);
                    cursor_at = Some(Position::new(end, status_area.y));
                }
                None => frame.render_widget(
                    Paragraph::new(status.as_str()).style(theme.status),
                    status_area,
                ),
            }

            let sheet_area = row_area(canvas_rows + 1, 2).intersection(area);
            let lines: Vec<Line> = cheatsheet_lines(
                cheatsheet,
                size.cols,
                sheet_area.height as usize,
                styles.get(RenderAttribute::HIGHLIGHT),
            );
            frame.render_widget(Paragraph::new(lines), sheet_area);

            if let Some(prompt) = confirm {
                cursor_at = Some(render_confirm(
                    frame,
                    prompt,
                    styles.get(RenderAttribute::PROMPT),
                    styles.get(RenderAttribute::HIGHLIGHT),
                ));
            }

            if let Some(position) = cursor_at {
                frame.set_cursor_position(position);
            }
        })?;
        Ok(())
    }
}

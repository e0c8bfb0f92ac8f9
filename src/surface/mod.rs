//! Terminal surface abstraction
//!
//! Everything the drawing engine needs from a terminal: cell attributes,
//! the cursor, blocking key and line input, and a few rendering hooks for
//! the status line, cheatsheet and confirmation window.
//!
//! [`TuiSurface`] implements it on top of ratatui, so the same code drives
//! a real terminal (crossterm backend) and headless tests (`TestBackend`).

pub mod keys;
pub mod session;
pub mod tui;
pub mod view;

pub use keys::{CrosstermKeys, KeySource, ScriptedKeys};
pub use session::Session;
pub use tui::TuiSurface;

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::canvas::{Coord, Dimensions};
use crate::palette::RenderAttribute;
use crate::prompt::YesNoPrompt;
use crate::theme::Theme;

/// Terminal operations used by the canvas and the editor.
pub trait TerminalSurface {
    /// Register the attribute table once at startup.
    fn init(&mut self, theme: &Theme);

    /// Terminal dimensions, read once when the surface was created.
    fn terminal_size(&self) -> Dimensions;

    fn cursor(&self) -> Coord;

    fn move_cursor(&mut self, at: Coord);

    fn set_cursor_visible(&mut self, visible: bool);

    /// Block until the next key press.
    fn read_key(&mut self) -> Result<KeyEvent>;

    /// Show `prompt` on the status row and collect an echoed line of text.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Attribute stored at `at`.
    fn attribute_at(&self, at: Coord) -> RenderAttribute;

    /// Store `attr` at `at`, or from `at` to the end of its row.
    fn set_attribute(&mut self, at: Coord, attr: RenderAttribute, to_end_of_row: bool);

    /// Replace the one-line status message.
    fn set_status(&mut self, message: &str);

    /// Key/label pairs listed under the status line.
    fn set_cheatsheet(&mut self, entries: &[(&str, &str)]);

    /// Show or hide the yes/no confirmation window.
    fn show_confirm(&mut self, prompt: Option<&YesNoPrompt>);

    /// Push pending changes to the screen.
    fn refresh(&mut self) -> Result<()>;
}

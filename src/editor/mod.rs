//! Input mode state machine
//!
//! The editor owns the canvas (and through it the terminal surface) and
//! runs a blocking read-dispatch loop. Each key is fully handled before
//! the next one is read:
//!
//! - color keys paint the cursor cell (Pencil) or flood-fill from it (Fill)
//! - arrows move the cursor, clamped to the canvas
//! - Ctrl chords switch mode, clear, open, save or quit
//!
//! Anything else is ignored. File failures only ever change the status line.

pub mod keymap;
pub mod mode;

pub use keymap::{command_for, Command};
pub use mode::PaintMode;

use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::KeyEvent;
use tracing::{debug, info, trace};

use crate::canvas::{flood_fill, Canvas, Coord};
use crate::config::Config;
use crate::drawing::{self, DrawingError};
use crate::palette::ColorIndex;
use crate::prompt::{self, PromptSize};
use crate::surface::TerminalSurface;
use crate::theme::Theme;

pub const CLEAR_PROMPT: &str = "Clear the canvas?";
pub const QUIT_PROMPT: &str = "Exit TerminalPaint?";
pub const OPEN_PROMPT: &str = "Enter drawing to open: ";
pub const SAVE_PROMPT: &str = "Enter path to save drawing: ";

pub const CLEARED: &str = "Canvas cleared!";
pub const OPENED: &str = "Drawing opened!";
pub const NOT_OPENED: &str = "Drawing NOT opened!";
pub const SAVED: &str = "Drawing saved!";
pub const NOT_SAVED: &str = "Drawing NOT saved!";

/// Result of handling one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep reading keys
    Continue,
    /// Quit was confirmed
    Quit,
}

/// The drawing editor.
pub struct Editor<S> {
    canvas: Canvas<S>,
    mode: PaintMode,
    prompt_size: PromptSize,
}

impl<S: TerminalSurface> Editor<S> {
    /// Set up the surface and an empty canvas in Pencil mode.
    ///
    /// Registers the theme, clears every row, shows the status line and
    /// cheatsheet and puts the cursor at the top-left cell.
    pub fn new(mut surface: S, config: &Config) -> Result<Self> {
        surface.init(&Theme::default());
        surface.set_cursor_visible(true);

        let mut canvas = Canvas::new(surface)?;
        canvas.clear();
        canvas.place_cursor(Coord::default());

        let mode = PaintMode::default();
        let surface = canvas.surface_mut();
        surface.set_status(&mode.status_message());
        surface.set_cheatsheet(&keymap::CHEATSHEET);
        surface.refresh()?;

        let size = canvas.size();
        info!(rows = size.rows, cols = size.cols, "Canvas ready");

        Ok(Self {
            canvas,
            mode,
            prompt_size: config.prompt,
        })
    }

    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    pub fn canvas(&self) -> &Canvas<S> {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas<S> {
        &mut self.canvas
    }

    pub fn surface(&self) -> &S {
        self.canvas.surface()
    }

    pub fn into_surface(self) -> S {
        self.canvas.into_surface()
    }

    /// Read and handle keys until quit is confirmed.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let key = self.canvas.surface_mut().read_key()?;
            if self.handle_key(key)? == InputResult::Quit {
                info!("Quit confirmed");
                return Ok(());
            }
        }
    }

    /// Handle one key press.
    ///
    /// Errors only come from the terminal itself or from a confirmation
    /// window configured below its minimum size.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<InputResult> {
        let Some(command) = command_for(&key) else {
            trace!(?key, "Ignoring unbound key");
            return Ok(InputResult::Continue);
        };
        debug!(?command, mode = %self.mode, "Handling command");

        match command {
            Command::Paint(color) => self.paint(color)?,
            Command::Quit => {
                if self.confirm(QUIT_PROMPT)? {
                    return Ok(InputResult::Quit);
                }
            }
            Command::Move(direction) => self.canvas.move_cursor(direction),
            Command::PencilMode => self.set_mode(PaintMode::Pencil),
            Command::FillMode => self.set_mode(PaintMode::Fill),
            Command::Clear => self.clear()?,
            Command::Open => {
                let path = self.canvas.surface_mut().read_line(OPEN_PROMPT)?;
                self.open_drawing(&path).ok();
            }
            Command::Save => {
                let path = self.canvas.surface_mut().read_line(SAVE_PROMPT)?;
                self.save_drawing(&path).ok();
            }
        }

        self.canvas.surface_mut().refresh()?;
        Ok(InputResult::Continue)
    }

    /// Open a drawing and report the outcome on the status line.
    pub fn open_drawing(&mut self, path: &str) -> Result<PathBuf, DrawingError> {
        let result = drawing::open(&mut self.canvas, path);
        let message = if result.is_ok() { OPENED } else { NOT_OPENED };
        self.canvas.surface_mut().set_status(message);
        result
    }

    /// Save the canvas and report the outcome on the status line.
    pub fn save_drawing(&mut self, path: &str) -> Result<PathBuf, DrawingError> {
        let result = drawing::save(&self.canvas, path);
        let message = if result.is_ok() { SAVED } else { NOT_SAVED };
        self.canvas.surface_mut().set_status(message);
        result
    }

    fn paint(&mut self, color: ColorIndex) -> Result<()> {
        let at = self.canvas.cursor();
        match self.mode {
            PaintMode::Pencil => self.canvas.set_color(at, color),
            PaintMode::Fill => {
                flood_fill(&mut self.canvas, at, color)?;
            }
        }
        Ok(())
    }

    fn set_mode(&mut self, mode: PaintMode) {
        self.mode = mode;
        self.canvas
            .surface_mut()
            .set_status(&mode.status_message());
    }

    fn clear(&mut self) -> Result<()> {
        if self.confirm(CLEAR_PROMPT)? {
            self.canvas.clear();
            self.canvas.surface_mut().set_status(CLEARED);
            self.canvas.place_cursor(Coord::default());
        }
        Ok(())
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        prompt::ask(self.canvas.surface_mut(), message, self.prompt_size)
    }
}

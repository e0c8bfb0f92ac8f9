//! Yes/No confirmation prompt
//!
//! A small centered window with a message and two options. Left/Right flip
//! the selection (default `No`), Enter commits. The prompt is a nested
//! blocking loop: it consumes every key until Enter, so nothing leaks back
//! to the editor.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use serde::{Deserialize, Serialize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::surface::TerminalSurface;

/// Smallest window the prompt can lay itself out in.
pub const MIN_ROWS: usize = 7;
pub const MIN_COLS: usize = 14;

/// Window size of a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptSize {
    pub rows: usize,
    pub cols: usize,
}

impl Default for PromptSize {
    fn default() -> Self {
        Self { rows: 8, cols: 40 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    #[error(
        "Prompt dimensions are too small ({rows}, {cols}) - minimum is ({}, {})",
        MIN_ROWS,
        MIN_COLS
    )]
    TooSmall { rows: usize, cols: usize },
}

/// Currently selected option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Choice {
    #[default]
    No,
    Yes,
}

/// Outcome of feeding one key to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStep {
    Pending,
    Answered(bool),
}

/// State and layout of a yes/no prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YesNoPrompt {
    message: String,
    size: PromptSize,
    choice: Choice,
}

impl YesNoPrompt {
    /// Build a prompt, chopping a message that does not fit the window.
    ///
    /// Fails when `size` is below the 7 x 14 minimum.
    pub fn new(message: &str, size: PromptSize) -> Result<Self, PromptError> {
        if size.rows < MIN_ROWS || size.cols < MIN_COLS {
            return Err(PromptError::TooSmall {
                rows: size.rows,
                cols: size.cols,
            });
        }

        let message = if message.width() >= size.cols {
            truncate_to_width(message, size.cols - 4)
        } else {
            message.to_string()
        };

        Ok(Self {
            message,
            size,
            choice: Choice::No,
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn size(&self) -> PromptSize {
        self.size
    }

    pub fn choice(&self) -> Choice {
        self.choice
    }

    /// Feed one key. Only Left, Right and Enter do anything.
    pub fn handle_key(&mut self, key: &KeyEvent) -> PromptStep {
        match key.code {
            KeyCode::Left if self.choice == Choice::Yes => self.choice = Choice::No,
            KeyCode::Right if self.choice == Choice::No => self.choice = Choice::Yes,
            KeyCode::Enter => return PromptStep::Answered(self.choice == Choice::Yes),
            _ => {}
        }
        PromptStep::Pending
    }

    /// Row of the message inside the window.
    pub fn message_row(&self) -> usize {
        2
    }

    /// Row of the No/Yes options inside the window.
    pub fn options_row(&self) -> usize {
        self.size.rows - 3
    }

    /// Column where both the message and `No` start.
    pub fn no_col(&self) -> usize {
        (self.size.cols.saturating_sub(self.message.width())) / 2
    }

    pub fn yes_col(&self) -> usize {
        self.no_col() + self.message.width().saturating_sub(5).max(3)
    }

    /// Window-relative (row, col) of the selected option.
    pub fn selection_offset(&self) -> (usize, usize) {
        let col = match self.choice {
            Choice::No => self.no_col(),
            Choice::Yes => self.yes_col(),
        };
        (self.options_row(), col)
    }
}

fn truncate_to_width(s: &str, max: usize) -> String {
    let mut width = 0;
    s.chars()
        .take_while(|c| {
            width += c.width().unwrap_or(0);
            width <= max
        })
        .collect()
}

/// Show a confirmation window and block until the user commits a choice.
///
/// Returns `true` for Yes. A window below the minimum size is a hard error.
pub fn ask<S: TerminalSurface + ?Sized>(
    surface: &mut S,
    message: &str,
    size: PromptSize,
) -> Result<bool> {
    let mut prompt = YesNoPrompt::new(message, size)?;

    surface.show_confirm(Some(&prompt));
    surface.refresh()?;

    let answer = loop {
        let key = match surface.read_key() {
            Ok(key) => key,
            Err(e) => {
                surface.show_confirm(None);
                return Err(e);
            }
        };
        match prompt.handle_key(&key) {
            PromptStep::Pending => {
                surface.show_confirm(Some(&prompt));
                surface.refresh()?;
            }
            PromptStep::Answered(answer) => break answer,
        }
    };

    surface.show_confirm(None);
    surface.refresh()?;
    Ok(answer)
}

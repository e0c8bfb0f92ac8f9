//! Key input sources
//!
//! The editor reads one key at a time and blocks until it arrives.
//! [`CrosstermKeys`] reads the real terminal; [`ScriptedKeys`] replays a
//! fixed sequence so whole sessions can run headless.

use std::collections::VecDeque;

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A blocking source of key presses.
pub trait KeySource {
    fn next_key(&mut self) -> Result<KeyEvent>;
}

/// Reads key presses from the terminal via crossterm.
///
/// Resize, mouse and focus events are dropped, as are key releases on
/// terminals that report them.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => return Ok(key),
                _ => {}
            }
        }
    }
}

/// Replays a queue of key events, failing once it runs dry.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    queue: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    pub fn new<I: IntoIterator<Item = KeyEvent>>(keys: I) -> Self {
        Self {
            queue: keys.into_iter().collect(),
        }
    }

    /// Queue one key event.
    pub fn push(&mut self, key: KeyEvent) {
        self.queue.push_back(key);
    }

    /// Queue every character of `text` as a plain key press.
    pub fn type_text(&mut self, text: &str) {
        self.queue.extend(text.chars().map(|c| key(KeyCode::Char(c))));
    }

    /// Keys not consumed yet.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<KeyEvent> {
        match self.queue.pop_front() {
            Some(key) => Ok(key),
            None => bail!("Scripted key input exhausted"),
        }
    }
}

/// A key press without modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// A Ctrl+letter key press.
pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

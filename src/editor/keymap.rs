//! Key bindings
//!
//! Translates raw key events into editor commands. Anything without a
//! binding maps to `None` and is ignored by the editor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::canvas::Direction;
use crate::palette::{self, ColorIndex};

/// Something the editor can do in response to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Paint(ColorIndex),
    PencilMode,
    FillMode,
    Clear,
    Open,
    Save,
    Quit,
}

/// Ctrl-key commands with their cheatsheet labels, in display order.
pub const CHEATSHEET: [(&str, &str); 6] = [
    ("^P", "Pencil"),
    ("^F", "Fill"),
    ("^X", "Clear"),
    ("^O", "Open"),
    ("^S", "Save"),
    ("^Q", "Quit"),
];

/// Command bound to `key`, if any.
pub fn command_for(key: &KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Char(c) if ctrl && !alt => match c.to_ascii_lowercase() {
            'p' => Some(Command::PencilMode),
            'f' => Some(Command::FillMode),
            'x' => Some(Command::Clear),
            'o' => Some(Command::Open),
            's' => Some(Command::Save),
            'q' => Some(Command::Quit),
            _ => None,
        },
        KeyCode::Char(c) if !ctrl && !alt => palette::color_for_key(c).map(Command::Paint),
        _ => None,
    }
}

//! Test helper utilities

#![allow(dead_code)]

use crossterm::event::KeyCode;
use ratatui::backend::TestBackend;
use termpaint::canvas::RESERVED_ROWS;
use termpaint::palette;
use termpaint::surface::keys::{ctrl, key};
use termpaint::surface::{ScriptedKeys, TuiSurface};
use termpaint::{Config, Editor};

pub type TestSurface = TuiSurface<TestBackend, ScriptedKeys>;

/// Headless editor over a `rows` x `cols` canvas replaying `keys`.
pub fn editor_with(
    rows: usize,
    cols: usize,
    keys: ScriptedKeys,
    config: &Config,
) -> Editor<TestSurface> {
    let backend = TestBackend::new(cols as u16, (rows + RESERVED_ROWS) as u16);
    let surface = TuiSurface::new(backend, keys).expect("Failed to create surface");
    Editor::new(surface, config).expect("Failed to create editor")
}

pub fn editor(rows: usize, cols: usize, keys: ScriptedKeys) -> Editor<TestSurface> {
    editor_with(rows, cols, keys, &Config::default())
}

/// Append the keys that quit and confirm "Yes".
pub fn confirm_quit(keys: &mut ScriptedKeys) {
    keys.push(ctrl('q'));
    keys.push(key(KeyCode::Right));
    keys.push(key(KeyCode::Enter));
}

/// Append a Ctrl chord that opens a path prompt, then the typed path.
pub fn enter_path(keys: &mut ScriptedKeys, chord: char, path: &str) {
    keys.push(ctrl(chord));
    keys.type_text(path);
    keys.push(key(KeyCode::Enter));
}

/// The canvas as rows of `.paint` characters.
pub fn dump(editor: &Editor<TestSurface>) -> Vec<String> {
    editor
        .canvas()
        .rows()
        .map(|row| row.into_iter().map(palette::file_char_for_color).collect())
        .collect()
}

/// Screen contents as numbered rows with trailing blanks trimmed.
pub fn screen(surface: &TestSurface) -> String {
    let buffer = surface.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            let row: String = (0..area.width).map(|x| buffer[(x, y)].symbol()).collect();
            format!("{:02}|{}", y, row.trim_end())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

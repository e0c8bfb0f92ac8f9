//! Test helper utilities

#![allow(dead_code)]

use ratatui::backend::TestBackend;
use termpaint::canvas::RESERVED_ROWS;
use termpaint::palette;
use termpaint::surface::{ScriptedKeys, TerminalSurface, TuiSurface};
use termpaint::theme::Theme;
use termpaint::{Canvas, ColorIndex, Coord};

pub type TestSurface = TuiSurface<TestBackend, ScriptedKeys>;

/// A headless surface whose canvas area is `rows` x `cols`.
pub fn surface(rows: usize, cols: usize) -> TestSurface {
    let backend = TestBackend::new(cols as u16, (rows + RESERVED_ROWS) as u16);
    let mut surface =
        TuiSurface::new(backend, ScriptedKeys::default()).expect("Failed to create surface");
    surface.init(&Theme::default());
    surface
}

/// A cleared `rows` x `cols` canvas.
pub fn canvas(rows: usize, cols: usize) -> Canvas<TestSurface> {
    let mut canvas = Canvas::new(surface(rows, cols)).expect("Failed to create canvas");
    canvas.clear();
    canvas
}

/// Paint the canvas from rows of `.paint` characters.
pub fn paint(canvas: &mut Canvas<TestSurface>, rows: &[&str]) {
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let color = palette::color_for_file_char(ch).expect("Bad test pattern");
            canvas.set_color(Coord::new(row, col), color);
        }
    }
}

/// The canvas as rows of `.paint` characters.
pub fn dump(canvas: &Canvas<TestSurface>) -> Vec<String> {
    canvas
        .rows()
        .map(|row| row.into_iter().map(palette::file_char_for_color).collect())
        .collect()
}

/// Whether every cell of the canvas holds `color`.
pub fn all_cells(canvas: &Canvas<TestSurface>, color: ColorIndex) -> bool {
    canvas.rows().flatten().all(|c| c == color)
}

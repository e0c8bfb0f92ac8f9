//! Canvas model tests

use crate::helpers::{all_cells, canvas, dump, paint, surface};
use ratatui::backend::TestBackend;
use termpaint::canvas::CanvasError;
use termpaint::surface::{ScriptedKeys, TuiSurface};
use termpaint::{Canvas, ColorIndex, Coord, Dimensions, Direction};

#[test]
fn size_is_terminal_minus_reserved_rows() {
    let canvas = Canvas::new(surface(5, 7)).unwrap();
    assert_eq!(canvas.size(), Dimensions::new(5, 7));
}

#[test]
fn terminal_with_only_reserved_rows_is_too_small() {
    let surface = TuiSurface::new(TestBackend::new(10, 3), ScriptedKeys::default()).unwrap();
    let err = Canvas::new(surface).err().unwrap();
    assert_eq!(err, CanvasError::TerminalTooSmall { rows: 3, cols: 10 });
}

#[test]
fn set_then_get_returns_canonical_color() {
    let mut canvas = canvas(3, 3);
    let at = Coord::new(1, 2);
    for color in [
        ColorIndex::Red,
        ColorIndex::Green,
        ColorIndex::Blue,
        ColorIndex::Cyan,
        ColorIndex::Magenta,
        ColorIndex::Yellow,
        ColorIndex::White,
        ColorIndex::Black,
        ColorIndex::Empty,
    ] {
        canvas.set_color(at, color);
        assert_eq!(canvas.color_at(at), color.canonical());
    }
}

#[test]
fn set_color_touches_one_cell() {
    let mut canvas = canvas(3, 3);
    canvas.set_color(Coord::new(1, 1), ColorIndex::Yellow);
    assert_eq!(dump(&canvas), vec!["xxx", "xyx", "xxx"]);
}

#[test]
fn set_row_from_paints_the_whole_row() {
    let mut canvas = canvas(3, 4);
    canvas.set_row_from(2, ColorIndex::Magenta);
    assert_eq!(dump(&canvas), vec!["xxxx", "xxxx", "mmmm"]);
}

#[test]
fn clear_resets_every_cell() {
    let mut canvas = canvas(4, 4);
    paint(&mut canvas, &["rgbc", "mywx", "rrrr", "gggg"]);
    canvas.clear();
    assert!(all_cells(&canvas, ColorIndex::Empty));
}

#[test]
fn rows_iterate_in_order() {
    let mut canvas = canvas(2, 3);
    paint(&mut canvas, &["rgb", "cmy"]);
    let rows: Vec<Vec<ColorIndex>> = canvas.rows().collect();
    assert_eq!(rows[0], vec![ColorIndex::Red, ColorIndex::Green, ColorIndex::Blue]);
    assert_eq!(
        rows[1],
        vec![ColorIndex::Cyan, ColorIndex::Magenta, ColorIndex::Yellow]
    );
}

#[test]
fn cursor_moves_and_clamps() {
    let mut canvas = canvas(2, 2);
    assert_eq!(canvas.cursor(), Coord::new(0, 0));

    canvas.move_cursor(Direction::Left);
    canvas.move_cursor(Direction::Up);
    assert_eq!(canvas.cursor(), Coord::new(0, 0));

    for _ in 0..5 {
        canvas.move_cursor(Direction::Right);
        canvas.move_cursor(Direction::Down);
    }
    assert_eq!(canvas.cursor(), Coord::new(1, 1));
}

#[test]
fn contains_checks_both_axes() {
    let canvas = canvas(2, 3);
    assert!(canvas.contains(Coord::new(1, 2)));
    assert!(!canvas.contains(Coord::new(2, 0)));
    assert!(!canvas.contains(Coord::new(0, 3)));
}

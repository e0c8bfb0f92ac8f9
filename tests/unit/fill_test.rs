//! Flood fill tests

use crate::helpers::{all_cells, canvas, dump, paint};
use termpaint::canvas::flood_fill;
use termpaint::{ColorIndex, Coord};

#[test]
fn fills_whole_empty_canvas() {
    let mut canvas = canvas(4, 6);
    let painted = flood_fill(&mut canvas, Coord::new(2, 3), ColorIndex::Blue).unwrap();
    assert_eq!(painted, 24);
    assert!(all_cells(&canvas, ColorIndex::Blue));
}

#[test]
fn stops_at_differently_colored_boundary() {
    let mut canvas = canvas(5, 5);
    paint(
        &mut canvas,
        &["xxxxx", "xrrrx", "xrxrx", "xrrrx", "xxxxx"],
    );
    let painted = flood_fill(&mut canvas, Coord::new(2, 2), ColorIndex::Green).unwrap();
    assert_eq!(painted, 1);
    assert_eq!(
        dump(&canvas),
        vec!["xxxxx", "xrrrx", "xrgrx", "xrrrx", "xxxxx"]
    );
}

#[test]
fn fills_outside_of_a_ring() {
    let mut canvas = canvas(5, 5);
    paint(
        &mut canvas,
        &["xxxxx", "xrrrx", "xrxrx", "xrrrx", "xxxxx"],
    );
    let painted = flood_fill(&mut canvas, Coord::new(0, 0), ColorIndex::Cyan).unwrap();
    assert_eq!(painted, 16);
    assert_eq!(
        dump(&canvas),
        vec!["ccccc", "crrrc", "crxrc", "crrrc", "ccccc"]
    );
}

#[test]
fn diagonal_cells_are_not_connected() {
    let mut canvas = canvas(3, 3);
    paint(&mut canvas, &["rxx", "xrx", "xxr"]);
    let painted = flood_fill(&mut canvas, Coord::new(0, 0), ColorIndex::Yellow).unwrap();
    assert_eq!(painted, 1);
    assert_eq!(dump(&canvas), vec!["yxx", "xrx", "xxr"]);
}

#[test]
fn filling_with_the_same_color_terminates() {
    let mut canvas = canvas(3, 4);
    paint(&mut canvas, &["wwww", "wwww", "wwww"]);
    let painted = flood_fill(&mut canvas, Coord::new(1, 1), ColorIndex::White).unwrap();
    assert_eq!(painted, 12);
    assert!(all_cells(&canvas, ColorIndex::White));
}

#[test]
fn black_fill_on_empty_region_is_a_no_op() {
    let mut canvas = canvas(3, 3);
    paint(&mut canvas, &["xrx", "xrx", "xrx"]);
    flood_fill(&mut canvas, Coord::new(0, 0), ColorIndex::Black).unwrap();
    assert_eq!(dump(&canvas), vec!["xrx", "xrx", "xrx"]);
}

#[test]
fn single_cell_canvas() {
    let mut canvas = canvas(1, 1);
    let painted = flood_fill(&mut canvas, Coord::new(0, 0), ColorIndex::Red).unwrap();
    assert_eq!(painted, 1);
    assert_eq!(dump(&canvas), vec!["r"]);
}

#[test]
fn cursor_returns_to_start() {
    let mut canvas = canvas(4, 4);
    canvas.place_cursor(Coord::new(0, 0));
    flood_fill(&mut canvas, Coord::new(3, 2), ColorIndex::Magenta).unwrap();
    assert_eq!(canvas.cursor(), Coord::new(3, 2));
}

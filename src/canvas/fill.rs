//! Breadth-first flood fill over the canvas.

use std::collections::VecDeque;

use anyhow::Result;
use tracing::debug;

use super::{Canvas, Coord};
use crate::palette::ColorIndex;
use crate::surface::TerminalSurface;

/// Recolor the 4-connected region of same-colored cells around `start`.
///
/// The start cell is painted first. A neighbour joins the region when it
/// has not been visited yet and still holds the start cell's original
/// color. Each cell is visited at most once, so filling a region with its
/// own color still walks it (a visual no-op).
///
/// The cursor is put back on `start` and the surface refreshed afterwards.
/// Returns the number of cells painted.
pub fn flood_fill<S: TerminalSurface>(
    canvas: &mut Canvas<S>,
    start: Coord,
    target: ColorIndex,
) -> Result<usize> {
    let size = canvas.size();
    let index = |at: Coord| at.row * size.cols + at.col;

    let mut visited = vec![false; size.area()];
    let mut queue = VecDeque::new();

    let initial = canvas.color_at(start);
    canvas.set_color(start, target);
    visited[index(start)] = true;
    queue.push_back(start);
    let mut painted = 1;

    while let Some(current) = queue.pop_front() {
        for next in current.neighbours(size) {
            if visited[index(next)] {
                continue;
            }
            if canvas.color_at(next) != initial {
                continue;
            }
            canvas.set_color(next, target);
            visited[index(next)] = true;
            queue.push_back(next);
            painted += 1;
        }
    }

    debug!(
        row = start.row,
        col = start.col,
        ?initial,
        ?target,
        painted,
        "Flood fill finished"
    );

    canvas.place_cursor(start);
    canvas.surface_mut().refresh()?;
    Ok(painted)
}

//! Canvas model
//!
//! The canvas is a rows x cols grid of [`ColorIndex`] values. It keeps no
//! buffer of its own: every cell lives on the terminal surface as a
//! [`RenderAttribute`](crate::palette::RenderAttribute) and is translated
//! through the palette on the way in and out.

pub mod fill;

pub use fill::flood_fill;

use tracing::trace;

use crate::palette::{self, ColorIndex};
use crate::surface::TerminalSurface;

/// Rows kept free under the canvas for the status line and cheatsheet.
pub const RESERVED_ROWS: usize = 3;

/// Grid dimensions in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells in the grid.
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }
}

/// A (row, column) position, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move one cell in `direction`, clamped to `bounds`.
    ///
    /// Hitting an edge leaves the coordinate where it is.
    pub fn step(self, direction: Direction, bounds: Dimensions) -> Self {
        let Self { row, col } = self;
        match direction {
            Direction::Up => Self::new(row.saturating_sub(1), col),
            Direction::Down if row + 1 < bounds.rows => Self::new(row + 1, col),
            Direction::Left => Self::new(row, col.saturating_sub(1)),
            Direction::Right if col + 1 < bounds.cols => Self::new(row, col + 1),
            Direction::Down | Direction::Right => self,
        }
    }

    /// The four orthogonal neighbours that exist inside `bounds`,
    /// in south, north, east, west order.
    pub fn neighbours(self, bounds: Dimensions) -> impl Iterator<Item = Coord> {
        let Self { row, col } = self;
        let south = (row + 1 < bounds.rows).then(|| Coord::new(row + 1, col));
        let north = row.checked_sub(1).map(|r| Coord::new(r, col));
        let east = (col + 1 < bounds.cols).then(|| Coord::new(row, col + 1));
        let west = col.checked_sub(1).map(|c| Coord::new(row, c));
        [south, north, east, west].into_iter().flatten()
    }
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Errors raised while setting up a canvas.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    #[error(
        "Terminal is too small ({rows}x{cols}); at least {} rows and 1 column are needed",
        RESERVED_ROWS + 1
    )]
    TerminalTooSmall { rows: usize, cols: usize },
}

/// The drawing grid, stored on a terminal surface.
pub struct Canvas<S> {
    surface: S,
    size: Dimensions,
}

impl<S: TerminalSurface> Canvas<S> {
    /// Create a canvas sized to the surface's terminal, minus the reserved rows.
    ///
    /// The size is fixed for the lifetime of the canvas. Cells are not
    /// touched; call [`clear`](Self::clear) to reset them.
    pub fn new(surface: S) -> Result<Self, CanvasError> {
        let term = surface.terminal_size();
        if term.rows <= RESERVED_ROWS || term.cols == 0 {
            return Err(CanvasError::TerminalTooSmall {
                rows: term.rows,
                cols: term.cols,
            });
        }
        let size = Dimensions::new(term.rows - RESERVED_ROWS, term.cols);
        Ok(Self { surface, size })
    }

    pub fn size(&self) -> Dimensions {
        self.size
    }

    /// Whether `at` lies inside the canvas.
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.size.rows && at.col < self.size.cols
    }

    /// Color of the cell at `at`. Callers bounds-check first.
    pub fn color_at(&self, at: Coord) -> ColorIndex {
        debug_assert!(self.contains(at), "color_at out of bounds: {:?}", at);
        palette::color_for_attribute(self.surface.attribute_at(at))
    }

    /// Paint a single cell.
    pub fn set_color(&mut self, at: Coord, color: ColorIndex) {
        debug_assert!(self.contains(at), "set_color out of bounds: {:?}", at);
        self.surface
            .set_attribute(at, palette::attribute_for(color), false);
    }

    /// Paint a whole row from column 0 to the end.
    pub fn set_row_from(&mut self, row: usize, color: ColorIndex) {
        debug_assert!(row < self.size.rows, "set_row_from out of bounds: {}", row);
        self.surface
            .set_attribute(Coord::new(row, 0), palette::attribute_for(color), true);
    }

    /// Reset every cell to [`ColorIndex::Empty`], one row at a time.
    pub fn clear(&mut self) {
        for row in 0..self.size.rows {
            self.set_row_from(row, ColorIndex::Empty);
        }
        trace!(rows = self.size.rows, "Canvas cleared");
    }

    /// Every cell, row by row.
    pub fn rows(&self) -> impl Iterator<Item = Vec<ColorIndex>> + '_ {
        (0..self.size.rows).map(move |row| {
            (0..self.size.cols)
                .map(|col| self.color_at(Coord::new(row, col)))
                .collect()
        })
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Coord {
        self.surface.cursor()
    }

    /// Move the cursor one cell, clamped at the canvas edges.
    pub fn move_cursor(&mut self, direction: Direction) {
        let next = self.cursor().step(direction, self.size);
        self.surface.move_cursor(next);
    }

    /// Put the cursor at `at`, which must be inside the canvas.
    pub fn place_cursor(&mut self, at: Coord) {
        debug_assert!(self.contains(at), "place_cursor out of bounds: {:?}", at);
        self.surface.move_cursor(at);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

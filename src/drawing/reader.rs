//! Drawing file parser.

use std::io::BufRead;
use std::path::Path;

use super::{DrawingError, MAGIC};
use crate::canvas::{Canvas, Coord};
use crate::palette;
use crate::surface::TerminalSurface;

/// Paint a drawing read from `reader` onto `canvas`.
///
/// The header is checked before anything is touched. After that the canvas
/// is cleared and each line is applied as it is read; trailing whitespace
/// is ignored. Cells past the canvas edge are skipped, rows the file does
/// not cover stay empty. `path` is only used for error reporting.
///
/// # Errors
///
/// - `Io` if reading fails (including invalid UTF-8)
/// - `BadMagic` if the first line is not the header (or the input is empty)
/// - `Palette` on the first unknown cell character; earlier rows stay painted
pub fn read_drawing<S: TerminalSurface, R: BufRead>(
    canvas: &mut Canvas<S>,
    reader: R,
    path: &Path,
) -> Result<(), DrawingError> {
    let io_error = |source| DrawingError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut lines = reader.lines();

    let header = lines.next().transpose().map_err(io_error)?;
    if header.as_deref().map(str::trim) != Some(MAGIC) {
        return Err(DrawingError::BadMagic {
            path: path.to_path_buf(),
        });
    }

    canvas.clear();

    for (row, line) in lines.enumerate() {
        let line = line.map_err(io_error)?;
        for (col, ch) in line.trim_end().chars().enumerate() {
            let color = palette::color_for_file_char(ch).map_err(|source| DrawingError::Palette {
                path: path.to_path_buf(),
                line: row + 2,
                source,
            })?;
            let at = Coord::new(row, col);
            if canvas.contains(at) {
                canvas.set_color(at, color);
            }
        }
    }

    Ok(())
}

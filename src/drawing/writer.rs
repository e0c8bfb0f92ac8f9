//! Drawing file writer.

use std::io::{self, Write};

use super::MAGIC;
use crate::canvas::Canvas;
use crate::palette;
use crate::surface::TerminalSurface;

/// Write the header and every canvas row to `writer`.
pub fn write_drawing<S: TerminalSurface, W: Write>(
    canvas: &Canvas<S>,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "{}", MAGIC)?;
    for row in canvas.rows() {
        let line: String = row.into_iter().map(palette::file_char_for_color).collect();
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

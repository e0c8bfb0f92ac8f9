//! `.paint` drawing files
//!
//! A drawing is plain text: the magic header line, then one line per canvas
//! row with one palette character per cell.
//!
//! ```text
//! EEE111_PAINT1234
//! xxxxx
//! xxrxx
//! xxxxx
//! ```
//!
//! There is no dimension field; the live canvas size decides how much of a
//! file is used. Open replaces the whole canvas, save writes it wholesale.

mod reader;
mod writer;

pub use reader::read_drawing;
pub use writer::write_drawing;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::canvas::Canvas;
use crate::palette::PaletteError;
use crate::surface::TerminalSurface;

/// First line of every drawing file.
pub const MAGIC: &str = "EEE111_PAINT1234";

/// Required file extension, without the dot.
pub const EXTENSION: &str = "paint";

/// Why a drawing could not be opened or saved.
///
/// Every variant carries the path that was attempted.
#[derive(Debug, thiserror::Error)]
pub enum DrawingError {
    #[error("Not a .paint file: {path:?}")]
    WrongExtension { path: PathBuf },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Missing {} header in {path:?}", MAGIC)]
    BadMagic { path: PathBuf },

    #[error("Bad cell in {path:?} at line {line}: {source}")]
    Palette {
        path: PathBuf,
        line: usize,
        #[source]
        source: PaletteError,
    },
}

impl DrawingError {
    /// The path the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            DrawingError::WrongExtension { path }
            | DrawingError::Io { path, .. }
            | DrawingError::BadMagic { path }
            | DrawingError::Palette { path, .. } => path,
        }
    }
}

fn has_paint_extension(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(EXTENSION)
}

/// Path a drawing is saved under: `.paint` is appended unless already there.
pub fn save_path_for(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if has_paint_extension(path) {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(EXTENSION);
        PathBuf::from(name)
    }
}

/// Load a drawing onto the canvas.
///
/// The extension must be exactly `.paint` and the first line must be the
/// magic header; otherwise the canvas is left untouched. Once the header
/// matches, the canvas is cleared and painted line by line. A bad cell
/// aborts the load without rolling back rows already painted.
pub fn open<S: TerminalSurface>(
    canvas: &mut Canvas<S>,
    path: impl AsRef<Path>,
) -> Result<PathBuf, DrawingError> {
    let path = path.as_ref();
    let result = open_inner(canvas, path);
    match &result {
        Ok(_) => info!(path = %path.display(), "Drawing opened"),
        Err(e) => warn!(path = %path.display(), error = %e, "Drawing not opened"),
    }
    result
}

fn open_inner<S: TerminalSurface>(
    canvas: &mut Canvas<S>,
    path: &Path,
) -> Result<PathBuf, DrawingError> {
    if !has_paint_extension(path) {
        return Err(DrawingError::WrongExtension {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| DrawingError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    read_drawing(canvas, BufReader::new(file), path)?;
    Ok(path.to_path_buf())
}

/// Write the canvas to `path`, appending `.paint` when missing.
///
/// An existing file is overwritten. A failed write may leave a partial
/// file behind.
pub fn save<S: TerminalSurface>(
    canvas: &Canvas<S>,
    path: impl AsRef<Path>,
) -> Result<PathBuf, DrawingError> {
    let path = save_path_for(path);
    let result = save_inner(canvas, &path)
        .map(|()| path.clone())
        .map_err(|source| DrawingError::Io {
            path: path.clone(),
            source,
        });
    match &result {
        Ok(_) => info!(path = %path.display(), "Drawing saved"),
        Err(e) => warn!(path = %path.display(), error = %e, "Drawing not saved"),
    }
    result
}

fn save_inner<S: TerminalSurface>(canvas: &Canvas<S>, path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_drawing(canvas, &mut out)?;
    out.flush()
}

//! termpaint library
//!
//! A pixel-art editor on a grid of terminal cells: a fixed 8-color palette,
//! pencil and flood-fill modes, and a plain-text `.paint` file format.

pub mod canvas;
pub mod cli;
pub mod config;
pub mod drawing;
pub mod editor;
pub mod logging;
pub mod palette;
pub mod prompt;
pub mod surface;
pub mod theme;

pub use canvas::{Canvas, Coord, Dimensions, Direction};
pub use config::Config;
pub use drawing::DrawingError;
pub use editor::{Editor, InputResult, PaintMode};
pub use palette::{ColorIndex, RenderAttribute};
pub use surface::{TerminalSurface, TuiSurface};

//! CLI definitions for termpaint
//!
//! The editor itself is keyboard driven; the command line only picks an
//! optional drawing to start with and an alternative config file.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;

/// Build clap styles matching the editor's prompt colors.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Debug, Parser)]
#[command(name = "termpaint")]
#[command(about = "Pixel-art drawing in your terminal")]
#[command(long_about = "termpaint - draw pixel art on a grid of terminal cells.

KEYS:
    Arrows          Move the cursor
    r g b c m y w x Paint with red, green, blue, cyan, magenta, yellow, white, black
    ^P / ^F         Pencil mode / Fill mode
    ^X              Clear the canvas
    ^O / ^S         Open / save a .paint drawing
    ^Q              Quit

The canvas takes the whole terminal minus three rows for the status line
and the cheatsheet.")]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Drawing to open at startup (.paint)
    pub file: Option<PathBuf>,

    /// Read configuration from this file instead of ~/.config/termpaint/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

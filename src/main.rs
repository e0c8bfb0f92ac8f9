//! termpaint - CLI entry point

use std::io;

use anyhow::{bail, Result};
use clap::Parser;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use termpaint::cli::Cli;
use termpaint::surface::{CrosstermKeys, Session, TuiSurface};
use termpaint::{logging, Config, Editor, TerminalSurface};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    // The log file is optional; the editor runs without it
    match logging::init(&config.log.level) {
        Ok(log_path) => info!(
            version = env!("CARGO_PKG_VERSION"),
            log = ?log_path,
            "termpaint starting"
        ),
        Err(e) => eprintln!("Warning: logging disabled: {:#}", e),
    }

    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
        bail!("termpaint needs an interactive terminal");
    }

    let session = Session::enter()?;
    let surface = TuiSurface::new(CrosstermBackend::new(io::stdout()), CrosstermKeys)?;
    let mut editor = Editor::new(surface, &config)?;

    if let Some(file) = &cli.file {
        editor.open_drawing(&file.to_string_lossy()).ok();
        editor.canvas_mut().surface_mut().refresh()?;
    }

    let result = editor.run();

    drop(editor);
    drop(session);
    info!("termpaint exiting");
    result
}

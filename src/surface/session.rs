//! Terminal session guard
//!
//! Puts the terminal into raw mode on the alternate screen and restores it
//! when dropped, including on early returns and errors.

use std::io;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    style::ResetColor,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::debug;

/// Active raw-mode session on stdout.
pub struct Session {
    _private: (),
}

impl Session {
    /// Enter raw mode and the alternate screen.
    ///
    /// Uses explicit rollback so a failure leaves the terminal as it was.
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        debug!("Terminal session started");
        Ok(Self { _private: () })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), ResetColor, LeaveAlternateScreen, Show);
        debug!("Terminal session restored");
    }
}

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;

/// Raw mode plus alternate screen for as long as the session lives.
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let session = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen, Hide)
            .context("failed to enter alternate screen")?;
        Ok(session)
    }

    /// Restore the terminal now instead of on drop, reporting failures.
    pub fn leave(mut self) -> Result<()> {
        self.active = false;
        restore().context("failed to restore terminal")
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            if let Err(err) = restore() {
                warn!("terminal: restore on drop failed err={}", err);
            }
        }
    }
}

fn restore() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;
    stdout.flush()?;
    disable_raw_mode()
}

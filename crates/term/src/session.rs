//! Scoped terminal acquisition.
//!
//! [`TerminalSession::enter`] switches the terminal into raw mode on the
//! alternate screen; dropping the session restores it. Every exit path goes
//! through `Drop`, and [`install_panic_hook`] covers `panic = "abort"` builds
//! where unwinding (and therefore `Drop`) never happens.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

/// Live raw-mode terminal. Restored on drop.
#[derive(Debug)]
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        // From here on the guard exists, so a failure below still restores.
        let session = Self { active: true };

        let mut stdout = io::stdout();
        stdout.queue(terminal::EnterAlternateScreen)?;
        stdout.queue(cursor::Hide)?;
        stdout.queue(terminal::DisableLineWrap)?;
        stdout.flush().context("failed to set up terminal screen")?;
        Ok(session)
    }

    /// Restore the terminal now instead of waiting for drop.
    pub fn exit(mut self) -> Result<()> {
        self.active = false;
        restore_terminal()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            let _ = restore_terminal();
        }
    }
}

/// Undo everything [`TerminalSession::enter`] did. Safe to call more than once.
pub fn restore_terminal() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.queue(ResetColor)?;
    stdout.queue(SetAttribute(Attribute::Reset))?;
    stdout.queue(terminal::EnableLineWrap)?;
    stdout.queue(cursor::Show)?;
    stdout.queue(terminal::LeaveAlternateScreen)?;
    stdout.flush()?;
    terminal::disable_raw_mode()?;
    Ok(())
}

/// Restore the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let prev = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        prev(info);
    }));
}

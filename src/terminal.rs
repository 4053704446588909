//! Raw-mode / alternate-screen session that is undone on every exit path

use std::io::Write;

use anyhow::{Context, Result};
use crossterm::cursor::Show;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

/// Restores the terminal on `restore()` or drop, whichever comes first.
pub struct TerminalGuard<W: Write> {
    out: W,
    mouse: bool,
    restored: bool,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(out: W, mouse: bool) -> Result<Self> {
        enable_raw_mode().context("enabling raw mode")?;
        // From here on a failed step is undone by Drop.
        let mut guard = Self {
            out,
            mouse,
            restored: false,
        };
        execute!(guard.out, EnterAlternateScreen).context("entering alternate screen")?;
        if mouse {
            execute!(guard.out, EnableMouseCapture).context("enabling mouse capture")?;
        }
        Ok(guard)
    }

    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        let raw = disable_raw_mode().context("disabling raw mode");
        if self.mouse {
            execute!(self.out, DisableMouseCapture).context("disabling mouse capture")?;
        }
        execute!(self.out, LeaveAlternateScreen, Show).context("leaving alternate screen")?;
        raw
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::error!("{err:?}");
        }
    }
}

/// Outcome of a session: a run error wins over a restore error.
pub fn session_result(run: Result<()>, restore: Result<()>) -> Result<()> {
    run.context("running pageshell")?;
    restore
}

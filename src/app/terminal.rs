//! Terminal session guard.
//!
//! Entering a session switches the terminal to raw mode, the alternate
//! screen, a hidden cursor and mouse capture. Dropping the guard restores
//! everything, so the terminal comes back even on a panic or an early
//! return.

use std::io;

use crossterm::{cursor, event, execute, terminal};

/// RAII handle for the fullscreen terminal state.
pub struct TerminalSession;

impl TerminalSession {
    /// Enter raw mode, the alternate screen and mouse capture.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        Ok(Self)
    }

    /// Current terminal size in cells.
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

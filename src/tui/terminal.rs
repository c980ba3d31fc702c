use std::io;

use anyhow::Result;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Owns the raw-mode alternate screen for the guess prompt.
///
/// Focus reporting is switched on so the prompt sees blur and focus events.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    restored: bool,
}

impl TerminalManager {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self { terminal, restored: false })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<io::Stdout>> {
        &mut self.terminal
    }

    /// Restore terminal to normal mode, reporting any failure.
    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        // Best effort; we may be unwinding
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

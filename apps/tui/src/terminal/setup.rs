use color_eyre::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};

/// Raw mode plus alternate screen. Anything done before a failure is undone.
pub fn setup() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().map_err(|e| color_eyre::eyre::eyre!("Failed to enable raw mode: {e}"))?;

    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
        let _ = disable_raw_mode();
        return Err(color_eyre::eyre::eyre!(
            "Failed to enter alternate screen: {e}"
        ));
    }

    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(mut terminal) => {
            if let Err(e) = terminal.clear() {
                log::warn!("Failed to clear terminal: {e}");
            }
            Ok(terminal)
        }
        Err(e) => {
            cleanup();
            Err(color_eyre::eyre::eyre!("Failed to create terminal: {e}"))
        }
    }
}

/// Restore the terminal, logging rather than failing on each step
pub fn cleanup() {
    let mut stdout_handle = stdout();

    if let Err(e) = execute!(stdout_handle, cursor::Show) {
        log::warn!("Failed to show cursor: {e}");
    }
    if let Err(e) = execute!(stdout_handle, LeaveAlternateScreen) {
        log::warn!("Failed to leave alternate screen: {e}");
    }
    if let Err(e) = disable_raw_mode() {
        log::warn!("Failed to disable raw mode: {e}");
    }
}

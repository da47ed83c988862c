//! Terminal setup and teardown.

use std::io;
use std::io::Stdout;
use std::io::stdout;
use std::panic;

use crossterm::ExecutableCommand;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub(crate) type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen. A panic restores the terminal
/// before the previous hook reports it, and so does a failure partway
/// through setup.
pub(crate) fn init() -> io::Result<Tui> {
    let hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        hook(info);
    }));

    enable_raw_mode()?;
    undo_on_error(enter, restore)
}

fn enter() -> io::Result<Tui> {
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;
    Ok(terminal)
}

/// Run `step`; if it fails, run `undo` and return the step's error.
fn undo_on_error<T>(
    step: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    step().inspect_err(|e| {
        if let Err(undo_err) = undo() {
            tracing::warn!("failed to restore terminal after setup error ({e}): {undo_err}");
        }
    })
}

pub(crate) fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn failed_setup_is_undone() {
        let undone = Cell::new(false);
        let result: io::Result<()> = undo_on_error(
            || Err(io::Error::other("no alternate screen")),
            || {
                undone.set(true);
                Err(io::Error::other("still raw"))
            },
        );
        assert_eq!(result.unwrap_err().to_string(), "no alternate screen");
        assert!(undone.get());
    }

    #[test]
    fn successful_setup_is_kept() {
        let undone = Cell::new(false);
        let result = undo_on_error(
            || Ok(7),
            || {
                undone.set(true);
                Ok(())
            },
        );
        assert_eq!(result.unwrap(), 7);
        assert!(!undone.get());
    }
}

use crate::config::TuiConfig;
use crate::error::SetupError;
use crossterm::{cursor, execute, terminal};
use std::io;
use std::panic;
use std::sync::Once;
use tracing::error;

static HOOK: Once = Once::new();

pub fn terminal_size() -> Result<(usize, usize), SetupError> {
    let (w, h) = terminal::size().map_err(|e| SetupError::Backend(e.to_string()))?;
    Ok((w as usize, h as usize))
}

pub fn check_size(width: usize, height: usize, config: &TuiConfig) -> Result<(), SetupError> {
    if width < config.min_width || height < config.min_height {
        return Err(SetupError::TerminalTooSmall {
            width,
            height,
            min_width: config.min_width,
            min_height: config.min_height,
        });
    }
    Ok(())
}

// best effort: leave raw mode and the alternate screen, show the cursor
pub fn restore_terminal() {
    let _ = terminal::disable_raw_mode();
    let _ = execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show);
}

/// Register the shutdown hook once. A panic anywhere restores the terminal
/// and logs before the previous hook prints the report.
pub fn install_shutdown_hook() {
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |report| {
            restore_terminal();
            error!(panic = %report, "lazypm aborted");
            previous(report);
        }));
    });
}

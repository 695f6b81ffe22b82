//! Interactive terminal dashboard.
//!
//! Single-threaded event loop: draw, poll for input with a 100 ms timeout,
//! apply the resulting action. Predictions run inline; one submission is
//! fully processed before the next keypress is handled.

pub mod app;
pub mod input;
pub mod ui;

pub use app::App;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use aqisense_core::AqiModel;

/// Set up the terminal for TUI rendering.
///
/// Enables raw mode and switches to the alternate screen buffer.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application with the given model.
pub fn run(model: AqiModel) -> Result<()> {
    let mut app = App::new(model);
    let mut terminal = setup_terminal()?;

    let result = run_event_loop(&mut terminal, &mut app);

    restore_terminal()?;
    result
}

/// Main event loop for the TUI.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while !app.should_quit {
        app.clean_expired_status();

        terminal.draw(|f| ui::draw(f, app))?;

        // Poll for keyboard events with timeout
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let action = input::handle_key(key.code);
            input::apply_action(app, action);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_terminal_functions_exist() {
        // Actual terminal tests require a real terminal
        let _ = restore_terminal;
        let _ = setup_terminal;
    }

    #[test]
    fn test_input_handling_quit() {
        let action = input::handle_key(KeyCode::Char('q'));
        assert_eq!(action, input::Action::Quit);
    }

    #[test]
    fn test_input_handling_submit() {
        let action = input::handle_key(KeyCode::Enter);
        assert_eq!(action, input::Action::Submit);
    }
}

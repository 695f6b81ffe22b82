//! Keyboard input handling for the TUI.
//!
//! Translates key events into high-level actions and applies them to the
//! application state.
//!
//! # Key Bindings
//!
//! | Key             | Action                  |
//! |-----------------|-------------------------|
//! | `q` / `Esc`     | Quit                    |
//! | `↓` / `j` / Tab | Select next field       |
//! | `↑` / `k`       | Select previous field   |
//! | `→` / `l`       | Increase value one step |
//! | `←` / `h`       | Decrease value one step |
//! | `PageUp`        | Increase ten steps      |
//! | `PageDown`      | Decrease ten steps      |
//! | `Enter`         | Predict                 |
//! | `e`             | Export history to CSV   |
//! | `r`             | Reset form to defaults  |

use crossterm::event::KeyCode;

use super::app::App;

/// User actions that can be triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Select the next form field.
    SelectNext,
    /// Select the previous form field.
    SelectPrevious,
    /// Increase the selected value by one step.
    Increase,
    /// Decrease the selected value by one step.
    Decrease,
    /// Increase the selected value by ten steps.
    IncreaseCoarse,
    /// Decrease the selected value by ten steps.
    DecreaseCoarse,
    /// Run a prediction for the current form.
    Submit,
    /// Export the session history to CSV.
    Export,
    /// Reset the form to defaults.
    Reset,
    /// No action for this key.
    None,
}

/// Map a key press to an action.
pub fn handle_key(code: KeyCode) -> Action {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => Action::SelectNext,
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => Action::SelectPrevious,
        KeyCode::Right | KeyCode::Char('l') => Action::Increase,
        KeyCode::Left | KeyCode::Char('h') => Action::Decrease,
        KeyCode::PageUp => Action::IncreaseCoarse,
        KeyCode::PageDown => Action::DecreaseCoarse,
        KeyCode::Enter => Action::Submit,
        KeyCode::Char('e') => Action::Export,
        KeyCode::Char('r') => Action::Reset,
        _ => Action::None,
    }
}

/// Apply an action to the application state.
pub fn apply_action(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::SelectNext => app.select_next(),
        Action::SelectPrevious => app.select_previous(),
        Action::Increase => app.adjust_selected(1.0),
        Action::Decrease => app.adjust_selected(-1.0),
        Action::IncreaseCoarse => app.adjust_selected(10.0),
        Action::DecreaseCoarse => app.adjust_selected(-10.0),
        Action::Submit => app.submit(),
        Action::Export => app.export_history(),
        Action::Reset => app.reset(),
        Action::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqisense_core::AqiModel;

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key(KeyCode::Char('q')), Action::Quit);
        assert_eq!(handle_key(KeyCode::Esc), Action::Quit);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(handle_key(KeyCode::Down), Action::SelectNext);
        assert_eq!(handle_key(KeyCode::Char('j')), Action::SelectNext);
        assert_eq!(handle_key(KeyCode::Up), Action::SelectPrevious);
        assert_eq!(handle_key(KeyCode::Char('k')), Action::SelectPrevious);
    }

    #[test]
    fn test_adjustment_keys() {
        assert_eq!(handle_key(KeyCode::Right), Action::Increase);
        assert_eq!(handle_key(KeyCode::Left), Action::Decrease);
        assert_eq!(handle_key(KeyCode::PageUp), Action::IncreaseCoarse);
        assert_eq!(handle_key(KeyCode::PageDown), Action::DecreaseCoarse);
    }

    #[test]
    fn test_unmapped_key_is_none() {
        assert_eq!(handle_key(KeyCode::Char('z')), Action::None);
        assert_eq!(handle_key(KeyCode::F(1)), Action::None);
    }

    #[test]
    fn test_apply_submit_records_prediction() {
        let mut app = App::new(AqiModel::demo());
        apply_action(&mut app, Action::Submit);
        assert_eq!(app.history.len(), 1);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_apply_quit_sets_flag() {
        let mut app = App::new(AqiModel::demo());
        apply_action(&mut app, Action::Quit);
        assert!(app.should_quit);
    }
}

use crate::app::AppState;
use crate::domain::{Mode, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_task_form_mode(app, key),
        UiMode::EditingSettings => handle_settings_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Start/pause the countdown
        KeyCode::Char(' ') => {
            app.toggle_timer(Instant::now());
            Ok(false)
        }

        // Reset the current phase
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_timer();
            Ok(false)
        }

        // Mode switches
        KeyCode::Char('1') => {
            app.change_mode(Mode::Focus);
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.change_mode(Mode::ShortBreak);
            Ok(false)
        }
        KeyCode::Char('3') => {
            app.change_mode(Mode::LongBreak);
            Ok(false)
        }

        // Task selection
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Toggle completion on the selected task
        KeyCode::Enter => {
            app.toggle_selected_task();
            Ok(false)
        }

        // Delete the selected task
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.delete_selected_task();
            Ok(false)
        }

        // Add a task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // Open the settings form
        KeyCode::Char('o') | KeyCode::Char('O') => {
            app.open_settings();
            Ok(false)
        }

        // Fetch a motivation quote
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.request_motivation();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the add-task form is open
fn handle_task_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_task_form(),
        KeyCode::Esc => app.cancel_task_form(),
        KeyCode::Backspace => app.task_form_backspace(),
        KeyCode::Char(c) => app.task_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys while the settings form is open
fn handle_settings_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_settings_form(),
        KeyCode::Esc => app.cancel_settings_form(),
        KeyCode::Tab | KeyCode::Down => app.settings_form_next_field(),
        KeyCode::Backspace => app.settings_form_backspace(),
        // Non-digit characters are dropped inside the app
        KeyCode::Char(c) => app.settings_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Settings;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn create_test_app() -> AppState {
        AppState::new(Settings::default())
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))).unwrap());
        assert!(handle_key(&mut app, key(KeyCode::Esc)).unwrap());
        assert!(!handle_key(&mut app, key(KeyCode::Char('z'))).unwrap());
    }

    #[test]
    fn test_space_toggles_timer() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(app.countdown.is_running());
        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(!app.countdown.is_running());
    }

    #[test]
    fn test_mode_switch_keys() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.countdown.mode(), Mode::ShortBreak);
        handle_key(&mut app, key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.countdown.mode(), Mode::LongBreak);
        handle_key(&mut app, key(KeyCode::Char('1'))).unwrap();
        assert_eq!(app.countdown.mode(), Mode::Focus);
    }

    #[test]
    fn test_add_task_flow() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        handle_key(&mut app, key(KeyCode::Char('h'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('i'))).unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.tasks.as_slice()[0].text, "hi");
    }

    #[test]
    fn test_esc_cancels_task_form_without_quitting() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        let quit = handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(!quit);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_settings_flow_filters_input() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('o'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::EditingSettings);

        // Clear the seeded "25" then type "1x0" -> only digits land
        handle_key(&mut app, key(KeyCode::Backspace)).unwrap();
        handle_key(&mut app, key(KeyCode::Backspace)).unwrap();
        handle_key(&mut app, key(KeyCode::Char('1'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('0'))).unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.countdown.settings().focus_secs, 600);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }
}

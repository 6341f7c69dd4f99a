mod helpers;

pub use helpers::{wrap_decrement, wrap_increment};

use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_input(app: &mut App, key: KeyCode) {
    if app.show_popup {
        match key {
            KeyCode::Esc | KeyCode::Enter => app.show_popup = false,
            KeyCode::Char('q') => app.running = false,
            KeyCode::Tab => {
                app.focus_next_marker();
            }
            KeyCode::BackTab => {
                app.focus_previous_marker();
            }
            _ => {}
        }
        return;
    }

    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Up | KeyCode::Char('k') => app.move_owner_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_owner_cursor_down(),
        KeyCode::Char(' ') => app.toggle_owner_under_cursor(),
        KeyCode::Char('c') => app.clear_filter(),
        KeyCode::Tab => app.focus_next_marker(),
        KeyCode::BackTab => app.focus_previous_marker(),
        KeyCode::Enter => app.open_popup(),
        KeyCode::Esc => app.focused_marker = None,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::loaded_app;

    #[test]
    fn test_space_toggles_and_c_clears() {
        let mut app = loaded_app();

        handle_input(&mut app, KeyCode::Down);
        handle_input(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.marker_count(), 1);

        handle_input(&mut app, KeyCode::Char('c'));
        assert_eq!(app.controller.marker_count(), 2);
        assert!(app.controller.selection().is_empty());
    }

    #[test]
    fn test_popup_opens_on_focused_marker_and_closes_on_esc() {
        let mut app = loaded_app();

        handle_input(&mut app, KeyCode::Enter);
        assert!(!app.show_popup);

        handle_input(&mut app, KeyCode::Tab);
        handle_input(&mut app, KeyCode::Enter);
        assert!(app.show_popup);

        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.show_popup);
        assert!(app.running);
    }

    #[test]
    fn test_q_quits() {
        let mut app = loaded_app();
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}

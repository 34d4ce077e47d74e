use crate::app::state::App;
use crossterm::event::KeyCode;

/// Handles the help popup keys; returns true when the key was consumed.
pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::F(1) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if matches!(key, KeyCode::Esc | KeyCode::Char('?' | 'q')) {
            app.show_help = false;
        }
        return true;
    }

    false
}

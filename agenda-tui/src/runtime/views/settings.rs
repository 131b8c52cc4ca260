use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_settings_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.settings_next(),
        KeyCode::Up | KeyCode::Char('k') => app.settings_previous(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected_setting(),
        _ => {}
    }
}

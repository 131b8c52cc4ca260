use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::{enqueue_action, reload_if};

pub(super) fn handle_daily_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.focus_next_activity(),
        KeyCode::Up | KeyCode::Char('k') => app.focus_previous_activity(),
        KeyCode::Right | KeyCode::Char('l') => reload_if(app.next_day(), action_tx),
        KeyCode::Left | KeyCode::Char('h') => reload_if(app.previous_day(), action_tx),
        KeyCode::Char('t') | KeyCode::Char('T') => reload_if(app.go_to_today(), action_tx),
        KeyCode::Char('g') | KeyCode::Char('/') => app.begin_date_input(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.open_create_form(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_form(),
        KeyCode::Char(' ') | KeyCode::Char('s') => {
            if let Some((id, next)) = app.toggle_focused_status() {
                enqueue_action(action_tx, Action::ToggleStatus { id, next });
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('o') | KeyCode::Esc => reload_if(app.return_to_own_agenda(), action_tx),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            enqueue_action(action_tx, Action::ReloadActivities);
        }
        _ => {}
    }
}

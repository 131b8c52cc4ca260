use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::{enqueue_action, reload_if};

pub(super) fn handle_personnel_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.personnel_next(),
        KeyCode::Up | KeyCode::Char('k') => app.personnel_previous(),
        KeyCode::Enter => reload_if(app.view_selected_personnel(), action_tx),
        KeyCode::Char('o') => reload_if(app.return_to_own_agenda(), action_tx),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            enqueue_action(action_tx, Action::LoadPersonnel);
        }
        _ => {}
    }
}

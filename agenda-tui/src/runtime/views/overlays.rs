use crate::app::{App, ConfirmIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::{enqueue_action, reload_if};

pub(super) fn handle_confirm_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            match app.take_confirmed() {
                Some(ConfirmIntent::DeleteActivity { id }) => {
                    enqueue_action(action_tx, Action::ConfirmDelete { id });
                }
                Some(ConfirmIntent::Logout) => app.logout(),
                None => {}
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_overlay(),
        _ => {}
    }
}

pub(super) fn handle_date_input_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Esc => app.cancel_date_input(),
        KeyCode::Enter => {
            if let Some(needs_reload) = app.confirm_date_input() {
                reload_if(needs_reload, action_tx);
            }
        }
        KeyCode::Backspace => app.date_input_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.date_input_char(c);
        }
        _ => {}
    }
}

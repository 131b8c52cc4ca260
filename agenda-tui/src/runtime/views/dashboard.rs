use crate::app::{App, Section};
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::ActionTx;
use super::reload_if;

pub(super) fn handle_dashboard_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Right | KeyCode::Char('l') => reload_if(app.next_day(), action_tx),
        KeyCode::Left | KeyCode::Char('h') => reload_if(app.previous_day(), action_tx),
        KeyCode::Char('t') | KeyCode::Char('T') => reload_if(app.go_to_today(), action_tx),
        KeyCode::Enter => app.navigate_to(Section::DailyActivities),
        KeyCode::Char('n') | KeyCode::Char('N') => app.open_create_form(),
        _ => {}
    }
}

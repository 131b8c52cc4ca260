use crate::agenda::validation::FormField;
use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let on_project = app
        .form_mut()
        .is_some_and(|form| form.focused_field == FormField::Project);

    match key.code {
        KeyCode::Esc => app.close_overlay(),
        KeyCode::Tab | KeyCode::Down => app.form_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form_previous_field(),
        KeyCode::Char('s') | KeyCode::Char('S')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            submit(app, action_tx);
        }
        KeyCode::Enter if on_project => app.open_project_picker(),
        KeyCode::Enter => submit(app, action_tx),
        KeyCode::Backspace | KeyCode::Delete if on_project => app.form_clear_project(),
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Left => app.form_move_cursor(true),
        KeyCode::Right => app.form_move_cursor(false),
        KeyCode::Home => app.form_cursor_home_end(true),
        KeyCode::End => app.form_cursor_home_end(false),
        KeyCode::Char(' ') if on_project => app.open_project_picker(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_input_char(c);
        }
        _ => {}
    }
}

fn submit(app: &mut App, action_tx: &ActionTx) {
    if let Some(submission) = app.submit_form() {
        enqueue_action(action_tx, Action::SaveForm(submission));
    }
}

pub(super) fn handle_picker_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.picker_cancel(),
        KeyCode::Enter => app.picker_confirm(),
        KeyCode::Down => app.picker_next(),
        KeyCode::Up => app.picker_previous(),
        KeyCode::Backspace => app.picker_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.picker_input_char(c);
        }
        _ => {}
    }
}

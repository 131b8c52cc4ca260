use crate::app::{App, Overlay, Section};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod daily;
mod dashboard;
mod form;
mod overlays;
mod personnel;
mod settings;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

/// Queue a reload when a date or owner change left the loaded range.
fn reload_if(needed: bool, action_tx: &ActionTx) {
    if needed {
        enqueue_action(action_tx, Action::ReloadActivities);
    }
}

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.overlay {
        Some(Overlay::ActivityForm(_)) => return form::handle_form_key(key, app, action_tx),
        Some(Overlay::ProjectPicker(_)) => return form::handle_picker_key(key, app),
        Some(Overlay::Confirm(_)) => return overlays::handle_confirm_key(key, app, action_tx),
        None => {}
    }

    if app.date_input.is_some() {
        return overlays::handle_date_input_key(key, app, action_tx);
    }

    if handle_shell_key(key, app) {
        return;
    }

    match app.section {
        Section::Dashboard => dashboard::handle_dashboard_key(key, app, action_tx),
        Section::DailyActivities => daily::handle_daily_key(key, app, action_tx),
        Section::Personnel => personnel::handle_personnel_key(key, app, action_tx),
        Section::Settings => settings::handle_settings_key(key, app),
        Section::Projects
        | Section::Assignments
        | Section::Reports
        | Section::Statistics
        | Section::Profile => {}
    }
}

/// Keys available in every section. Returns true when the key was consumed.
fn handle_shell_key(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Tab => app.next_section(),
        KeyCode::BackTab => app.previous_section(),
        KeyCode::Char('b') | KeyCode::Char('B') => app.toggle_sidebar(),
        KeyCode::Char('D') => app.toggle_dark_mode(),
        KeyCode::Char('F') => app.toggle_large_font(),
        KeyCode::Char('L') => app.request_logout(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char(c @ '1'..='9') => {
            let sections = app.visible_sections();
            match c.to_digit(10).and_then(|d| sections.get(d as usize - 1)) {
                Some(section) => app.navigate_to(*section),
                None => return false,
            }
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::super::action_queue::channel;
    use super::*;
    use crate::app::test_support::*;
    use crate::types::{ActivityStatus, Role};
    use time::macros::time;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) -> Vec<Action> {
        let (tx, mut rx) = channel();
        handle_key(key(code), app, &tx);
        let mut actions = Vec::new();
        while let Ok(action) = rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    fn daily_app(role: Role) -> (App, tempfile::TempDir) {
        let (mut app, dir) = test_app(role);
        app.set_activities(
            vec![
                activity("a", "u-1", TODAY, time!(9:00), time!(10:00), ActivityStatus::Draft),
                activity("b", "u-1", TODAY, time!(11:00), time!(12:00), ActivityStatus::Submitted),
            ],
            app.wanted_range(),
        );
        app.navigate_to(Section::DailyActivities);
        (app, dir)
    }

    #[test]
    fn number_keys_jump_to_visible_sections() {
        let (mut app, _dir) = test_app(Role::Employee);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.section, Section::DailyActivities);
        // Employees have eight visible sections.
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.section, Section::DailyActivities);
        press(&mut app, KeyCode::Char('8'));
        assert_eq!(app.section, Section::Settings);
    }

    #[test]
    fn space_queues_toggle_for_own_draft() {
        let (mut app, _dir) = daily_app(Role::Employee);
        press(&mut app, KeyCode::Down);
        let actions = press(&mut app, KeyCode::Char(' '));
        assert_eq!(
            actions,
            vec![Action::ToggleStatus {
                id: "a".to_string(),
                next: ActivityStatus::Submitted,
            }]
        );
    }

    #[test]
    fn rejected_toggle_queues_nothing() {
        let (mut app, _dir) = daily_app(Role::Employee);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert!(press(&mut app, KeyCode::Char(' ')).is_empty());
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn leaving_loaded_range_queues_reload() {
        let (mut app, _dir) = daily_app(Role::Employee);
        assert!(press(&mut app, KeyCode::Left).is_empty());

        app.begin_date_input();
        for c in "2020-01-01".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(press(&mut app, KeyCode::Enter), vec![Action::ReloadActivities]);
    }

    #[test]
    fn delete_confirmation_queues_delete() {
        let (mut app, _dir) = daily_app(Role::Employee);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('x'));
        assert!(app.has_overlay());

        let actions = press(&mut app, KeyCode::Char('y'));
        assert_eq!(
            actions,
            vec![Action::ConfirmDelete {
                id: "a".to_string()
            }]
        );
        assert!(!app.has_overlay());
    }

    #[test]
    fn cancelled_confirmation_queues_nothing() {
        let (mut app, _dir) = daily_app(Role::Employee);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('x'));
        assert!(press(&mut app, KeyCode::Esc).is_empty());
        assert!(!app.has_overlay());
        assert!(app.running);
    }

    #[test]
    fn form_submit_queues_save_and_closes() {
        let (mut app, _dir) = daily_app(Role::Employee);
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Tab);
        for c in "13:00".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        for c in "14:15".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        for c in "Sprint review".chars() {
            press(&mut app, KeyCode::Char(c));
        }

        let actions = press(&mut app, KeyCode::Enter);
        assert!(matches!(
            actions.as_slice(),
            [Action::SaveForm(submission)] if submission.activity.end_time == time!(14:15)
        ));
        assert!(!app.has_overlay());
    }

    #[test]
    fn invalid_form_submit_queues_nothing() {
        let (mut app, _dir) = daily_app(Role::Employee);
        press(&mut app, KeyCode::Char('n'));
        assert!(press(&mut app, KeyCode::Enter).is_empty());
        assert!(app.form_mut().is_some());
    }

    #[test]
    fn q_inside_form_is_typed_not_quit() {
        let (mut app, _dir) = daily_app(Role::Employee);
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.form_mut().unwrap().date.value, "2023-06-10q");
    }
}

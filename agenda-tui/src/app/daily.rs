use super::*;
use crate::agenda::permissions::{authorize_delete, authorize_toggle};
use crate::agenda::{filter_by_date, DaySummary};
use crate::types::ActivityStatus;

impl App {
    /// Activities of the shown agenda on `selected_date`, in start-time order.
    pub fn day_activities(&self) -> Vec<&Activity> {
        filter_by_date(&self.activities, self.selected_date)
    }

    pub fn day_summary(&self) -> DaySummary {
        DaySummary::for_date(&self.activities, self.selected_date)
    }

    pub fn focused_activity(&self) -> Option<&Activity> {
        let idx = self.focused_activity_index?;
        self.day_activities().get(idx).copied()
    }

    pub fn focus_next_activity(&mut self) {
        let len = self.day_activities().len();
        if len == 0 {
            self.focused_activity_index = None;
            return;
        }
        self.focused_activity_index = Some(match self.focused_activity_index {
            Some(idx) if idx + 1 < len => idx + 1,
            Some(idx) => idx,
            None => 0,
        });
        self.ensure_focus_visible();
    }

    pub fn focus_previous_activity(&mut self) {
        let len = self.day_activities().len();
        if len == 0 {
            self.focused_activity_index = None;
            return;
        }
        self.focused_activity_index = Some(match self.focused_activity_index {
            Some(idx) => idx.saturating_sub(1),
            None => len - 1,
        });
        self.ensure_focus_visible();
    }

    /// Keep the focus index inside the current day list after data or date changes.
    pub(crate) fn clamp_focus(&mut self) {
        let len = self.day_activities().len();
        self.focused_activity_index = match self.focused_activity_index {
            _ if len == 0 => None,
            Some(idx) if idx >= len => Some(len - 1),
            other => other,
        };
        if self.day_scroll >= len {
            self.day_scroll = len.saturating_sub(1);
        }
    }

    fn ensure_focus_visible(&mut self) {
        let Some(idx) = self.focused_activity_index else {
            return;
        };
        let rows_per_item = self.rows_per_activity();
        let visible = (self.day_view_height / rows_per_item).max(1);
        if idx < self.day_scroll {
            self.day_scroll = idx;
        } else if idx >= self.day_scroll + visible {
            self.day_scroll = idx + 1 - visible;
        }
    }

    /// List rows each activity takes; large text double-spaces the list.
    pub fn rows_per_activity(&self) -> usize {
        if self.preferences.large_font {
            4
        } else {
            2
        }
    }

    /// Check the toggle and return what to send. Rejections become error notifications.
    pub fn toggle_focused_status(&mut self) -> Option<(String, ActivityStatus)> {
        let activity = self.focused_activity()?;
        let id = activity.id.clone();
        match authorize_toggle(activity, &self.current_user) {
            Ok(next) => Some((id, next)),
            Err(e) => {
                self.notify_error(format!("Cannot change status: {e}"));
                None
            }
        }
    }

    /// Open the delete confirmation for the focused activity, if allowed.
    pub fn request_delete(&mut self) {
        let Some(activity) = self.focused_activity() else {
            return;
        };
        let id = activity.id.clone();
        let description = activity.description.clone();
        if let Err(e) = authorize_delete(activity, &self.current_user) {
            self.notify_error(format!("Cannot delete: {e}"));
            return;
        }

        self.overlay = Some(Overlay::Confirm(ConfirmState {
            title: "Delete activity".to_string(),
            message: format!("Delete \"{description}\"? This cannot be undone."),
            confirm_label: "Delete".to_string(),
            cancel_label: "Cancel".to_string(),
            intent: ConfirmIntent::DeleteActivity { id },
        }));
    }

    /// Close the confirmation and hand back what was confirmed.
    pub fn take_confirmed(&mut self) -> Option<ConfirmIntent> {
        match self.overlay.take() {
            Some(Overlay::Confirm(state)) => Some(state.intent),
            other => {
                self.overlay = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::types::Role;
    use time::macros::time;

    fn seeded(role: Role) -> (App, tempfile::TempDir) {
        let (mut app, dir) = test_app(role);
        let yesterday = TODAY - Duration::days(1);
        app.set_activities(
            vec![
                activity("late", "u-1", TODAY, time!(14:00), time!(16:00), ActivityStatus::Draft),
                activity("early", "u-1", TODAY, time!(9:00), time!(11:00), ActivityStatus::Submitted),
                activity("old", "u-1", yesterday, time!(9:00), time!(10:00), ActivityStatus::Draft),
                activity("peer", "u-2", TODAY, time!(8:00), time!(9:00), ActivityStatus::Draft),
            ],
            app.wanted_range(),
        );
        (app, dir)
    }

    #[test]
    fn day_list_holds_exactly_the_selected_date() {
        let (mut app, _dir) = seeded(Role::Employee);
        let ids: Vec<_> = app.day_activities().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["peer", "early", "late"]);

        app.select_date(TODAY - Duration::days(1));
        let ids: Vec<_> = app.day_activities().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["old"]);
    }

    #[test]
    fn employee_cannot_reopen_submitted_activity() {
        let (mut app, _dir) = seeded(Role::Employee);
        app.focused_activity_index = Some(1);
        assert_eq!(app.focused_activity().map(|a| a.id.as_str()), Some("early"));

        assert_eq!(app.toggle_focused_status(), None);
        assert_eq!(app.notifications.len(), 1);
        assert_eq!(app.notifications[0].kind, NotificationKind::Error);
    }

    #[test]
    fn employee_can_submit_own_draft() {
        let (mut app, _dir) = seeded(Role::Employee);
        app.focused_activity_index = Some(2);
        assert_eq!(
            app.toggle_focused_status(),
            Some(("late".to_string(), ActivityStatus::Submitted))
        );
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn supervisor_can_reopen_submitted_activity() {
        let (mut app, _dir) = seeded(Role::Supervisor);
        app.focused_activity_index = Some(1);
        assert_eq!(
            app.toggle_focused_status(),
            Some(("early".to_string(), ActivityStatus::Draft))
        );
    }

    #[test]
    fn employee_cannot_touch_someone_elses_activity() {
        let (mut app, _dir) = seeded(Role::Employee);
        app.focused_activity_index = Some(0);
        assert_eq!(app.toggle_focused_status(), None);
        app.request_delete();
        assert!(app.overlay.is_none());
        assert_eq!(app.notifications.len(), 2);
    }

    #[test]
    fn delete_opens_confirmation_with_labels() {
        let (mut app, _dir) = seeded(Role::Employee);
        app.focused_activity_index = Some(2);
        app.request_delete();
        match &app.overlay {
            Some(Overlay::Confirm(state)) => {
                assert_eq!(state.confirm_label, "Delete");
                assert_eq!(state.cancel_label, "Cancel");
                assert_eq!(
                    state.intent,
                    ConfirmIntent::DeleteActivity {
                        id: "late".to_string()
                    }
                );
            }
            other => panic!("unexpected overlay: {other:?}"),
        }

        assert_eq!(
            app.take_confirmed(),
            Some(ConfirmIntent::DeleteActivity {
                id: "late".to_string()
            })
        );
        assert!(app.overlay.is_none());
    }

    #[test]
    fn focus_stays_in_bounds() {
        let (mut app, _dir) = seeded(Role::Employee);
        for _ in 0..5 {
            app.focus_next_activity();
        }
        assert_eq!(app.focused_activity_index, Some(2));
        app.remove_activity("late");
        assert_eq!(app.focused_activity_index, Some(1));
        app.select_date(TODAY + Duration::days(1));
        assert_eq!(app.focused_activity_index, None);
    }

    #[test]
    fn summary_counts_submitted_hours_only() {
        let (app, _dir) = seeded(Role::Employee);
        let summary = app.day_summary();
        assert_eq!(summary.hours, 2.0);
        assert_eq!(summary.submitted, 1);
        assert_eq!(summary.drafts, 2);
    }
}

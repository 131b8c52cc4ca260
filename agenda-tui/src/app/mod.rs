use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use time::{Date, Duration};

use crate::agenda::{
    overlapping_ids, week_bounds, weekly_daily_stats, weekly_project_stats, AgendaError, DayStat,
    ProjectStat,
};
use crate::preferences::{PreferenceStore, Preferences};
use crate::types::{Activity, Project, User};

mod daily;
mod dashboard;
mod form;
mod navigation;
mod selection;
mod settings;
mod state;

pub use form::FormSubmission;
pub use state::{
    Category, ConfirmIntent, ConfirmState, FormState, Notification, NotificationKind, Overlay,
    ProjectPickerState, Section, SettingsItem, TextInput, MAX_NOTIFICATIONS, MIN_LOADING_DISPLAY,
    STARTUP_LOADING_DISPLAY,
};

/// Weeks of history loaded before the selected date's week.
const HISTORY_WEEKS: i64 = 4;

pub struct App {
    pub running: bool,
    pub today: Date,

    // Who is acting, and whose agenda is shown
    pub current_user: User,
    pub viewing_user: Option<User>,

    // Remote data
    pub projects: Vec<Project>,
    pub personnel: Vec<User>,
    pub activities: Vec<Activity>,
    pub loaded_range: Option<(Date, Date)>,
    pub overlapping_activity_ids: HashSet<String>,

    // Daily list
    pub selected_date: Date,
    pub focused_activity_index: Option<usize>,
    pub day_scroll: usize,
    pub day_view_height: usize, // Last-rendered inner height (updated by renderer each frame)
    pub date_input: Option<TextInput>, // Some(_) while typing a date

    // Shell
    pub section: Section,
    pub overlay: Option<Overlay>,
    pub personnel_index: usize,
    pub settings_index: usize,

    // Preferences
    pub preferences: Preferences,
    preference_store: PreferenceStore,

    pub notifications: VecDeque<Notification>,

    // Loading indicator
    pub is_loading: bool,
    loading_until: Option<Instant>,
    pub throbber_state: throbber_widgets_tui::ThrobberState,

    // Statistics cache, recomputed whenever activities or the selected week change
    pub weekly_stats_cache: Vec<ProjectStat>,
    pub weekly_daily_stats_cache: Vec<DayStat>,
}

impl App {
    pub fn new(
        current_user: User,
        preferences: Preferences,
        preference_store: PreferenceStore,
        today: Date,
    ) -> Self {
        Self {
            running: true,
            today,
            current_user,
            viewing_user: None,
            projects: Vec::new(),
            personnel: Vec::new(),
            activities: Vec::new(),
            loaded_range: None,
            overlapping_activity_ids: HashSet::new(),
            selected_date: today,
            focused_activity_index: None,
            day_scroll: 0,
            day_view_height: 0,
            date_input: None,
            section: Section::Dashboard,
            overlay: None,
            personnel_index: 0,
            settings_index: 0,
            preferences,
            preference_store,
            notifications: VecDeque::new(),
            is_loading: false,
            loading_until: None,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            weekly_stats_cache: Vec::new(),
            weekly_daily_stats_cache: Vec::new(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn is_supervisor(&self) -> bool {
        self.current_user.is_supervisor()
    }

    /// The user whose agenda is on screen.
    pub fn agenda_owner(&self) -> &User {
        self.viewing_user.as_ref().unwrap_or(&self.current_user)
    }

    /// `Some(id)` when a supervisor is looking at someone else's agenda.
    pub fn viewing_user_id(&self) -> Option<String> {
        self.viewing_user.as_ref().map(|u| u.id.clone())
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    // Loading indicator

    /// Spin the throbber for at least `min` from `now`. Overlapping loads
    /// extend the window.
    pub fn begin_loading(&mut self, now: Instant, min: std::time::Duration) {
        let until = now + min;
        self.is_loading = true;
        self.loading_until = Some(self.loading_until.map_or(until, |u| u.max(until)));
    }

    /// Called once per frame: advance the throbber and clear the flag once
    /// the window has passed.
    pub fn tick_loading(&mut self, now: Instant) {
        if !self.is_loading {
            return;
        }
        self.throbber_state.calc_next();
        if self.loading_until.map_or(true, |until| now >= until) {
            self.is_loading = false;
            self.loading_until = None;
        }
    }

    // Notifications

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        let message = message.into();
        match kind {
            NotificationKind::Error => tracing::warn!("{message}"),
            _ => tracing::info!("{message}"),
        }
        self.notifications.push_back(Notification {
            kind,
            message,
            created_at: Instant::now(),
        });
        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.pop_front();
        }
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message);
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message);
    }

    pub fn prune_notifications(&mut self, now: Instant) {
        self.notifications.retain(|n| !n.is_expired(now));
    }

    // Loaded data

    /// Date range to fetch so the selected week and the weeks before it are on hand.
    pub fn wanted_range(&self) -> (Date, Date) {
        let (week_start, week_end) = week_bounds(self.selected_date);
        let from = week_start
            .checked_sub(Duration::weeks(HISTORY_WEEKS))
            .unwrap_or(Date::MIN);
        (from, week_end)
    }

    pub fn needs_reload(&self) -> bool {
        match self.loaded_range {
            Some((from, to)) => self.selected_date < from || self.selected_date > to,
            None => true,
        }
    }

    pub fn set_activities(&mut self, activities: Vec<Activity>, range: (Date, Date)) {
        self.activities = activities;
        self.loaded_range = Some(range);
        self.refresh_derived();
    }

    /// Insert or replace an activity returned by the API.
    pub fn upsert_activity(&mut self, activity: Activity) {
        match self.activities.iter_mut().find(|a| a.id == activity.id) {
            Some(existing) => *existing = activity,
            None => self.activities.push(activity),
        }
        self.refresh_derived();
    }

    pub fn remove_activity(&mut self, id: &str) {
        self.activities.retain(|a| a.id != id);
        self.refresh_derived();
    }

    pub fn find_activity(&self, id: &str) -> Result<&Activity, AgendaError> {
        self.activities
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| AgendaError::NotFound(id.to_string()))
    }

    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    pub fn set_personnel(&mut self, personnel: Vec<User>) {
        self.personnel = personnel;
        if self.personnel_index >= self.personnel.len() {
            self.personnel_index = self.personnel.len().saturating_sub(1);
        }
    }

    pub(crate) fn refresh_derived(&mut self) {
        self.overlapping_activity_ids = overlapping_ids(&self.activities);
        self.weekly_stats_cache = weekly_project_stats(&self.activities, self.selected_date);
        self.weekly_daily_stats_cache = weekly_daily_stats(&self.activities, self.selected_date);
        self.clamp_focus();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::types::{ActivityStatus, Role};
    use time::macros::date;
    use time::Time;

    pub const TODAY: Date = date!(2023 - 06 - 10);

    pub fn user(id: &str, role: Role) -> User {
        User {
            id: id.to_string(),
            first_names: "Ana María".to_string(),
            last_name: "Rojas".to_string(),
            role,
        }
    }

    pub fn activity(
        id: &str,
        owner: &str,
        date: Date,
        start: Time,
        end: Time,
        status: ActivityStatus,
    ) -> Activity {
        Activity {
            id: id.to_string(),
            user_id: owner.to_string(),
            date,
            start_time: start,
            end_time: end,
            project_id: Some("p-1".to_string()),
            project_name: Some("Proyecto REX".to_string()),
            description: "Desarrollo de interfaz".to_string(),
            status,
        }
    }

    /// App for `role` whose preferences live in a temp dir kept alive by the caller.
    pub fn test_app(role: Role) -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let defaults = Preferences::defaults(true);
        let store = PreferenceStore::new(dir.path().join("preferences"), defaults);
        let app = App::new(user("u-1", role), defaults, store, TODAY);
        (app, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::types::{ActivityStatus, Role};
    use std::time::Duration as StdDuration;
    use time::macros::time;

    #[test]
    fn notifications_expire_and_are_capped() {
        let (mut app, _dir) = test_app(Role::Employee);
        for i in 0..(MAX_NOTIFICATIONS + 2) {
            app.notify_error(format!("failure {i}"));
        }
        assert_eq!(app.notifications.len(), MAX_NOTIFICATIONS);
        assert_eq!(
            app.notifications.front().map(|n| n.message.as_str()),
            Some("failure 2")
        );

        let later = Instant::now() + StdDuration::from_secs(6);
        app.prune_notifications(later);
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn fresh_notifications_survive_pruning() {
        let (mut app, _dir) = test_app(Role::Employee);
        app.notify_success("Saved");
        app.prune_notifications(Instant::now());
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn reload_needed_only_outside_loaded_range() {
        let (mut app, _dir) = test_app(Role::Employee);
        assert!(app.needs_reload());

        let range = app.wanted_range();
        app.set_activities(vec![], range);
        assert!(!app.needs_reload());

        app.selected_date = range.0 - Duration::days(1);
        assert!(app.needs_reload());
    }

    #[test]
    fn upsert_replaces_existing_and_tracks_overlaps() {
        let (mut app, _dir) = test_app(Role::Employee);
        let a = activity("a", "u-1", TODAY, time!(9:00), time!(11:00), ActivityStatus::Draft);
        let b = activity("b", "u-1", TODAY, time!(12:00), time!(13:00), ActivityStatus::Draft);
        app.set_activities(vec![a, b.clone()], app.wanted_range());
        assert!(app.overlapping_activity_ids.is_empty());

        let mut moved = b;
        moved.start_time = time!(10:30);
        app.upsert_activity(moved);
        assert_eq!(app.activities.len(), 2);
        assert!(app.overlapping_activity_ids.contains("a"));
        assert!(app.overlapping_activity_ids.contains("b"));
    }

    #[test]
    fn missing_activity_is_not_found() {
        let (app, _dir) = test_app(Role::Employee);
        assert_eq!(
            app.find_activity("nope"),
            Err(AgendaError::NotFound("nope".to_string()))
        );
    }
}

use super::*;
use crate::time_utils::{format_date, in_supported_range, parse_date, FIRST_YEAR, LAST_YEAR};

impl App {
    pub fn navigate_to(&mut self, section: Section) {
        if self.section != section {
            tracing::info!("Section: {}", section.title());
        }
        self.section = section;
        self.date_input = None;
    }

    /// Sections the current user may open. Personnel is supervisor-only.
    pub fn visible_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| *s != Section::Personnel || self.is_supervisor())
            .collect()
    }

    pub fn next_section(&mut self) {
        let sections = self.visible_sections();
        let idx = sections.iter().position(|s| *s == self.section).unwrap_or(0);
        self.navigate_to(sections[(idx + 1) % sections.len()]);
    }

    pub fn previous_section(&mut self) {
        let sections = self.visible_sections();
        let idx = sections.iter().position(|s| *s == self.section).unwrap_or(0);
        self.navigate_to(sections[(idx + sections.len() - 1) % sections.len()]);
    }

    /// Badge shown next to a sidebar entry.
    pub fn section_badge(&self, section: Section) -> Option<usize> {
        match section {
            Section::Personnel if self.is_supervisor() && !self.personnel.is_empty() => {
                Some(self.personnel.len())
            }
            _ => None,
        }
    }

    /// Returns true when the new date lies outside the loaded range. Dates
    /// outside the supported years are refused with an error notification.
    pub fn select_date(&mut self, date: Date) -> bool {
        if !in_supported_range(date) {
            self.notify_error(format!(
                "{} is outside the supported years {FIRST_YEAR}-{LAST_YEAR}",
                format_date(date)
            ));
            return false;
        }
        if self.selected_date != date {
            self.selected_date = date;
            self.focused_activity_index = None;
            self.day_scroll = 0;
            self.refresh_derived();
        }
        self.needs_reload()
    }

    pub fn next_day(&mut self) -> bool {
        self.step_days(1)
    }

    pub fn previous_day(&mut self) -> bool {
        self.step_days(-1)
    }

    fn step_days(&mut self, days: i64) -> bool {
        match self.selected_date.checked_add(Duration::days(days)) {
            Some(date) => self.select_date(date),
            None => {
                self.notify_error("No dates beyond the end of the calendar");
                false
            }
        }
    }

    pub fn go_to_today(&mut self) -> bool {
        self.select_date(self.today)
    }

    pub fn begin_date_input(&mut self) {
        self.date_input = Some(TextInput::new());
    }

    pub fn cancel_date_input(&mut self) {
        self.date_input = None;
    }

    pub fn date_input_char(&mut self, c: char) {
        if let Some(input) = self.date_input.as_mut() {
            if c.is_ascii_digit() || c == '-' {
                input.insert(c);
            }
        }
    }

    pub fn date_input_backspace(&mut self) {
        if let Some(input) = self.date_input.as_mut() {
            input.backspace();
        }
    }

    /// Apply the typed date. `Some(needs_reload)` on success; a bad date keeps
    /// the input open and raises an error notification.
    pub fn confirm_date_input(&mut self) -> Option<bool> {
        let raw = self.date_input.as_ref()?.value.clone();
        match parse_date(&raw) {
            Some(date) => {
                self.date_input = None;
                Some(self.select_date(date))
            }
            None => {
                self.notify_error(format!("Invalid date \"{raw}\", expected YYYY-MM-DD"));
                None
            }
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.preferences.sidebar_collapsed = !self.preferences.sidebar_collapsed;
        self.persist_preferences();
    }

    /// Ask before leaving. Session storage is untouched.
    pub fn request_logout(&mut self) {
        self.overlay = Some(Overlay::Confirm(ConfirmState {
            title: "Log out".to_string(),
            message: "Close the agenda and log out?".to_string(),
            confirm_label: "Log out".to_string(),
            cancel_label: "Stay".to_string(),
            intent: ConfirmIntent::Logout,
        }));
    }

    pub fn logout(&mut self) {
        tracing::info!("Logging out {}", self.current_user.display_name());
        self.quit();
    }
}

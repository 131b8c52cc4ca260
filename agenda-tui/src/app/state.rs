use std::time::{Duration, Instant};

use crate::agenda::validation::{ActivityDraft, FormErrors, FormField};
use crate::types::Project;

pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);
pub const MAX_NOTIFICATIONS: usize = 4;
/// Shortest time the throbber spins for a fetch, so it shows on at least one frame.
pub const MIN_LOADING_DISPLAY: Duration = Duration::from_millis(800);
pub const STARTUP_LOADING_DISPLAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Agenda,
    Management,
    Reports,
    User,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Agenda => "AGENDA",
            Category::Management => "MANAGEMENT",
            Category::Reports => "REPORTS",
            Category::User => "USER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    DailyActivities,
    Projects,
    Personnel,
    Assignments,
    Reports,
    Statistics,
    Profile,
    Settings,
}

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 9] = [
        Section::Dashboard,
        Section::DailyActivities,
        Section::Projects,
        Section::Personnel,
        Section::Assignments,
        Section::Reports,
        Section::Statistics,
        Section::Profile,
        Section::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::DailyActivities => "Daily Activities",
            Section::Projects => "Projects",
            Section::Personnel => "Personnel",
            Section::Assignments => "Assignments",
            Section::Reports => "Reports",
            Section::Statistics => "Statistics",
            Section::Profile => "My Profile",
            Section::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "⌂",
            Section::DailyActivities => "▦",
            Section::Projects => "◆",
            Section::Personnel => "☺",
            Section::Assignments => "✎",
            Section::Reports => "≡",
            Section::Statistics => "▮",
            Section::Profile => "●",
            Section::Settings => "⚙",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Section::Dashboard | Section::DailyActivities => Category::Agenda,
            Section::Projects | Section::Personnel | Section::Assignments => Category::Management,
            Section::Reports | Section::Statistics => Category::Reports,
            Section::Profile | Section::Settings => Category::User,
        }
    }

    /// Sections with no content of their own yet.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Section::Assignments | Section::Reports)
    }
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }
    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut p = pos - 1;
        while !self.value.is_char_boundary(p) {
            p -= 1;
        }
        p
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut p = pos + 1;
        while p < self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}

/// Create/edit modal. `editing` holds the id when an existing activity is edited.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub editing: Option<String>,
    pub date: TextInput,
    pub start_time: TextInput,
    pub end_time: TextInput,
    pub project: Option<Project>,
    pub description: TextInput,
    pub focused_field: FormField,
    pub errors: FormErrors,
}

impl FormState {
    pub fn new(draft: ActivityDraft, project: Option<Project>, editing: Option<String>) -> Self {
        Self {
            editing,
            date: TextInput::from_str(&draft.date),
            start_time: TextInput::from_str(&draft.start_time),
            end_time: TextInput::from_str(&draft.end_time),
            project,
            description: TextInput::from_str(&draft.description),
            focused_field: FormField::Date,
            errors: FormErrors::default(),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit activity"
        } else {
            "New activity"
        }
    }

    pub fn draft(&self) -> ActivityDraft {
        ActivityDraft {
            date: self.date.value.clone(),
            start_time: self.start_time.value.clone(),
            end_time: self.end_time.value.clone(),
            project_id: self.project.as_ref().map(|p| p.id.clone()),
            description: self.description.value.clone(),
        }
    }

    /// Text input behind the focused field. `None` for the project selector.
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Date => Some(&mut self.date),
            FormField::StartTime => Some(&mut self.start_time),
            FormField::EndTime => Some(&mut self.end_time),
            FormField::Project => None,
            FormField::Description => Some(&mut self.description),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmIntent {
    DeleteActivity { id: String },
    Logout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmState {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub intent: ConfirmIntent,
}

/// Fuzzy project chooser. Opened from the form, which is parked here until it closes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectPickerState {
    pub search: TextInput,
    pub filtered: Vec<Project>,
    pub index: usize,
    pub form: Box<FormState>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    ActivityForm(FormState),
    ProjectPicker(ProjectPickerState),
    Confirm(ConfirmState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= NOTIFICATION_TTL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    DarkMode,
    LargeFont,
    SidebarCollapsed,
}

impl SettingsItem {
    pub const ALL: [SettingsItem; 3] = [
        SettingsItem::DarkMode,
        SettingsItem::LargeFont,
        SettingsItem::SidebarCollapsed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsItem::DarkMode => "Dark mode",
            SettingsItem::LargeFont => "Large text",
            SettingsItem::SidebarCollapsed => "Collapsed sidebar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_handles_multibyte_chars() {
        let mut input = TextInput::from_str("añ");
        input.backspace();
        assert_eq!(input.value, "a");
        input.insert('é');
        input.move_left();
        input.insert('x');
        assert_eq!(input.value, "axé");
        assert_eq!(input.split_at_cursor(), ("ax", "é"));
        input.move_right();
        assert_eq!(input.cursor, input.value.len());
    }

    #[test]
    fn every_section_belongs_to_a_category_in_sidebar_order() {
        let categories: Vec<Category> = Section::ALL.iter().map(|s| s.category()).collect();
        let mut deduped = categories.clone();
        deduped.dedup();
        assert_eq!(
            deduped,
            vec![
                Category::Agenda,
                Category::Management,
                Category::Reports,
                Category::User
            ]
        );
    }
}

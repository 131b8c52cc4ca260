use super::*;

impl App {
    pub fn toggle_dark_mode(&mut self) {
        self.preferences.dark_mode = !self.preferences.dark_mode;
        self.persist_preferences();
    }

    pub fn toggle_large_font(&mut self) {
        self.preferences.large_font = !self.preferences.large_font;
        self.persist_preferences();
    }

    pub fn setting_enabled(&self, item: SettingsItem) -> bool {
        match item {
            SettingsItem::DarkMode => self.preferences.dark_mode,
            SettingsItem::LargeFont => self.preferences.large_font,
            SettingsItem::SidebarCollapsed => self.preferences.sidebar_collapsed,
        }
    }

    pub fn settings_next(&mut self) {
        self.settings_index = (self.settings_index + 1) % SettingsItem::ALL.len();
    }

    pub fn settings_previous(&mut self) {
        let len = SettingsItem::ALL.len();
        self.settings_index = (self.settings_index + len - 1) % len;
    }

    pub fn toggle_selected_setting(&mut self) {
        match SettingsItem::ALL[self.settings_index] {
            SettingsItem::DarkMode => self.toggle_dark_mode(),
            SettingsItem::LargeFont => self.toggle_large_font(),
            SettingsItem::SidebarCollapsed => self.toggle_sidebar(),
        }
    }

    /// Write every flag back. A failed write keeps the in-memory value.
    pub(crate) fn persist_preferences(&mut self) {
        if let Err(e) = self.preference_store.save(&self.preferences) {
            self.notify_error(format!("Could not save preferences: {e:#}"));
        }
    }
}

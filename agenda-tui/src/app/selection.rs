use super::*;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

impl App {
    /// Park the open form and show the project picker in its place.
    pub fn open_project_picker(&mut self) {
        let Some(Overlay::ActivityForm(form)) = self.overlay.take() else {
            return;
        };
        let index = form
            .project
            .as_ref()
            .and_then(|current| self.projects.iter().position(|p| p.id == current.id))
            .unwrap_or(0);
        self.overlay = Some(Overlay::ProjectPicker(ProjectPickerState {
            search: TextInput::new(),
            filtered: self.projects.clone(),
            index,
            form: Box::new(form),
        }));
    }

    pub fn picker_mut(&mut self) -> Option<&mut ProjectPickerState> {
        match self.overlay.as_mut() {
            Some(Overlay::ProjectPicker(picker)) => Some(picker),
            _ => None,
        }
    }

    pub fn filter_projects(&mut self) {
        let projects = self.projects.clone();
        let Some(picker) = self.picker_mut() else {
            return;
        };
        picker.index = 0;
        if picker.search.value.is_empty() {
            picker.filtered = projects;
            return;
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(Project, i64)> = projects
            .into_iter()
            .filter_map(|project| {
                matcher
                    .fuzzy_match(&project.name, &picker.search.value)
                    .map(|score| (project, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        picker.filtered = scored.into_iter().map(|(p, _)| p).collect();
    }

    pub fn picker_input_char(&mut self, c: char) {
        if let Some(picker) = self.picker_mut() {
            picker.search.insert(c);
        }
        self.filter_projects();
    }

    pub fn picker_backspace(&mut self) {
        if let Some(picker) = self.picker_mut() {
            picker.search.backspace();
        }
        self.filter_projects();
    }

    pub fn picker_next(&mut self) {
        if let Some(picker) = self.picker_mut() {
            if picker.index + 1 < picker.filtered.len() {
                picker.index += 1;
            }
        }
    }

    pub fn picker_previous(&mut self) {
        if let Some(picker) = self.picker_mut() {
            picker.index = picker.index.saturating_sub(1);
        }
    }

    /// Put the highlighted project on the parked form and return to it.
    pub fn picker_confirm(&mut self) {
        self.close_picker(true);
    }

    pub fn picker_cancel(&mut self) {
        self.close_picker(false);
    }

    fn close_picker(&mut self, apply: bool) {
        let Some(Overlay::ProjectPicker(picker)) = self.overlay.take() else {
            return;
        };
        let mut form = *picker.form;
        if apply {
            if let Some(project) = picker.filtered.get(picker.index) {
                form.project = Some(project.clone());
            }
        }
        self.overlay = Some(Overlay::ActivityForm(form));
    }

    // Personnel (supervisors)

    pub fn personnel_next(&mut self) {
        if self.personnel_index + 1 < self.personnel.len() {
            self.personnel_index += 1;
        }
    }

    pub fn personnel_previous(&mut self) {
        self.personnel_index = self.personnel_index.saturating_sub(1);
    }

    /// Show the highlighted person's daily activities. Returns true when a
    /// reload is needed.
    pub fn view_selected_personnel(&mut self) -> bool {
        if !self.is_supervisor() {
            return false;
        }
        let Some(person) = self.personnel.get(self.personnel_index).cloned() else {
            return false;
        };
        tracing::info!("Viewing agenda of {}", person.display_name());
        self.viewing_user = Some(person);
        self.reset_agenda();
        self.navigate_to(Section::DailyActivities);
        true
    }

    /// Back to the current user's own agenda. Returns true when a reload is needed.
    pub fn return_to_own_agenda(&mut self) -> bool {
        if self.viewing_user.take().is_none() {
            return false;
        }
        self.reset_agenda();
        true
    }

    fn reset_agenda(&mut self) {
        self.activities.clear();
        self.loaded_range = None;
        self.focused_activity_index = None;
        self.day_scroll = 0;
        self.refresh_derived();
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::types::Role;

    fn projects() -> Vec<Project> {
        ["Portal de Clientes", "Proyecto REX", "Sistema de Gestión"]
            .iter()
            .enumerate()
            .map(|(i, name)| Project {
                id: format!("p-{i}"),
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn picker_filters_and_returns_to_form() {
        let (mut app, _dir) = test_app(Role::Employee);
        app.set_projects(projects());
        app.open_create_form();
        app.open_project_picker();

        for c in "gest".chars() {
            app.picker_input_char(c);
        }
        let picker = app.picker_mut().unwrap();
        assert_eq!(picker.filtered.len(), 1);
        assert_eq!(picker.filtered[0].name, "Sistema de Gestión");

        app.picker_confirm();
        let form = app.form_mut().unwrap();
        assert_eq!(form.project.as_ref().map(|p| p.id.as_str()), Some("p-2"));
    }

    #[test]
    fn cancelled_picker_keeps_previous_project() {
        let (mut app, _dir) = test_app(Role::Employee);
        app.set_projects(projects());
        app.open_create_form();
        app.open_project_picker();
        app.picker_next();
        app.picker_cancel();
        assert_eq!(app.form_mut().unwrap().project, None);
    }

    #[test]
    fn supervisor_switches_agenda_owner() {
        let (mut app, _dir) = test_app(Role::Supervisor);
        app.set_personnel(vec![user("e-1", Role::Employee), user("e-2", Role::Employee)]);
        app.personnel_next();

        assert!(app.view_selected_personnel());
        assert_eq!(app.agenda_owner().id, "e-2");
        assert_eq!(app.viewing_user_id().as_deref(), Some("e-2"));
        assert_eq!(app.section, Section::DailyActivities);
        assert!(app.needs_reload());

        assert!(app.return_to_own_agenda());
        assert_eq!(app.agenda_owner().id, "u-1");
        assert!(!app.return_to_own_agenda());
    }

    #[test]
    fn employee_cannot_view_other_agendas() {
        let (mut app, _dir) = test_app(Role::Employee);
        app.set_personnel(vec![user("e-1", Role::Employee)]);
        assert!(!app.view_selected_personnel());
        assert!(app.viewing_user.is_none());
    }
}

use super::*;
use crate::agenda::permissions::authorize_edit;
use crate::agenda::validation::{ActivityDraft, FormField};
use crate::types::NewActivity;

/// A validated form ready to be sent. `id` is set for edits.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmission {
    pub id: Option<String>,
    pub activity: NewActivity,
}

impl App {
    pub fn open_create_form(&mut self) {
        if self.viewing_user.is_some() {
            self.notify_error("Return to your own agenda to add activities");
            return;
        }
        let draft = ActivityDraft::for_date(self.selected_date);
        self.overlay = Some(Overlay::ActivityForm(FormState::new(draft, None, None)));
    }

    pub fn open_edit_form(&mut self) {
        let Some(activity) = self.focused_activity() else {
            return;
        };
        if let Err(e) = authorize_edit(activity, &self.current_user) {
            self.notify_error(format!("Cannot edit: {e}"));
            return;
        }

        let draft = ActivityDraft::from_activity(activity);
        let project = activity.project_id.as_ref().map(|id| Project {
            id: id.clone(),
            name: activity.project_label().to_string(),
        });
        let state = FormState::new(draft, project, Some(activity.id.clone()));
        self.overlay = Some(Overlay::ActivityForm(state));
    }

    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        match self.overlay.as_mut() {
            Some(Overlay::ActivityForm(form)) => Some(form),
            _ => None,
        }
    }

    pub fn form_next_field(&mut self) {
        if let Some(form) = self.form_mut() {
            form.focused_field = step_field(form.focused_field, 1);
        }
    }

    pub fn form_previous_field(&mut self) {
        if let Some(form) = self.form_mut() {
            form.focused_field = step_field(form.focused_field, FormField::ALL.len() - 1);
        }
    }

    pub fn form_input_char(&mut self, c: char) {
        if let Some(form) = self.form_mut() {
            let field = form.focused_field;
            if let Some(input) = form.focused_input() {
                input.insert(c);
                form.errors.clear(field);
            }
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(form) = self.form_mut() {
            let field = form.focused_field;
            if let Some(input) = form.focused_input() {
                input.backspace();
                form.errors.clear(field);
            }
        }
    }

    pub fn form_move_cursor(&mut self, left: bool) {
        if let Some(input) = self.form_mut().and_then(|f| f.focused_input()) {
            if left {
                input.move_left();
            } else {
                input.move_right();
            }
        }
    }

    pub fn form_cursor_home_end(&mut self, home: bool) {
        if let Some(input) = self.form_mut().and_then(|f| f.focused_input()) {
            if home {
                input.home();
            } else {
                input.end();
            }
        }
    }

    pub fn form_clear_project(&mut self) {
        if let Some(form) = self.form_mut() {
            form.project = None;
            form.errors.clear(FormField::Project);
        }
    }

    /// Validate the open form. On success the form closes and the payload is
    /// returned; on failure the errors are shown inline and the form stays.
    pub fn submit_form(&mut self) -> Option<FormSubmission> {
        let form = self.form_mut()?;
        match form.draft().validate() {
            Ok(activity) => {
                let id = form.editing.clone();
                self.overlay = None;
                Some(FormSubmission { id, activity })
            }
            Err(errors) => {
                if let Some(first) = FormField::ALL.iter().find(|f| errors.get(**f).is_some()) {
                    form.focused_field = *first;
                }
                form.errors = errors;
                None
            }
        }
    }
}

fn step_field(field: FormField, by: usize) -> FormField {
    let idx = FormField::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or(0);
    FormField::ALL[(idx + by) % FormField::ALL.len()]
}

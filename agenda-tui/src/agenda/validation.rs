use std::collections::BTreeMap;

use time::{Date, Duration};

use crate::time_utils::{parse_date, parse_hhmm};
use crate::types::{Activity, NewActivity};

use super::summary::duration_between;

pub const MIN_DESCRIPTION_CHARS: usize = 5;
pub const MAX_DESCRIPTION_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Date,
    StartTime,
    EndTime,
    Project,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Date,
        FormField::StartTime,
        FormField::EndTime,
        FormField::Project,
        FormField::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Date => "Date",
            FormField::StartTime => "Start time",
            FormField::EndTime => "End time",
            FormField::Project => "Project",
            FormField::Description => "Description",
        }
    }
}

/// Per-field validation messages. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Raw form contents as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityDraft {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub project_id: Option<String>,
    pub description: String,
}

impl ActivityDraft {
    pub fn for_date(date: Date) -> Self {
        Self {
            date: crate::time_utils::format_date(date),
            ..Self::default()
        }
    }

    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            date: crate::time_utils::format_date(activity.date),
            start_time: crate::time_utils::format_hhmm(activity.start_time),
            end_time: crate::time_utils::format_hhmm(activity.end_time),
            project_id: activity.project_id.clone(),
            description: activity.description.clone(),
        }
    }

    /// Characters typed so far, the figure the form counter shows.
    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }

    /// Check every field and build the payload, or report all failing fields at once.
    pub fn validate(&self) -> Result<NewActivity, FormErrors> {
        let mut errors = FormErrors::default();

        let date = if self.date.trim().is_empty() {
            errors.insert(FormField::Date, "Date is required");
            None
        } else {
            let parsed = parse_date(&self.date);
            if parsed.is_none() {
                errors.insert(FormField::Date, "Date must be YYYY-MM-DD");
            }
            parsed
        };

        let start = if self.start_time.trim().is_empty() {
            errors.insert(FormField::StartTime, "Start time is required");
            None
        } else {
            let parsed = parse_hhmm(&self.start_time);
            if parsed.is_none() {
                errors.insert(FormField::StartTime, "Start time must be HH:MM");
            }
            parsed
        };

        let end = if self.end_time.trim().is_empty() {
            errors.insert(FormField::EndTime, "End time is required");
            None
        } else {
            match parse_hhmm(&self.end_time) {
                None => {
                    errors.insert(FormField::EndTime, "End time must be HH:MM");
                    None
                }
                Some(end) => {
                    if let Some(start) = start {
                        if end <= start {
                            errors.insert(
                                FormField::EndTime,
                                "End time must be later than start time",
                            );
                        }
                    }
                    Some(end)
                }
            }
        };

        // Length counts the text as typed; blank text is still missing.
        let description_len = self.description_len();
        if self.description.trim().is_empty() {
            errors.insert(FormField::Description, "Description is required");
        } else if description_len < MIN_DESCRIPTION_CHARS {
            errors.insert(
                FormField::Description,
                format!("Description must be at least {MIN_DESCRIPTION_CHARS} characters"),
            );
        } else if description_len > MAX_DESCRIPTION_CHARS {
            errors.insert(
                FormField::Description,
                format!("Description must be at most {MAX_DESCRIPTION_CHARS} characters"),
            );
        }

        match (date, start, end) {
            (Some(date), Some(start_time), Some(end_time)) if errors.is_empty() => Ok(NewActivity {
                date,
                start_time,
                end_time,
                project_id: self.project_id.clone().filter(|id| !id.is_empty()),
                description: self.description.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// What the form shows under the time inputs while the user types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationPreview {
    Empty,
    Invalid,
    Valid(Duration),
}

pub fn duration_preview(start: &str, end: &str) -> DurationPreview {
    match (parse_hhmm(start), parse_hhmm(end)) {
        (Some(start), Some(end)) if end < start => DurationPreview::Invalid,
        (Some(start), Some(end)) => match duration_between(start, end) {
            Some(d) => DurationPreview::Valid(d),
            None => DurationPreview::Valid(Duration::ZERO),
        },
        _ => DurationPreview::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    fn draft() -> ActivityDraft {
        ActivityDraft {
            date: "2023-06-10".to_string(),
            start_time: "09:00".to_string(),
            end_time: "11:00".to_string(),
            project_id: Some("p-1".to_string()),
            description: "Interface development".to_string(),
        }
    }

    #[test]
    fn valid_draft_builds_payload() {
        let new = draft().validate().unwrap();
        assert_eq!(new.date, date!(2023 - 06 - 10));
        assert_eq!(new.start_time, time!(9:00));
        assert_eq!(new.end_time, time!(11:00));
        assert_eq!(new.project_id.as_deref(), Some("p-1"));
    }

    #[test]
    fn end_not_after_start_is_rejected() {
        for end in ["09:00", "08:59"] {
            let mut d = draft();
            d.end_time = end.to_string();
            let errors = d.validate().unwrap_err();
            assert_eq!(
                errors.get(FormField::EndTime),
                Some("End time must be later than start time")
            );
        }
    }

    #[test]
    fn short_description_is_rejected() {
        let mut d = draft();
        d.description = "Demo".to_string();
        let errors = d.validate().unwrap_err();
        assert_eq!(
            errors.get(FormField::Description),
            Some("Description must be at least 5 characters")
        );

        d.description = "Demos".to_string();
        assert!(d.validate().is_ok());
    }

    #[test]
    fn description_length_counts_characters_not_bytes() {
        let mut d = draft();
        d.description = "ñandú".to_string();
        assert!(d.validate().is_ok());
    }

    #[test]
    fn padded_description_counts_as_typed() {
        let mut d = draft();
        d.description = "  abc  ".to_string();
        assert_eq!(d.description_len(), 7);
        assert_eq!(d.validate().unwrap().description, "  abc  ");

        d.description = "     ".to_string();
        assert_eq!(
            d.validate().unwrap_err().get(FormField::Description),
            Some("Description is required")
        );
    }

    #[test]
    fn overly_long_description_is_rejected() {
        let mut d = draft();
        d.description = "x".repeat(MAX_DESCRIPTION_CHARS + 1);
        assert!(d.validate().unwrap_err().get(FormField::Description).is_some());
    }

    #[test]
    fn every_missing_field_is_reported() {
        let errors = ActivityDraft::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(FormField::Date), Some("Date is required"));
        assert_eq!(errors.get(FormField::StartTime), Some("Start time is required"));
        assert_eq!(errors.get(FormField::EndTime), Some("End time is required"));
        assert_eq!(
            errors.get(FormField::Description),
            Some("Description is required")
        );
        assert_eq!(errors.get(FormField::Project), None);
    }

    #[test]
    fn empty_project_is_treated_as_none() {
        let mut d = draft();
        d.project_id = Some(String::new());
        assert_eq!(d.validate().unwrap().project_id, None);
    }

    #[test]
    fn preview_follows_inputs() {
        assert_eq!(duration_preview("", "10:00"), DurationPreview::Empty);
        assert_eq!(duration_preview("10:00", "09:00"), DurationPreview::Invalid);
        assert_eq!(
            duration_preview("09:00", "10:30"),
            DurationPreview::Valid(Duration::minutes(90))
        );
    }
}

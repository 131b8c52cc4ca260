use serde::{Deserialize, Serialize};
use time::{Date, Time};

time::serde::format_description!(wire_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(wire_time, Time, "[hour]:[minute]");

/// Role returned by the role service. Drives UI gating and edit permissions only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Supervisor,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Supervisor => "supervisor",
        }
    }
}

/// The current user or a member of personnel, as returned by `GET /me` and `GET /personnel`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_names: String,
    pub last_name: String,
    pub role: Role,
}

impl User {
    pub fn is_supervisor(&self) -> bool {
        self.role == Role::Supervisor
    }

    /// First of the first names, e.g. "Ana" for "Ana María".
    pub fn first_name(&self) -> &str {
        self.first_names
            .split_whitespace()
            .next()
            .unwrap_or(self.first_names.as_str())
    }

    /// First name followed by last name.
    pub fn display_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name().to_string()
        } else {
            format!("{} {}", self.first_name(), self.last_name)
        }
    }
}

/// A project an activity can be linked to. Not owned by this front end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Draft,
    Submitted,
}

impl ActivityStatus {
    pub fn toggled(self) -> Self {
        match self {
            ActivityStatus::Draft => ActivityStatus::Submitted,
            ActivityStatus::Submitted => ActivityStatus::Draft,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityStatus::Draft => "Pending",
            ActivityStatus::Submitted => "Completed",
        }
    }
}

/// A logged unit of work, as returned by the activities API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub user_id: String,
    #[serde(with = "wire_date")]
    pub date: Date,
    #[serde(with = "wire_time")]
    pub start_time: Time,
    #[serde(with = "wire_time")]
    pub end_time: Time,
    pub project_id: Option<String>,
    pub project_name: Option<String>,
    pub description: String,
    pub status: ActivityStatus,
}

impl Activity {
    pub fn is_submitted(&self) -> bool {
        self.status == ActivityStatus::Submitted
    }

    pub fn project_label(&self) -> &str {
        self.project_name.as_deref().unwrap_or("No project")
    }
}

/// Create/edit payload for an activity. Owner and status are decided server-side.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    #[serde(with = "wire_date")]
    pub date: Date,
    #[serde(with = "wire_time")]
    pub start_time: Time,
    #[serde(with = "wire_time")]
    pub end_time: Time,
    pub project_id: Option<String>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    #[test]
    fn activity_uses_wire_formats() {
        let json = r#"{
            "id": "a-1",
            "userId": "u-1",
            "date": "2025-03-04",
            "startTime": "09:30",
            "endTime": "11:00",
            "projectId": "p-1",
            "projectName": "Proyecto REX",
            "description": "Interface work",
            "status": "submitted"
        }"#;

        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.date, date!(2025 - 03 - 04));
        assert_eq!(activity.start_time, time!(9:30));
        assert_eq!(activity.end_time, time!(11:00));
        assert!(activity.is_submitted());

        let back = serde_json::to_value(&activity).unwrap();
        assert_eq!(back["startTime"], "09:30");
        assert_eq!(back["date"], "2025-03-04");
    }

    #[test]
    fn display_name_uses_first_of_first_names() {
        let user = User {
            id: "u-1".to_string(),
            first_names: "Ana María".to_string(),
            last_name: "Rojas".to_string(),
            role: Role::Supervisor,
        };
        assert_eq!(user.first_name(), "Ana");
        assert_eq!(user.display_name(), "Ana Rojas");
        assert!(user.is_supervisor());
    }

    #[test]
    fn status_toggles_both_ways() {
        assert_eq!(ActivityStatus::Draft.toggled(), ActivityStatus::Submitted);
        assert_eq!(ActivityStatus::Submitted.toggled(), ActivityStatus::Draft);
    }
}

use anyhow::Result;
use std::sync::{Arc, Mutex};
use time::{Date, Duration, Time};

use crate::agenda::AgendaError;
use crate::time_utils::local_today;
use crate::types::{Activity, ActivityStatus, NewActivity, Project, Role, User};

const EMPLOYEE_ID: &str = "dev-emp-1";
const SUPERVISOR_ID: &str = "dev-sup-1";

/// In-memory stand-in for the agenda API. Only stores data; permission rules
/// are applied by the caller.
#[derive(Debug, Clone)]
pub struct DevBackend {
    me: User,
    store: Arc<Mutex<DevStore>>,
}

#[derive(Debug)]
struct DevStore {
    activities: Vec<Activity>,
    next_id: u32,
}

impl DevBackend {
    pub fn new(role: Role) -> Self {
        let me = match role {
            Role::Employee => dev_personnel().remove(0),
            Role::Supervisor => User {
                id: SUPERVISOR_ID.to_string(),
                first_names: "Ana María".to_string(),
                last_name: "Rojas".to_string(),
                role: Role::Supervisor,
            },
        };
        let activities = seed_dev_activities(local_today());
        let next_id = activities.len() as u32 + 1;

        Self {
            me,
            store: Arc::new(Mutex::new(DevStore {
                activities,
                next_id,
            })),
        }
    }

    pub fn me(&self) -> User {
        self.me.clone()
    }

    pub fn activities(&self, user_id: Option<&str>, from: Date, to: Date) -> Vec<Activity> {
        let owner = user_id.unwrap_or(&self.me.id);
        self.store
            .lock()
            .expect("dev store lock poisoned")
            .activities
            .iter()
            .filter(|a| a.user_id == owner && a.date >= from && a.date <= to)
            .cloned()
            .collect()
    }

    pub fn create(&self, new: &NewActivity) -> Activity {
        let mut store = self.store.lock().expect("dev store lock poisoned");
        let activity = Activity {
            id: format!("dev-act-{}", store.next_id),
            user_id: self.me.id.clone(),
            date: new.date,
            start_time: new.start_time,
            end_time: new.end_time,
            project_id: new.project_id.clone(),
            project_name: self.project_name(new.project_id.as_deref()),
            description: new.description.clone(),
            status: ActivityStatus::Draft,
        };
        store.next_id += 1;
        store.activities.push(activity.clone());
        activity
    }

    pub fn update(&self, id: &str, new: &NewActivity) -> Result<Activity> {
        let project_name = self.project_name(new.project_id.as_deref());
        self.with_activity(id, |activity| {
            activity.date = new.date;
            activity.start_time = new.start_time;
            activity.end_time = new.end_time;
            activity.project_id = new.project_id.clone();
            activity.project_name = project_name;
            activity.description = new.description.clone();
        })
    }

    pub fn set_status(&self, id: &str, status: ActivityStatus) -> Result<Activity> {
        self.with_activity(id, |activity| activity.status = status)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let mut store = self.store.lock().expect("dev store lock poisoned");
        let before = store.activities.len();
        store.activities.retain(|a| a.id != id);
        if store.activities.len() == before {
            return Err(AgendaError::NotFound(id.to_string()).into());
        }
        Ok(())
    }

    pub fn projects(&self) -> Vec<Project> {
        dev_projects()
    }

    pub fn personnel(&self) -> Vec<User> {
        dev_personnel()
    }

    fn with_activity(&self, id: &str, apply: impl FnOnce(&mut Activity)) -> Result<Activity> {
        let mut store = self.store.lock().expect("dev store lock poisoned");
        let activity = store
            .activities
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AgendaError::NotFound(id.to_string()))?;
        apply(activity);
        Ok(activity.clone())
    }

    fn project_name(&self, project_id: Option<&str>) -> Option<String> {
        let project_id = project_id?;
        dev_projects()
            .into_iter()
            .find(|p| p.id == project_id)
            .map(|p| p.name)
    }
}

fn dev_projects() -> Vec<Project> {
    [
        ("proj_1", "Proyecto REX"),
        ("proj_2", "Sistema de Gestión"),
        ("proj_3", "Portal de Clientes"),
    ]
    .into_iter()
    .map(|(id, name)| Project {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

fn dev_personnel() -> Vec<User> {
    [
        (EMPLOYEE_ID, "Carlos Andrés", "Pérez"),
        ("dev-emp-2", "Lucía", "Gómez"),
        ("dev-emp-3", "Jorge Luis", "Mendoza"),
    ]
    .into_iter()
    .map(|(id, first_names, last_name)| User {
        id: id.to_string(),
        first_names: first_names.to_string(),
        last_name: last_name.to_string(),
        role: Role::Employee,
    })
    .collect()
}

fn seed_dev_activities(today: Date) -> Vec<Activity> {
    let projects = dev_projects();
    let hm = |h: u8, m: u8| Time::from_hms(h, m, 0).expect("valid time");

    let entry = |idx: usize,
                 user_id: &str,
                 days_ago: i64,
                 start: Time,
                 end: Time,
                 project: Option<usize>,
                 description: &str,
                 status: ActivityStatus| {
        let project = project.map(|i| &projects[i]);
        Activity {
            id: format!("dev-act-{}", idx),
            user_id: user_id.to_string(),
            date: today - Duration::days(days_ago),
            start_time: start,
            end_time: end,
            project_id: project.map(|p| p.id.clone()),
            project_name: project.map(|p| p.name.clone()),
            description: description.to_string(),
            status,
        }
    };

    use ActivityStatus::{Draft, Submitted};
    let rows = [
        (EMPLOYEE_ID, 0, hm(9, 0), hm(11, 0), Some(0), "Desarrollo de interfaz de usuario", Submitted),
        (EMPLOYEE_ID, 0, hm(11, 30), hm(13, 0), Some(1), "Reunión con cliente", Draft),
        (EMPLOYEE_ID, 0, hm(14, 0), hm(16, 30), Some(0), "Revisión de código", Draft),
        (EMPLOYEE_ID, 1, hm(8, 30), hm(12, 0), Some(2), "Maquetación del portal", Submitted),
        (EMPLOYEE_ID, 1, hm(13, 0), hm(15, 0), None, "Capacitación interna", Submitted),
        (EMPLOYEE_ID, 2, hm(9, 0), hm(10, 0), Some(1), "Ajustes de reportes", Submitted),
        (EMPLOYEE_ID, 2, hm(9, 30), hm(12, 0), Some(1), "Pruebas de integración", Draft),
        ("dev-emp-2", 0, hm(8, 0), hm(12, 0), Some(1), "Migración de base de datos", Submitted),
        ("dev-emp-2", 0, hm(13, 0), hm(17, 0), Some(2), "Diseño de formularios", Draft),
        ("dev-emp-3", 0, hm(10, 0), hm(12, 30), Some(0), "Documentación técnica", Submitted),
        (SUPERVISOR_ID, 0, hm(9, 0), hm(10, 0), None, "Planificación semanal", Submitted),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (user, days_ago, start, end, project, description, status))| {
            entry(i + 1, user, days_ago, start, end, project, description, status)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::time;

    fn new_activity(date: Date) -> NewActivity {
        NewActivity {
            date,
            start_time: time!(17:00),
            end_time: time!(18:00),
            project_id: Some("proj_3".to_string()),
            description: "Deploy preparation".to_string(),
        }
    }

    #[test]
    fn seeded_activities_belong_to_requested_user() {
        let dev = DevBackend::new(Role::Supervisor);
        let today = local_today();
        let own = dev.activities(None, today, today);
        assert!(!own.is_empty());
        assert!(own.iter().all(|a| a.user_id == SUPERVISOR_ID));

        let other = dev.activities(Some("dev-emp-2"), today, today);
        assert_eq!(other.len(), 2);
    }

    #[test]
    fn update_relinks_project_name() {
        let dev = DevBackend::new(Role::Employee);
        let today = local_today();
        let created = dev.create(&new_activity(today));
        assert_eq!(created.project_name.as_deref(), Some("Portal de Clientes"));

        let mut changed = new_activity(today);
        changed.project_id = None;
        let updated = dev.update(&created.id, &changed).unwrap();
        assert_eq!(updated.project_name, None);
    }

    #[test]
    fn delete_removes_and_reports_missing() {
        let dev = DevBackend::new(Role::Employee);
        let created = dev.create(&new_activity(local_today()));
        dev.delete(&created.id).unwrap();
        assert!(dev.delete(&created.id).is_err());
        assert!(dev.set_status(&created.id, ActivityStatus::Submitted).is_err());
    }

    #[test]
    fn created_ids_do_not_collide_with_seed() {
        let dev = DevBackend::new(Role::Employee);
        let today = local_today();
        let created = dev.create(&new_activity(today));
        let all = dev.activities(None, today - Duration::days(7), today);
        assert_eq!(all.iter().filter(|a| a.id == created.id).count(), 1);
    }
}

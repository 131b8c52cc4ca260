use crate::api::ApiClient;
use crate::app::{App, FormSubmission, MIN_LOADING_DISPLAY};
use crate::types::ActivityStatus;
use anyhow::Result;
use std::time::Instant;

use super::action_queue::Action;

pub(super) async fn run_action(action: Action, app: &mut App, client: &ApiClient) -> Result<()> {
    match action {
        Action::ReloadActivities => {
            if let Err(e) = load_activities(app, client).await {
                app.notify_error(format!("Could not load activities: {e:#}"));
            }
        }
        Action::SaveForm(submission) => {
            handle_save_form(submission, app, client).await;
        }
        Action::ToggleStatus { id, next } => {
            handle_toggle_status(&id, next, app, client).await;
        }
        Action::ConfirmDelete { id } => {
            handle_confirm_delete(&id, app, client).await;
        }
        Action::LoadPersonnel => {
            if let Err(e) = load_personnel(app, client).await {
                app.notify_error(format!("Could not load personnel: {e:#}"));
            }
        }
        Action::RefreshBackground => {
            if let Err(e) = load_activities(app, client).await {
                tracing::warn!("Background refresh failed: {e:#}");
            }
        }
    }
    Ok(())
}

/// Fetch the shown agenda for the range around the selected date.
pub(crate) async fn load_activities(app: &mut App, client: &ApiClient) -> Result<()> {
    let (from, to) = app.wanted_range();
    let owner = app.viewing_user_id();

    app.begin_loading(Instant::now(), MIN_LOADING_DISPLAY);
    let activities = client.get_activities(owner.as_deref(), from, to).await?;
    tracing::debug!("Loaded {} activities for {from}..{to}", activities.len());
    app.set_activities(activities, (from, to));
    Ok(())
}

pub(crate) async fn load_personnel(app: &mut App, client: &ApiClient) -> Result<()> {
    if !app.is_supervisor() {
        return Ok(());
    }
    let personnel = client.get_personnel().await?;
    app.set_personnel(personnel);
    Ok(())
}

async fn handle_save_form(submission: FormSubmission, app: &mut App, client: &ApiClient) {
    let result = match &submission.id {
        Some(id) => client.update_activity(id, &submission.activity).await,
        None => client.create_activity(&submission.activity).await,
    };

    match result {
        Ok(activity) => {
            let verb = if submission.id.is_some() {
                "updated"
            } else {
                "added"
            };
            app.upsert_activity(activity);
            app.notify_success(format!("Activity {verb}"));
        }
        Err(e) => app.notify_error(format!("Could not save activity: {e:#}")),
    }
}

async fn handle_toggle_status(id: &str, next: ActivityStatus, app: &mut App, client: &ApiClient) {
    match client.set_activity_status(id, next).await {
        Ok(activity) => {
            app.notify_success(format!("Marked as {}", activity.status.label()));
            app.upsert_activity(activity);
        }
        Err(e) => app.notify_error(format!("Could not change status: {e:#}")),
    }
}

async fn handle_confirm_delete(id: &str, app: &mut App, client: &ApiClient) {
    match client.delete_activity(id).await {
        Ok(()) => {
            app.remove_activity(id);
            app.notify_success("Activity deleted");
        }
        Err(e) => app.notify_error(format!("Could not delete activity: {e:#}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agenda::validation::ActivityDraft;
    use crate::preferences::{PreferenceStore, Preferences};
    use crate::types::Role;

    async fn dev_app(role: Role) -> (App, ApiClient, tempfile::TempDir) {
        let client = ApiClient::dev(role).unwrap();
        let me = client.me().await.unwrap();
        let dir = tempfile::tempdir().unwrap();
        let defaults = Preferences::defaults(true);
        let store = PreferenceStore::new(dir.path().join("preferences"), defaults);
        let app = App::new(me, defaults, store, crate::time_utils::local_today());
        (app, client, dir)
    }

    #[tokio::test]
    async fn reload_fills_the_selected_day() {
        let (mut app, client, _dir) = dev_app(Role::Employee).await;
        run_action(Action::ReloadActivities, &mut app, &client)
            .await
            .unwrap();
        assert!(!app.needs_reload());
        assert!(!app.day_activities().is_empty());
    }

    #[tokio::test]
    async fn reload_keeps_throbber_up_for_the_next_frames() {
        let (mut app, client, _dir) = dev_app(Role::Employee).await;
        let started = Instant::now();
        run_action(Action::ReloadActivities, &mut app, &client)
            .await
            .unwrap();

        // What the event loop sees on the frame drawn right after the fetch.
        assert!(app.is_loading);
        app.tick_loading(started);
        assert!(app.is_loading);

        app.tick_loading(started + MIN_LOADING_DISPLAY + std::time::Duration::from_millis(50));
        assert!(!app.is_loading);
    }

    #[tokio::test]
    async fn save_then_delete_round_trip() {
        let (mut app, client, _dir) = dev_app(Role::Employee).await;
        run_action(Action::ReloadActivities, &mut app, &client)
            .await
            .unwrap();
        let before = app.day_activities().len();

        let mut draft = ActivityDraft::for_date(app.selected_date);
        draft.start_time = "19:00".to_string();
        draft.end_time = "20:00".to_string();
        draft.description = "Late deployment".to_string();
        let submission = FormSubmission {
            id: None,
            activity: draft.validate().unwrap(),
        };
        run_action(Action::SaveForm(submission), &mut app, &client)
            .await
            .unwrap();
        assert_eq!(app.day_activities().len(), before + 1);

        let id = app
            .day_activities()
            .iter()
            .find(|a| a.description == "Late deployment")
            .map(|a| a.id.clone())
            .unwrap();
        run_action(
            Action::ToggleStatus {
                id: id.clone(),
                next: ActivityStatus::Submitted,
            },
            &mut app,
            &client,
        )
        .await
        .unwrap();
        assert!(app.find_activity(&id).unwrap().is_submitted());

        run_action(Action::ConfirmDelete { id: id.clone() }, &mut app, &client)
            .await
            .unwrap();
        assert!(app.find_activity(&id).is_err());
    }

    #[tokio::test]
    async fn failed_delete_becomes_notification() {
        let (mut app, client, _dir) = dev_app(Role::Employee).await;
        run_action(
            Action::ConfirmDelete {
                id: "missing".to_string(),
            },
            &mut app,
            &client,
        )
        .await
        .unwrap();
        assert_eq!(app.notifications.len(), 1);
        assert!(app.notifications[0].message.starts_with("Could not delete"));
    }

    #[tokio::test]
    async fn personnel_loads_for_supervisors_only() {
        let (mut sup, client, _d1) = dev_app(Role::Supervisor).await;
        run_action(Action::LoadPersonnel, &mut sup, &client)
            .await
            .unwrap();
        assert_eq!(sup.personnel.len(), 3);

        let (mut emp, client, _d2) = dev_app(Role::Employee).await;
        run_action(Action::LoadPersonnel, &mut emp, &client)
            .await
            .unwrap();
        assert!(emp.personnel.is_empty());
    }
}

use crate::api::ApiClient;
use crate::app::{App, STARTUP_LOADING_DISPLAY};
use crate::runtime::{load_activities, load_personnel};
use std::time::Instant;

/// First fetch before the terminal is taken over. Failures become notifications
/// and the UI starts with whatever loaded; `r` reloads the agenda.
pub async fn initialize_app_state(app: &mut App, client: &ApiClient) {
    // The throbber keeps spinning for the first seconds of the event loop.
    app.begin_loading(Instant::now(), STARTUP_LOADING_DISPLAY);

    match client.get_projects().await {
        Ok(projects) => app.set_projects(projects),
        Err(e) => app.notify_error(format!("Could not load projects: {e:#}")),
    }

    if let Err(e) = load_personnel(app, client).await {
        app.notify_error(format!("Could not load personnel: {e:#}"));
    }

    if let Err(e) = load_activities(app, client).await {
        app.notify_error(format!("Could not load activities: {e:#}"));
    }
}

use anyhow::{Context, Result};
use reqwest::{cookie::Jar, Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use time::Date;

use crate::api::dev_backend::DevBackend;
use crate::api::dto::{ActivityRangeQuery, SetStatusRequest};
use crate::time_utils::format_date;
use crate::types::{Activity, ActivityStatus, NewActivity, Project, Role, User};

const SESSION_COOKIE: &str = "id";
const UNAUTH_INVALID_SESSION: &str =
    "Session expired or invalid. Update `session_token` in the config file.";
const UNAUTH_FORBIDDEN: &str = "You are not allowed to do that.";

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    dev_backend: Option<DevBackend>,
}

impl ApiClient {
    pub fn new(base_url: &str, session_token: Option<&str>) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .with_context(|| format!("Invalid API URL: {}", base_url))?;
        let jar = Arc::new(Jar::default());

        if let Some(token) = session_token {
            jar.add_cookie_str(&format!("{}={}; Path=/", SESSION_COOKIE, token), &base_url);
        }

        let client = Client::builder()
            .cookie_provider(jar)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            dev_backend: None,
        })
    }

    /// Client backed by seeded in-memory data, acting as a user with `role`.
    pub fn dev(role: Role) -> Result<Self> {
        let base_url = Url::parse("http://localhost")?;
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            dev_backend: Some(DevBackend::new(role)),
        })
    }

    pub fn is_dev(&self) -> bool {
        self.dev_backend.is_some()
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Failed to build URL for path {}", path))
    }

    async fn send(&self, request: RequestBuilder, call_name: &str) -> Result<Response> {
        tracing::debug!("{call_name}");
        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to call {}", call_name))?;

        match response.status() {
            StatusCode::UNAUTHORIZED => anyhow::bail!("{UNAUTH_INVALID_SESSION}"),
            StatusCode::FORBIDDEN => anyhow::bail!("{UNAUTH_FORBIDDEN}"),
            _ => {}
        }

        response
            .error_for_status_ref()
            .with_context(|| format!("{} returned error", call_name))?;

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<T> {
        let response = self.send(request, call_name).await?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse {} response", call_name))
    }

    async fn send_without_body(&self, request: RequestBuilder, call_name: &str) -> Result<()> {
        let response = self.send(request, call_name).await?;
        let _ = response.bytes().await;
        Ok(())
    }

    pub async fn me(&self) -> Result<User> {
        if let Some(dev) = &self.dev_backend {
            return Ok(dev.me());
        }

        self.get_json(self.client.get(self.endpoint("/me")?), "GET /me")
            .await
    }

    /// Activities dated within `from..=to`. `user_id` selects someone else's
    /// agenda (supervisors only); `None` means the caller's own.
    pub async fn get_activities(
        &self,
        user_id: Option<&str>,
        from: Date,
        to: Date,
    ) -> Result<Vec<Activity>> {
        if let Some(dev) = &self.dev_backend {
            return Ok(dev.activities(user_id, from, to));
        }

        let query = ActivityRangeQuery {
            from: format_date(from),
            to: format_date(to),
            user_id,
        };

        self.get_json(
            self.client
                .get(self.endpoint("/activities")?)
                .query(&query),
            "GET /activities",
        )
        .await
    }

    pub async fn create_activity(&self, new: &NewActivity) -> Result<Activity> {
        if let Some(dev) = &self.dev_backend {
            return Ok(dev.create(new));
        }

        self.get_json(
            self.client.post(self.endpoint("/activities")?).json(new),
            "POST /activities",
        )
        .await
    }

    pub async fn update_activity(&self, id: &str, new: &NewActivity) -> Result<Activity> {
        if let Some(dev) = &self.dev_backend {
            return dev.update(id, new);
        }

        self.get_json(
            self.client
                .put(self.endpoint(&format!("/activities/{}", id))?)
                .json(new),
            "PUT /activities/:id",
        )
        .await
    }

    pub async fn set_activity_status(&self, id: &str, status: ActivityStatus) -> Result<Activity> {
        if let Some(dev) = &self.dev_backend {
            return dev.set_status(id, status);
        }

        self.get_json(
            self.client
                .patch(self.endpoint(&format!("/activities/{}/status", id))?)
                .json(&SetStatusRequest { status }),
            "PATCH /activities/:id/status",
        )
        .await
    }

    pub async fn delete_activity(&self, id: &str) -> Result<()> {
        if let Some(dev) = &self.dev_backend {
            return dev.delete(id);
        }

        self.send_without_body(
            self.client
                .delete(self.endpoint(&format!("/activities/{}", id))?),
            "DELETE /activities/:id",
        )
        .await
    }

    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        let mut projects: Vec<Project> = match &self.dev_backend {
            Some(dev) => dev.projects(),
            None => {
                self.get_json(self.client.get(self.endpoint("/projects")?), "GET /projects")
                    .await?
            }
        };

        projects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(projects)
    }

    pub async fn get_personnel(&self) -> Result<Vec<User>> {
        let mut personnel: Vec<User> = match &self.dev_backend {
            Some(dev) => dev.personnel(),
            None => {
                self.get_json(
                    self.client.get(self.endpoint("/personnel")?),
                    "GET /personnel",
                )
                .await?
            }
        };

        personnel.sort_by(|a, b| {
            a.last_name
                .cmp(&b.last_name)
                .then_with(|| a.first_names.cmp(&b.first_names))
        });
        Ok(personnel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActivityStatus;
    use time::macros::time;

    #[test]
    fn rejects_invalid_base_url() {
        assert!(ApiClient::new("not a url", None).is_err());
    }

    #[test]
    fn endpoint_joins_paths() {
        let client = ApiClient::new("http://localhost:8080/", Some("token")).unwrap();
        assert_eq!(
            client.endpoint("/activities/a-1/status").unwrap().as_str(),
            "http://localhost:8080/activities/a-1/status"
        );
        assert!(!client.is_dev());
    }

    #[tokio::test]
    async fn dev_client_creates_and_submits() {
        let client = ApiClient::dev(Role::Employee).unwrap();
        let me = client.me().await.unwrap();
        let today = crate::time_utils::local_today();

        let created = client
            .create_activity(&NewActivity {
                date: today,
                start_time: time!(18:00),
                end_time: time!(19:00),
                project_id: None,
                description: "Evening review".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.user_id, me.id);
        assert_eq!(created.status, ActivityStatus::Draft);

        let submitted = client
            .set_activity_status(&created.id, ActivityStatus::Submitted)
            .await
            .unwrap();
        assert!(submitted.is_submitted());

        let day = client.get_activities(None, today, today).await.unwrap();
        assert!(day.iter().any(|a| a.id == created.id && a.is_submitted()));
    }

    #[tokio::test]
    async fn dev_projects_are_sorted_by_name() {
        let client = ApiClient::dev(Role::Supervisor).unwrap();
        let projects = client.get_projects().await.unwrap();
        let names: Vec<_> = projects.iter().map(|p| p.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}

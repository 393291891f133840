//! Main task list HTTP client.

use crate::api::TaskApi;
use crate::error::{ClientError, Result};
use crate::types::{ClientConfig, ErrorBody, TaskBody};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tasklist_core::{Task, TaskId, User};
use tracing::{debug, info, warn};

/// Client for the `/tasks` and `/users` resources.
///
/// # Example
///
/// ```ignore
/// use tasklist_client::{ClientConfig, TaskApi, TaskListClient};
///
/// let client = TaskListClient::new(ClientConfig::new("http://localhost:3001"))?;
/// let tasks = client.list_tasks().await?;
/// ```
#[derive(Debug, Clone)]
pub struct TaskListClient {
    http: Client,
    base_url: String,
}

impl TaskListClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("TaskList/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// Get the normalized server URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Look up the user with these credentials.
    ///
    /// Fails with `AuthFailed` when the lookup comes back empty.
    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        match self.find_user(username, password).await? {
            Some(user) => {
                info!(username = %user.username, "Login successful");
                Ok(user)
            }
            None => {
                warn!(username = %username, "Login failed: invalid credentials");
                Err(ClientError::AuthFailed(
                    "Invalid username or password".to_string(),
                ))
            }
        }
    }

    fn task_url(&self, id: TaskId) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }

    /// Turn a non-success response into an error, keeping the server message
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);

        if status == StatusCode::NOT_FOUND {
            Err(ClientError::NotFound(message))
        } else {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse {}: {}", what, e)))
    }
}

#[async_trait]
impl TaskApi for TaskListClient {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let url = format!("{}/tasks", self.base_url);
        debug!(url = %url, "Fetching tasks");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;
        let response = Self::check(response).await?;
        Self::parse(response, "task list").await
    }

    async fn create_task(&self, task: &Task) -> Result<Task> {
        let url = format!("{}/tasks", self.base_url);
        debug!(url = %url, id = %task.id, "Creating task");

        let response = self
            .http
            .post(&url)
            .json(task)
            .send()
            .await
            .map_err(ClientError::from_send)?;
        let response = Self::check(response).await?;
        let body: TaskBody = Self::parse(response, "created task").await?;
        Ok(body.into_task())
    }

    async fn update_task(&self, id: TaskId, task: &Task) -> Result<Task> {
        let url = self.task_url(id);
        debug!(url = %url, "Replacing task");

        let response = self
            .http
            .put(&url)
            .json(task)
            .send()
            .await
            .map_err(ClientError::from_send)?;
        let response = Self::check(response).await?;
        let body: TaskBody = Self::parse(response, "updated task").await?;
        Ok(body.into_task())
    }

    async fn delete_task(&self, id: TaskId) -> Result<()> {
        let url = self.task_url(id);
        debug!(url = %url, "Deleting task");

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;
        Self::check(response).await?;
        Ok(())
    }

    async fn find_user(&self, username: &str, password: &str) -> Result<Option<User>> {
        let url = format!("{}/users", self.base_url);
        debug!(url = %url, username = %username, "Looking up user");

        let response = self
            .http
            .get(&url)
            .query(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(ClientError::from_send)?;
        let response = Self::check(response).await?;
        let users: Vec<User> = Self::parse(response, "user lookup").await?;
        Ok(users.into_iter().next())
    }
}

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use url::Url;
use uuid::Uuid;

use crate::config::Config;
use crate::dto::category_dto::CategoryPayload;
use crate::dto::job_dto::JobListEnvelope;
use crate::error::{Error, Result};
use crate::models::category::JobCategory;
use crate::models::ids::CategoryId;
use crate::models::job::Job;
use crate::models::notification::Notification;
use crate::services::notification_service::NotificationApi;
use crate::utils::response::extract_message;

const CSRF_HEADER: &str = "X-CSRFToken";
const NOTIFICATIONS_PATH: &str = "notifications/notifications/applications/";

/// HTTP collaborator for the job-board backend.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
    csrf_token: Option<String>,
}

impl BackendClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            base_url: normalize_base(&config.api_url)?,
            csrf_token: config.csrf_token.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.endpoint(path)?;
        let mutating = method != Method::GET;
        let mut builder = self.client.request(method, url);
        if mutating {
            if let Some(token) = &self.csrf_token {
                builder = builder.header(CSRF_HEADER, token);
            }
        }
        Ok(builder)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body);
        warn!(%status, ?message, "Backend request failed");
        Err(Error::Backend { status, message })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(self.request(Method::GET, path)?).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(method, path)?.json(body)).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn send_empty(&self, method: Method, path: &str) -> Result<()> {
        self.send(self.request(method, path)?).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_jobs(&self) -> Result<Vec<Job>> {
        let envelope: JobListEnvelope = self.get_json("job/jobs/").await?;
        let jobs = envelope.into_jobs();
        debug!(count = jobs.len(), "Fetched jobs");
        Ok(jobs)
    }

    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<JobCategory>> {
        self.get_json("job/job-categories/").await
    }

    #[instrument(skip(self))]
    pub async fn category_detail(&self, id: &CategoryId) -> Result<JobCategory> {
        self.get_json(&format!("job/job-categories/detail/{}/", id))
            .await
    }

    #[instrument(skip(self, payload))]
    pub async fn create_category(&self, payload: &CategoryPayload) -> Result<JobCategory> {
        self.send_json(Method::POST, "job/job-categories/create/", payload)
            .await
    }

    #[instrument(skip(self, payload))]
    pub async fn update_category(
        &self,
        id: &CategoryId,
        payload: &CategoryPayload,
    ) -> Result<JobCategory> {
        self.send_json(
            Method::PUT,
            &format!("job/job-categories/update/{}/", id),
            payload,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: &CategoryId) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("job/job-categories/delete/{}/", id))
            .await
    }
}

#[async_trait]
impl NotificationApi for BackendClient {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Notification>> {
        self.get_json(NOTIFICATIONS_PATH).await
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, id: Uuid) -> Result<()> {
        self.send_empty(Method::POST, &format!("{}{}/mark-read/", NOTIFICATIONS_PATH, id))
            .await
    }

    #[instrument(skip(self))]
    async fn mark_unread(&self, id: Uuid) -> Result<()> {
        self.send_empty(Method::POST, &format!("{}{}/mark-unread/", NOTIFICATIONS_PATH, id))
            .await
    }

    #[instrument(skip(self))]
    async fn mark_all_read(&self) -> Result<()> {
        self.send_empty(Method::POST, &format!("{}mark-all-read/", NOTIFICATIONS_PATH))
            .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("{}delete/{}/", NOTIFICATIONS_PATH, id))
            .await
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("{}all-delete/", NOTIFICATIONS_PATH))
            .await
    }
}

fn normalize_base(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::Config("API URL must not be empty".to_string()));
    }
    // Url::join drops the last path segment unless it ends with a slash.
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    Ok(Url::parse(&with_slash)?)
}

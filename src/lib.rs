pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    api_client::BackendClient, category_service::CategoryService, job_service::JobService,
    notification_service::NotificationStore,
};

/// Everything a page needs to talk to the backend, built from one [`Config`].
#[derive(Clone)]
pub struct JobBoard {
    pub config: Config,
    pub client: BackendClient,
    pub job_service: JobService,
    pub category_service: CategoryService,
}

impl JobBoard {
    pub fn new(config: Config) -> Result<Self> {
        let client = BackendClient::new(&config)?;
        let job_service = JobService::new(client.clone(), config.jobs_per_page);
        let category_service = CategoryService::new(client.clone());

        Ok(Self {
            config,
            client,
            job_service,
            category_service,
        })
    }

    /// A fresh, empty notification store. Each view owns its own.
    pub fn notification_store(&self) -> NotificationStore<BackendClient> {
        NotificationStore::new(self.client.clone(), self.config.toast_ttl)
    }
}

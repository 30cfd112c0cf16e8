use tracing::{info, instrument};

use crate::dto::filter_dto::FilterContext;
use crate::error::Result;
use crate::models::category::JobCategory;
use crate::services::api_client::BackendClient;
use crate::services::filter_service::JobBrowser;

#[derive(Clone)]
pub struct JobService {
    client: BackendClient,
    jobs_per_page: usize,
}

impl JobService {
    pub fn new(client: BackendClient, jobs_per_page: usize) -> Self {
        Self {
            client,
            jobs_per_page,
        }
    }

    /// Fetches the full job set and derives the first page under `filter`.
    #[instrument(skip(self, filter))]
    pub async fn browse(&self, filter: FilterContext) -> Result<JobBrowser> {
        let jobs = self.client.list_jobs().await?;
        let mut browser = JobBrowser::new(self.jobs_per_page);
        browser.set_jobs(jobs);
        browser.set_filter(filter);
        info!(
            visible = browser.filtered().jobs.len(),
            pages = browser.total_pages(),
            "Job list ready"
        );
        Ok(browser)
    }

    /// Re-fetches jobs into an existing browser, keeping its filter.
    pub async fn refresh(&self, browser: &mut JobBrowser) -> Result<()> {
        let jobs = self.client.list_jobs().await?;
        browser.set_jobs(jobs);
        Ok(())
    }

    /// Categories offered as quick-search links.
    pub async fn quick_search_categories(&self) -> Result<Vec<JobCategory>> {
        self.client.list_categories().await
    }
}

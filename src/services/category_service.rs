use tracing::{info, instrument};
use validator::Validate;

use crate::dto::category_dto::CategoryPayload;
use crate::dto::filter_dto::PageView;
use crate::error::Result;
use crate::models::category::JobCategory;
use crate::models::ids::CategoryId;
use crate::services::api_client::BackendClient;
use crate::services::filter_service::paginate;

pub const CATEGORIES_PER_PAGE: usize = 10;

/// Employer-side job category management.
#[derive(Clone)]
pub struct CategoryService {
    client: BackendClient,
}

impl CategoryService {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<JobCategory>> {
        self.client.list_categories().await
    }

    pub async fn detail(&self, id: &CategoryId) -> Result<JobCategory> {
        self.client.category_detail(id).await
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn create(&self, payload: CategoryPayload) -> Result<JobCategory> {
        payload.validate()?;
        let category = self.client.create_category(&payload).await?;
        info!(id = %category.id, "Job category created");
        Ok(category)
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn update(&self, id: &CategoryId, payload: CategoryPayload) -> Result<JobCategory> {
        payload.validate()?;
        let category = self.client.update_category(id, &payload).await?;
        info!(id = %category.id, "Job category updated");
        Ok(category)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &CategoryId) -> Result<()> {
        self.client.delete_category(id).await?;
        info!(%id, "Job category deleted");
        Ok(())
    }

    /// Page of the employer's category list, ten per page.
    pub fn page(categories: &[JobCategory], page: usize) -> PageView<'_, JobCategory> {
        paginate(categories, CATEGORIES_PER_PAGE, page)
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ids::{CategoryId, EmployerId, JobId};

/// A job posting as served by the backend.
///
/// Only `id` is guaranteed: search endpoints return partial records which are
/// completed with [`Job::merged_over`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: Option<String>,
    pub employer: Option<EmployerId>,
    pub employer_business_name: Option<String>,
    #[serde(alias = "employer__logo")]
    pub employer_logo: Option<String>,
    pub category: Option<CategoryId>,
    pub category_name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub salary: Option<Decimal>,
    pub deadline: Option<String>,
    pub is_active: Option<bool>,
    pub applicants_count: Option<u64>,
    pub new_applicants_count: Option<u64>,
}

impl Job {
    pub fn new(id: impl Into<JobId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            employer: None,
            employer_business_name: None,
            employer_logo: None,
            category: None,
            category_name: None,
            location: None,
            description: None,
            salary: None,
            deadline: None,
            is_active: None,
            applicants_count: None,
            new_applicants_count: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Fills every field missing from `self` with the value from `full`.
    /// Fields present on `self` win.
    pub fn merged_over(self, full: &Job) -> Job {
        Job {
            id: self.id,
            title: self.title.or_else(|| full.title.clone()),
            employer: self.employer.or_else(|| full.employer.clone()),
            employer_business_name: self
                .employer_business_name
                .or_else(|| full.employer_business_name.clone()),
            employer_logo: self.employer_logo.or_else(|| full.employer_logo.clone()),
            category: self.category.or_else(|| full.category.clone()),
            category_name: self.category_name.or_else(|| full.category_name.clone()),
            location: self.location.or_else(|| full.location.clone()),
            description: self.description.or_else(|| full.description.clone()),
            salary: self.salary.or(full.salary),
            deadline: self.deadline.or_else(|| full.deadline.clone()),
            is_active: self.is_active.or(full.is_active),
            applicants_count: self.applicants_count.or(full.applicants_count),
            new_applicants_count: self.new_applicants_count.or(full.new_applicants_count),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::models::ids::CategoryId;
use crate::models::job::Job;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFilter {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationFilter {
    pub code: String,
    pub name: String,
}

impl LocationFilter {
    /// Uses `name` for display when it is non-blank, otherwise the code itself.
    pub fn new(code: impl Into<String>, name: Option<&str>) -> Self {
        let code = code.into();
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map_or_else(|| code.clone(), str::to_string);
        Self { code, name }
    }
}

/// Which predicates narrow the job list for the current navigation.
///
/// Every dimension that is present applies; they combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterContext {
    pub search_results: Option<Vec<Job>>,
    pub category: Option<CategoryFilter>,
    pub location: Option<LocationFilter>,
}

impl FilterContext {
    pub fn search(results: Vec<Job>) -> Self {
        Self {
            search_results: Some(results),
            ..Self::default()
        }
    }

    pub fn category(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            category: Some(CategoryFilter {
                id: id.into(),
                name: name.into(),
            }),
            ..Self::default()
        }
    }

    pub fn location(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            location: Some(LocationFilter {
                code: code.into(),
                name: name.into(),
            }),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search_results.is_none() && self.category.is_none() && self.location.is_none()
    }

    pub fn heading(&self) -> String {
        if let Some(category) = &self.category {
            format!("Category: {}", category.name)
        } else if let Some(location) = &self.location {
            format!("City: {}", location.name)
        } else if self.is_empty() {
            "All Available Jobs".to_string()
        } else {
            "Search Results".to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilteredJobs {
    pub jobs: Vec<Job>,
    pub is_filter_active: bool,
}

/// One page of a list. `page` is the 1-based page the slice was cut for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageView<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
}

impl<'a, T> PageView<'a, T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

use std::collections::HashMap;

use crate::dto::filter_dto::{FilterContext, FilteredJobs, PageView};
use crate::models::ids::JobId;
use crate::models::job::Job;

/// Narrows `all_jobs` by every dimension present in `filter`.
///
/// Search results are completed field by field from the matching record in
/// `all_jobs`; a result with no match is kept as-is. Category and location are
/// plain equality checks on the opaque codes.
pub fn derive_visible_jobs(all_jobs: &[Job], filter: &FilterContext) -> FilteredJobs {
    let mut is_filter_active = false;

    let mut jobs: Vec<Job> = match &filter.search_results {
        Some(results) => {
            is_filter_active = true;
            let mut by_id: HashMap<&JobId, &Job> = HashMap::with_capacity(all_jobs.len());
            for job in all_jobs {
                by_id.entry(&job.id).or_insert(job);
            }
            results
                .iter()
                .map(|partial| match by_id.get(&partial.id) {
                    Some(full) => partial.clone().merged_over(full),
                    None => partial.clone(),
                })
                .collect()
        }
        None => all_jobs.to_vec(),
    };

    if let Some(category) = &filter.category {
        is_filter_active = true;
        jobs.retain(|job| job.category.as_ref() == Some(&category.id));
    }

    if let Some(location) = &filter.location {
        is_filter_active = true;
        jobs.retain(|job| job.location.as_deref() == Some(location.code.as_str()));
    }

    FilteredJobs {
        jobs,
        is_filter_active,
    }
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Cuts page `requested_page` (1-based) out of `items`.
///
/// The page is not clamped: anything past the end yields an empty slice, as
/// does page 0 or a zero page size.
pub fn paginate<T>(items: &[T], page_size: usize, requested_page: usize) -> PageView<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    let start = requested_page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = requested_page.saturating_mul(page_size).min(items.len());

    PageView {
        items: &items[start..end.max(start)],
        page: requested_page,
        total_pages,
    }
}

/// Page-owner state for the job list: the full job set, the active filter,
/// the derived list and the current page.
#[derive(Debug, Clone)]
pub struct JobBrowser {
    all_jobs: Vec<Job>,
    filter: FilterContext,
    filtered: FilteredJobs,
    page_size: usize,
    current_page: usize,
}

impl JobBrowser {
    pub fn new(page_size: usize) -> Self {
        Self {
            all_jobs: Vec::new(),
            filter: FilterContext::default(),
            filtered: FilteredJobs {
                jobs: Vec::new(),
                is_filter_active: false,
            },
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn set_jobs(&mut self, jobs: Vec<Job>) {
        self.all_jobs = jobs;
        self.rederive();
    }

    pub fn set_filter(&mut self, filter: FilterContext) {
        self.filter = filter;
        self.rederive();
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(FilterContext::default());
    }

    fn rederive(&mut self) {
        self.filtered = derive_visible_jobs(&self.all_jobs, &self.filter);
        self.current_page = 1;
        tracing::debug!(
            total = self.all_jobs.len(),
            visible = self.filtered.jobs.len(),
            active = self.filtered.is_filter_active,
            "Job list re-derived"
        );
    }

    pub fn go_to(&mut self, page: usize) -> usize {
        self.current_page = page.clamp(1, self.total_pages().max(1));
        self.current_page
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.current_page + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.current_page.saturating_sub(1))
    }

    pub fn current_page(&self) -> PageView<'_, Job> {
        paginate(&self.filtered.jobs, self.page_size, self.current_page)
    }

    pub fn page_number(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.jobs.len(), self.page_size)
    }

    pub fn filtered(&self) -> &FilteredJobs {
        &self.filtered
    }

    pub fn filter(&self) -> &FilterContext {
        &self.filter
    }

    pub fn all_jobs(&self) -> &[Job] {
        &self.all_jobs
    }

    pub fn heading(&self) -> String {
        self.filter.heading()
    }
}

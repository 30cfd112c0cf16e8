use jobboard_client::{
    config::{get_config, init_config},
    dto::filter_dto::{CategoryFilter, FilterContext, LocationFilter},
    dto::notification_dto::Tab,
    models::ids::CategoryId,
    JobBoard,
};
use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn filter_from_env(categories: &[jobboard_client::models::category::JobCategory]) -> FilterContext {
    let category = env::var("JOBBOARD_FILTER_CATEGORY").ok().map(|raw| {
        let id = CategoryId::new(raw.trim());
        let name = categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.to_string());
        CategoryFilter { id, name }
    });

    let location_name = env::var("JOBBOARD_FILTER_LOCATION_NAME").ok();
    let location = env::var("JOBBOARD_FILTER_LOCATION")
        .ok()
        .map(|code| LocationFilter::new(code.trim(), location_name.as_deref()));

    FilterContext {
        search_results: None,
        category,
        location,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    init_config()?;
    let board = JobBoard::new(get_config()?.clone())?;

    let categories = match board.job_service.quick_search_categories().await {
        Ok(categories) => categories,
        Err(e) => {
            warn!(error = %e, "Could not load job categories");
            Vec::new()
        }
    };

    let mut browser = board.job_service.browse(filter_from_env(&categories)).await?;
    if let Some(page) = env::var("JOBBOARD_PAGE").ok().and_then(|p| p.parse().ok()) {
        browser.go_to(page);
    }

    let view = browser.current_page();
    info!(
        heading = %browser.heading(),
        page = view.page,
        total_pages = view.total_pages,
        total = browser.filtered().jobs.len(),
        "Visible jobs"
    );
    println!("{}", serde_json::to_string_pretty(view.items)?);

    let mut notifications = board.notification_store();
    match notifications.load().await {
        Ok(()) => info!(
            unread = notifications.unread_count(),
            total = notifications.by_tab(Tab::All).len(),
            "Notifications"
        ),
        Err(e) => warn!(error = %e, "Notifications unavailable"),
    }

    Ok(())
}

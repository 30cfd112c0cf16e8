pub mod api_client;
pub mod category_service;
pub mod filter_service;
pub mod job_service;
pub mod notification_service;

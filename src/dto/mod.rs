pub mod category_dto;
pub mod filter_dto;
pub mod job_dto;
pub mod notification_dto;

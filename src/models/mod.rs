pub mod category;
pub mod ids;
pub mod job;
pub mod notification;

pub mod response;
pub mod serde_flexible;
pub mod time;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::serde_flexible::deserialize_bool_flexible;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    #[serde(deserialize_with = "deserialize_bool_flexible")]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

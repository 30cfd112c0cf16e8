use serde::{Deserialize, Serialize};

use crate::models::ids::CategoryId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCategory {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
}

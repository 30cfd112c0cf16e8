use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CategoryPayload {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        let description = description.trim();
        self.description = (!description.is_empty()).then(|| description.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_fails_validation() {
        assert!(CategoryPayload::new("   ").validate().is_err());
        assert!(CategoryPayload::new(" Engineering ").validate().is_ok());
        assert_eq!(CategoryPayload::new(" Engineering ").name, "Engineering");
    }

    #[test]
    fn empty_description_is_dropped() {
        let payload = CategoryPayload::new("IT").with_description("  ");
        assert!(payload.description.is_none());
        assert_eq!(serde_json::to_value(&payload).unwrap(), serde_json::json!({"name": "IT"}));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

use crate::error::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    All,
    Unread,
    Read,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::All => "All Notifications",
            Tab::Unread => "Unread Notifications",
            Tab::Read => "Read Notifications",
        }
    }

    pub fn accepts(&self, is_read: bool) -> bool {
        match self {
            Tab::All => true,
            Tab::Unread => !is_read,
            Tab::Read => is_read,
        }
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Tab::All),
            "unread" => Ok(Tab::Unread),
            "read" => Ok(Tab::Read),
            other => Err(Error::BadRequest(format!("Unknown notification tab: {}", other))),
        }
    }
}

/// A transient error banner. Hosts drop it once [`Toast::is_expired`] says so.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(message: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            created_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match chrono::Duration::from_std(ttl) {
            Ok(ttl) => now - self.created_at >= ttl,
            Err(_) => false,
        }
    }
}

use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::notification_dto::{Tab, Toast};
use crate::error::{Error, Result};
use crate::models::notification::Notification;
use crate::utils::time::now;

pub const UNREAD_DELETE_MESSAGE: &str = "Mark the notification.";

/// Backend operations the notification store relies on.
#[async_trait]
pub trait NotificationApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Notification>>;
    async fn mark_read(&self, id: Uuid) -> Result<()>;
    async fn mark_unread(&self, id: Uuid) -> Result<()>;
    async fn mark_all_read(&self) -> Result<()>;
    async fn delete(&self, id: Uuid) -> Result<()>;
    async fn delete_all(&self) -> Result<()>;
}

/// Client-side copy of the current user's notifications.
///
/// Local state only changes after the backend acknowledges a mutation; a
/// failed call leaves the snapshot as it was.
pub struct NotificationStore<A> {
    api: A,
    notifications: Vec<Notification>,
    is_loading: bool,
    last_toast: Option<Toast>,
    toast_ttl: Duration,
}

impl<A: NotificationApi> NotificationStore<A> {
    pub fn new(api: A, toast_ttl: Duration) -> Self {
        Self {
            api,
            notifications: Vec::new(),
            is_loading: false,
            last_toast: None,
            toast_ttl,
        }
    }

    /// Store seeded with an existing snapshot, e.g. one rendered server-side.
    pub fn with_snapshot(api: A, toast_ttl: Duration, notifications: Vec<Notification>) -> Self {
        Self {
            notifications,
            ..Self::new(api, toast_ttl)
        }
    }

    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<()> {
        self.is_loading = true;
        let result = self.api.list().await;
        self.is_loading = false;

        match result {
            Ok(notifications) => {
                info!(count = notifications.len(), "Notifications loaded");
                self.notifications = notifications;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Failed to load notifications");
                self.raise(&err, "Failed to load notifications");
                Err(err)
            }
        }
    }

    /// Flips the read flag of `id` through the backend.
    ///
    /// Failures are logged only; the notification keeps its flag.
    #[instrument(skip(self))]
    pub async fn toggle_read(&mut self, id: Uuid) -> Result<()> {
        let is_read = self.get(id)?.is_read;

        let result = if is_read {
            self.api.mark_unread(id).await
        } else {
            self.api.mark_read(id).await
        };

        match result {
            Ok(()) => {
                if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
                    notification.is_read = !is_read;
                }
                Ok(())
            }
            Err(err) => {
                warn!(%id, error = %err, "Failed to toggle notification read state");
                Err(err)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn mark_all_read(&mut self) -> Result<()> {
        match self.api.mark_all_read().await {
            Ok(()) => {
                self.notifications.iter_mut().for_each(|n| n.is_read = true);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Failed to mark all notifications read");
                self.raise(&err, "Failed to mark notifications as read");
                Err(err)
            }
        }
    }

    /// Deletes a read notification. Unread ones are refused locally.
    #[instrument(skip(self))]
    pub async fn delete_one(&mut self, id: Uuid) -> Result<()> {
        if !self.get(id)?.is_read {
            let err = Error::Rejected(UNREAD_DELETE_MESSAGE.to_string());
            self.raise(&err, UNREAD_DELETE_MESSAGE);
            return Err(err);
        }

        match self.api.delete(id).await {
            Ok(()) => {
                self.notifications.retain(|n| n.id != id);
                Ok(())
            }
            Err(err) => {
                warn!(%id, error = %err, "Failed to delete notification");
                self.raise(&err, "Failed to delete notification");
                Err(err)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_all(&mut self) -> Result<()> {
        match self.api.delete_all().await {
            Ok(()) => {
                info!(removed = self.notifications.len(), "Notifications cleared");
                self.notifications.clear();
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Failed to clear notifications");
                self.raise(&err, "Failed to clear notifications");
                Err(err)
            }
        }
    }

    fn get(&self, id: Uuid) -> Result<&Notification> {
        self.notifications
            .iter()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NotFound(format!("Notification {} not found", id)))
    }

    fn raise(&mut self, err: &Error, fallback: &str) {
        self.last_toast = Some(Toast::new(err.user_message(fallback), now()));
    }
}

impl<A> NotificationStore<A> {
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    pub fn by_tab(&self, tab: Tab) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| tab.accepts(n.is_read))
            .collect()
    }

    /// The `n` most recently created notifications, newest first.
    pub fn latest(&self, n: usize) -> Vec<&Notification> {
        let mut sorted: Vec<&Notification> = self.notifications.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted.truncate(n);
        sorted
    }

    /// The pending toast, unless it has outlived its display time.
    pub fn active_toast(&self) -> Option<&Toast> {
        self.last_toast
            .as_ref()
            .filter(|toast| !toast.is_expired(now(), self.toast_ttl))
    }

    pub fn dismiss_toast(&mut self) -> Option<Toast> {
        self.last_toast.take()
    }
}

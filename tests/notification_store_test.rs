use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use jobboard_client::dto::notification_dto::Tab;
use jobboard_client::error::{Error, Result};
use jobboard_client::models::notification::Notification;
use jobboard_client::services::notification_service::{
    NotificationApi, NotificationStore, UNREAD_DELETE_MESSAGE,
};
use mockall::mock;
use reqwest::StatusCode;
use uuid::Uuid;

mock! {
    pub Api {}

    #[async_trait]
    impl NotificationApi for Api {
        async fn list(&self) -> Result<Vec<Notification>>;
        async fn mark_read(&self, id: Uuid) -> Result<()>;
        async fn mark_unread(&self, id: Uuid) -> Result<()>;
        async fn mark_all_read(&self) -> Result<()>;
        async fn delete(&self, id: Uuid) -> Result<()>;
        async fn delete_all(&self) -> Result<()>;
    }
}

const TTL: Duration = Duration::from_secs(3);

fn notification(n: u128, is_read: bool, minute: u32) -> Notification {
    Notification {
        id: Uuid::from_u128(n),
        message: format!("Application #{} changed status", n),
        is_read,
        created_at: Utc.with_ymd_and_hms(2025, 3, 1, 10, minute, 0).unwrap(),
        kind: Some("application".to_string()),
    }
}

fn sample() -> Vec<Notification> {
    vec![
        notification(1, false, 5),
        notification(2, true, 30),
        notification(3, false, 15),
        notification(4, true, 0),
    ]
}

fn backend_error(message: Option<&str>) -> Error {
    Error::Backend {
        status: StatusCode::BAD_REQUEST,
        message: message.map(str::to_string),
    }
}

#[tokio::test]
async fn load_replaces_snapshot() {
    let mut api = MockApi::new();
    api.expect_list().times(1).returning(|| Ok(sample()));

    let mut store = NotificationStore::new(api, TTL);
    store.load().await.unwrap();

    assert!(!store.is_loading());
    assert_eq!(store.notifications().len(), 4);
    assert_eq!(store.unread_count(), 2);
}

#[tokio::test]
async fn failed_load_keeps_previous_snapshot_and_toasts() {
    let mut api = MockApi::new();
    api.expect_list()
        .times(1)
        .returning(|| Err(backend_error(None)));

    let mut store = NotificationStore::with_snapshot(api, TTL, sample());
    assert!(store.load().await.is_err());

    assert!(!store.is_loading());
    assert_eq!(store.notifications(), sample().as_slice());
    assert_eq!(
        store.active_toast().map(|t| t.message.as_str()),
        Some("Failed to load notifications")
    );
}

#[tokio::test]
async fn deleting_unread_is_refused_without_network_call() {
    let mut api = MockApi::new();
    api.expect_delete().never();

    let before = vec![notification(7, false, 0)];
    let mut store = NotificationStore::with_snapshot(api, TTL, before.clone());

    let err = store.delete_one(Uuid::from_u128(7)).await.unwrap_err();

    assert!(matches!(err, Error::Rejected(_)));
    assert_eq!(store.notifications(), before.as_slice());
    assert_eq!(
        store.active_toast().map(|t| t.message.as_str()),
        Some(UNREAD_DELETE_MESSAGE)
    );
}

#[tokio::test]
async fn deleting_read_removes_after_ack() {
    let mut api = MockApi::new();
    api.expect_delete()
        .withf(|id| *id == Uuid::from_u128(2))
        .times(1)
        .returning(|_| Ok(()));

    let mut store = NotificationStore::with_snapshot(api, TTL, sample());
    store.delete_one(Uuid::from_u128(2)).await.unwrap();

    assert_eq!(store.notifications().len(), 3);
    assert!(store
        .notifications()
        .iter()
        .all(|n| n.id != Uuid::from_u128(2)));
    assert!(store.active_toast().is_none());
}

#[tokio::test]
async fn failed_delete_keeps_notification_and_surfaces_detail() {
    let mut api = MockApi::new();
    api.expect_delete()
        .times(1)
        .returning(|_| Err(backend_error(Some("Notification is locked"))));

    let mut store = NotificationStore::with_snapshot(api, TTL, sample());
    assert!(store.delete_one(Uuid::from_u128(4)).await.is_err());

    assert_eq!(store.notifications().len(), 4);
    assert_eq!(
        store.active_toast().map(|t| t.message.as_str()),
        Some("Notification is locked")
    );
}

#[tokio::test]
async fn toggle_changes_unread_count_by_one() {
    let mut api = MockApi::new();
    api.expect_mark_read()
        .withf(|id| *id == Uuid::from_u128(1))
        .times(1)
        .returning(|_| Ok(()));
    api.expect_mark_unread()
        .withf(|id| *id == Uuid::from_u128(2))
        .times(1)
        .returning(|_| Ok(()));

    let mut store = NotificationStore::with_snapshot(api, TTL, sample());
    let before = store.notifications().to_vec();

    store.toggle_read(Uuid::from_u128(1)).await.unwrap();
    assert_eq!(store.unread_count(), 1);
    for (old, new) in before.iter().zip(store.notifications()) {
        if new.id == Uuid::from_u128(1) {
            assert!(new.is_read);
        } else {
            assert_eq!(old, new);
        }
    }

    store.toggle_read(Uuid::from_u128(2)).await.unwrap();
    assert_eq!(store.unread_count(), 2);
}

#[tokio::test]
async fn failed_toggle_leaves_flag_and_raises_no_toast() {
    let mut api = MockApi::new();
    api.expect_mark_read()
        .times(1)
        .returning(|_| Err(backend_error(None)));

    let mut store = NotificationStore::with_snapshot(api, TTL, sample());
    assert!(store.toggle_read(Uuid::from_u128(3)).await.is_err());

    assert_eq!(store.notifications(), sample().as_slice());
    assert!(store.active_toast().is_none());
}

#[tokio::test]
async fn unknown_id_is_not_sent() {
    let mut api = MockApi::new();
    api.expect_mark_read().never();
    api.expect_mark_unread().never();
    api.expect_delete().never();

    let mut store = NotificationStore::with_snapshot(api, TTL, sample());
    let missing = Uuid::from_u128(99);

    assert!(matches!(
        store.toggle_read(missing).await,
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        store.delete_one(missing).await,
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
async fn delete_all_empties_store() {
    let mut api = MockApi::new();
    api.expect_delete_all().times(1).returning(|| Ok(()));

    let mut store = NotificationStore::with_snapshot(api, TTL, sample());
    store.delete_all().await.unwrap();

    assert!(store.notifications().is_empty());
    assert_eq!(store.unread_count(), 0);
}

#[tokio::test]
async fn failed_delete_all_keeps_everything() {
    let mut api = MockApi::new();
    api.expect_delete_all()
        .times(1)
        .returning(|| Err(backend_error(None)));

    let mut store = NotificationStore::with_snapshot(api, TTL, sample());
    assert!(store.delete_all().await.is_err());

    assert_eq!(store.notifications().len(), 4);
    assert_eq!(
        store.dismiss_toast().map(|t| t.message),
        Some("Failed to clear notifications".to_string())
    );
    assert!(store.active_toast().is_none());
}

#[tokio::test]
async fn mark_all_read_clears_unread() {
    let mut api = MockApi::new();
    api.expect_mark_all_read().times(1).returning(|| Ok(()));

    let mut store = NotificationStore::with_snapshot(api, TTL, sample());
    store.mark_all_read().await.unwrap();

    assert_eq!(store.unread_count(), 0);
    assert_eq!(store.by_tab(Tab::Read).len(), 4);
}

#[test]
fn tabs_and_latest_are_derived_from_snapshot() {
    let store = NotificationStore::with_snapshot(MockApi::new(), TTL, sample());

    let unread: Vec<u128> = store
        .by_tab(Tab::Unread)
        .iter()
        .map(|n| n.id.as_u128())
        .collect();
    let read: Vec<u128> = store
        .by_tab(Tab::Read)
        .iter()
        .map(|n| n.id.as_u128())
        .collect();
    assert_eq!(unread, vec![1, 3]);
    assert_eq!(read, vec![2, 4]);
    assert_eq!(store.by_tab(Tab::All).len(), 4);

    let latest: Vec<u128> = store.latest(3).iter().map(|n| n.id.as_u128()).collect();
    assert_eq!(latest, vec![2, 3, 1]);
    assert_eq!(store.latest(10).len(), 4);
    assert!(store.latest(0).is_empty());
}

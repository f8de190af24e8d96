//! Integration tests for tracker persistence on a SQLite file.

use std::sync::Arc;

use jiff::{Timestamp, ToSpan};
use serde_json::{json, Value};
use tempfile::TempDir;
use timeflow_core::{
    store::keys, ActionStatus, CollectionStore, EventKind, Id, ListActions, ListEvents, LogEvent,
    SqliteStore, TrackerBuilder,
};

fn temp_store() -> (TempDir, Arc<SqliteStore>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = SqliteStore::open(temp_dir.path().join("timeflow.db")).expect("Failed to open store");
    (temp_dir, Arc::new(store))
}

fn read_json(store: &SqliteStore, key: &str) -> Value {
    let payload = store.read(key).unwrap().expect("Key should be stored");
    serde_json::from_str(&payload).unwrap()
}

#[tokio::test]
async fn test_legacy_actions_are_normalized_on_load() {
    let (_temp_dir, store) = temp_store();
    let yesterday = Timestamp::now().checked_sub(24.hours()).unwrap();
    store
        .write(
            keys::ACTIONS,
            &json!([
                {"id": "old-1", "description": "Water plants", "isUnscheduled": true, "plannedTime": "08:00"},
                {"id": 7, "description": "Pay rent", "plannedAt": yesterday.to_string(), "status": "bogus"},
                {"description": "Stretch", "order": "5"},
            ])
            .to_string(),
        )
        .unwrap();

    let tracker = TrackerBuilder::new()
        .with_store(store.clone())
        .build()
        .await
        .expect("Failed to create tracker");

    let plants = tracker.get_action(&Id { id: "old-1".to_string() }).await.unwrap().unwrap();
    assert_eq!(plants.planned_at, None);
    assert_eq!(plants.status, ActionStatus::Active);

    let rent = tracker.get_action(&Id { id: "7".to_string() }).await.unwrap().unwrap();
    assert_eq!(rent.planned_at, Some(yesterday));
    assert_eq!(rent.status, ActionStatus::Active);

    let feed = tracker.action_feed(&ListActions::default()).await.unwrap();
    assert_eq!(feed.scheduled.len(), 1);
    assert_eq!(feed.unscheduled.len(), 2);

    // Loading flagged the legacy overdue action.
    let events = read_json(&store, keys::EVENTS);
    assert_eq!(events.as_array().map(Vec::len), Some(1));
    assert_eq!(events[0]["type"], EventKind::ActionOverdue.as_str());
    assert_eq!(events[0]["actionId"], "7");
}

#[tokio::test]
async fn test_corrupt_payloads_fall_back_to_defaults() {
    let (_temp_dir, store) = temp_store();
    store.write(keys::ACTIONS, "{not json").unwrap();
    store.write(keys::EVENTS, r#"{"id": "e-1"}"#).unwrap();
    store.write(keys::CONFIRM_DELETE, "\"maybe\"").unwrap();

    let tracker = TrackerBuilder::new()
        .with_store(store.clone())
        .build()
        .await
        .expect("Corrupt data should not prevent startup");

    assert!(tracker.all_actions().await.unwrap().is_empty());
    assert!(tracker.event_feed(&ListEvents::default()).await.unwrap().is_empty());
    assert!(tracker.confirm_delete().await.unwrap());

    tracker
        .log_event(&LogEvent {
            description: "Fresh start".to_string(),
            occurred_at: None,
        })
        .await
        .unwrap();
    let events = read_json(&store, keys::EVENTS);
    assert_eq!(events[0]["description"], "Fresh start");
}

#[tokio::test]
async fn test_writes_use_current_shape() {
    let (_temp_dir, store) = temp_store();
    let tracker = TrackerBuilder::new()
        .with_store(store.clone())
        .build()
        .await
        .unwrap();

    tracker
        .create_action(&timeflow_core::CreateAction {
            description: "  Buy milk ".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    tracker.set_theme(timeflow_core::Theme::Dark).await.unwrap();

    let actions = read_json(&store, keys::ACTIONS);
    assert_eq!(actions[0]["description"], "Buy milk");
    assert!(actions[0]["plannedAt"].is_null());
    assert_eq!(actions[0]["status"], "active");
    assert_eq!(actions[0]["order"], 0);
    assert_eq!(read_json(&store, keys::THEME), json!("dark"));
}

//! Planned action persistence with legacy record normalization.

use jiff::{civil::DateTime, tz::TimeZone, Timestamp, Zoned};
use log::{debug, warn};
use serde_json::{Map, Value};

use super::coerce::{is_truthy, parse_timestamp, scalar_to_string};
use crate::{
    error::Result,
    models::{ActionStatus, PlannedAction},
    store::{keys, Snapshots},
};

/// Loads and saves the planned action collection.
#[derive(Clone)]
pub struct ActionRepository {
    snapshots: Snapshots,
}

impl ActionRepository {
    pub fn new(snapshots: Snapshots) -> Self {
        Self { snapshots }
    }

    /// Reads every stored action, coercing records written by older versions.
    pub fn get_all(&self) -> Vec<PlannedAction> {
        match self.snapshots.load_json(keys::ACTIONS) {
            Some(Value::Array(records)) => {
                let now = Timestamp::now();
                records
                    .iter()
                    .enumerate()
                    .map(|(index, record)| normalize_action(record, index, now))
                    .collect()
            }
            Some(_) => {
                warn!("Stored actions are not a list; starting empty");
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Overwrites the stored collection.
    pub fn save_all(&self, actions: &[PlannedAction]) -> Result<()> {
        debug!("Persisting {} actions", actions.len());
        self.snapshots.save(keys::ACTIONS, actions)
    }
}

/// Best-effort coercion of one stored record into a [`PlannedAction`].
///
/// Current records pass through unchanged. Older records may lack any field,
/// store `plannedAt` as a civil date-time in the system time zone, or carry
/// `plannedTime` ("HH:MM", meaning today) plus an `isUnscheduled` flag instead
/// of `plannedAt`.
pub(crate) fn normalize_action(record: &Value, index: usize, now: Timestamp) -> PlannedAction {
    let empty = Map::new();
    let fields = record.as_object().unwrap_or(&empty);
    let field = |name: &str| fields.get(name).filter(|value| !value.is_null());

    let id = field("id")
        .and_then(scalar_to_string)
        .unwrap_or_else(|| format!("{}-{index}", now.as_millisecond()));

    let description = field("description")
        .and_then(scalar_to_string)
        .unwrap_or_default();

    let planned_at = field("plannedAt")
        .and_then(parse_timestamp)
        .or_else(|| {
            if field("isUnscheduled").is_some_and(is_truthy) {
                None
            } else {
                field("plannedTime")
                    .and_then(Value::as_str)
                    .and_then(today_at)
            }
        });

    let status = field("status")
        .and_then(|value| serde_json::from_value::<ActionStatus>(value.clone()).ok())
        .unwrap_or_default();

    let order = field("order").and_then(to_order).unwrap_or(index as i64);

    PlannedAction {
        id,
        description,
        planned_at,
        status,
        order,
        created_at: field("createdAt").and_then(parse_timestamp).unwrap_or(now),
        updated_at: field("updatedAt").and_then(parse_timestamp).unwrap_or(now),
    }
}

fn to_order(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number as i64)
}

/// Resolves a legacy "HH:MM" time of day against today's date in the system
/// time zone.
fn today_at(time: &str) -> Option<Timestamp> {
    let today = Zoned::now().date();
    let civil: DateTime = format!("{today}T{time}:00").parse().ok()?;
    civil
        .to_zoned(TimeZone::system())
        .ok()
        .map(|zoned| zoned.timestamp())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::store::{CollectionStore, MemoryStore};

    fn repository() -> (Arc<MemoryStore>, ActionRepository) {
        let store = Arc::new(MemoryStore::new());
        let repository = ActionRepository::new(Snapshots::new(store.clone()));
        (store, repository)
    }

    fn fixed_now() -> Timestamp {
        "2024-03-10T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_current_record_passes_through() {
        let record = json!({
            "id": "a-1",
            "description": "Pay rent",
            "plannedAt": "2024-03-01T09:00:00Z",
            "status": "completed",
            "order": 4,
            "createdAt": "2024-02-01T00:00:00Z",
            "updatedAt": "2024-02-02T00:00:00Z",
        });
        let action = normalize_action(&record, 0, fixed_now());

        assert_eq!(action.id, "a-1");
        assert_eq!(action.description, "Pay rent");
        assert_eq!(
            action.planned_at,
            Some("2024-03-01T09:00:00Z".parse().unwrap())
        );
        assert_eq!(action.status, ActionStatus::Completed);
        assert_eq!(action.order, 4);
        assert_eq!(action.created_at, "2024-02-01T00:00:00Z".parse().unwrap());
    }

    #[test]
    fn test_missing_fields_are_defaulted() {
        let now = fixed_now();
        let action = normalize_action(&json!({}), 3, now);

        assert_eq!(action.id, format!("{}-3", now.as_millisecond()));
        assert_eq!(action.description, "");
        assert_eq!(action.planned_at, None);
        assert_eq!(action.status, ActionStatus::Active);
        assert_eq!(action.order, 3);
        assert_eq!(action.created_at, now);
        assert_eq!(action.updated_at, now);
    }

    #[test]
    fn test_numeric_id_and_order_are_coerced() {
        let action = normalize_action(&json!({"id": 17, "order": "2"}), 0, fixed_now());
        assert_eq!(action.id, "17");
        assert_eq!(action.order, 2);
    }

    #[test]
    fn test_unknown_status_becomes_active() {
        let action = normalize_action(&json!({"status": "done"}), 0, fixed_now());
        assert_eq!(action.status, ActionStatus::Active);
    }

    #[test]
    fn test_legacy_time_of_day_is_scheduled_today() {
        let action = normalize_action(&json!({"plannedTime": "09:30"}), 0, fixed_now());
        let planned = action.planned_at.expect("legacy time should schedule");
        let local = planned.to_zoned(TimeZone::system());

        assert_eq!(local.date(), Zoned::now().date());
        assert_eq!(local.hour(), 9);
        assert_eq!(local.minute(), 30);
    }

    #[test]
    fn test_civil_planned_at_is_read_in_system_zone() {
        let record = json!({"plannedAt": "2024-03-01T09:00", "plannedTime": "18:45"});
        let action = normalize_action(&record, 0, fixed_now());
        let planned = action.planned_at.expect("civil plannedAt should schedule");
        let local = planned.to_zoned(TimeZone::system());

        assert_eq!(local.date(), jiff::civil::date(2024, 3, 1));
        assert_eq!(local.hour(), 9);
        assert_eq!(local.minute(), 0);
    }

    #[test]
    fn test_legacy_unscheduled_flag_wins_over_time() {
        let record = json!({"plannedTime": "09:30", "isUnscheduled": true});
        let action = normalize_action(&record, 0, fixed_now());
        assert_eq!(action.planned_at, None);
    }

    #[test]
    fn test_non_list_payload_loads_empty() {
        let (store, repository) = repository();
        store.write(keys::ACTIONS, "{\"id\": 1}").unwrap();
        assert!(repository.get_all().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (_store, repository) = repository();
        let now = Timestamp::now();
        let mut scheduled = PlannedAction::new("Pay rent", Some(now), 0, now);
        scheduled.status = ActionStatus::Cancelled;
        let unscheduled = PlannedAction::new("Call Bob", None, 1, now);

        let actions = vec![scheduled, unscheduled];
        repository.save_all(&actions).unwrap();

        assert_eq!(repository.get_all(), actions);
    }
}

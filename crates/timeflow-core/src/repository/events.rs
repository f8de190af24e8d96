//! Event persistence and comment mutation.

use jiff::Timestamp;
use log::{debug, warn};
use serde_json::{Map, Value};

use super::coerce::{parse_timestamp, scalar_to_string};
use crate::{
    error::Result,
    models::{EventComment, EventItem, EventKind},
    store::{keys, Snapshots},
};

/// Loads and saves the event collection.
///
/// Stored records that cannot be coerced into an [`EventItem`] are kept
/// verbatim and written back after the known events on every save.
#[derive(Clone)]
pub struct EventRepository {
    snapshots: Snapshots,
}

impl EventRepository {
    pub fn new(snapshots: Snapshots) -> Self {
        Self { snapshots }
    }

    /// Reads every stored event, coercing records written by older versions.
    pub fn get_all(&self) -> Vec<EventItem> {
        let (events, unreadable) = self.read_records();
        if !unreadable.is_empty() {
            warn!(
                "Keeping {} unreadable event records as stored",
                unreadable.len()
            );
        }
        events
    }

    /// Overwrites the stored collection, carrying unreadable records through.
    pub fn save_all(&self, events: &[EventItem]) -> Result<()> {
        let (_, unreadable) = self.read_records();
        self.write_records(events, &unreadable)
    }

    /// Appends `comment` to the event `event_id` and returns the resulting
    /// collection. Nothing is written when the event does not exist.
    pub fn add_comment(&self, event_id: &str, comment: EventComment) -> Result<Vec<EventItem>> {
        let (mut events, unreadable) = self.read_records();
        let Some(index) = events.iter().position(|event| event.id == event_id) else {
            return Ok(events);
        };
        let event = &mut events[index];
        event.comments.push(comment);
        self.write_records(&events, &unreadable)?;
        Ok(events)
    }

    /// Removes comment `comment_id` from the event `event_id` and returns the
    /// resulting collection. Other events are never touched; nothing is
    /// written when no comment matched.
    pub fn delete_comment(&self, event_id: &str, comment_id: &str) -> Result<Vec<EventItem>> {
        let (mut events, unreadable) = self.read_records();
        let Some(index) = events.iter().position(|event| event.id == event_id) else {
            return Ok(events);
        };
        let event = &mut events[index];
        let before = event.comments.len();
        event.comments.retain(|comment| comment.id != comment_id);
        if event.comments.len() != before {
            self.write_records(&events, &unreadable)?;
        }
        Ok(events)
    }

    /// Splits the stored records into coerced events and raw records that
    /// could not be coerced.
    fn read_records(&self) -> (Vec<EventItem>, Vec<Value>) {
        match self.snapshots.load_json(keys::EVENTS) {
            Some(Value::Array(records)) => {
                let mut events = Vec::with_capacity(records.len());
                let mut unreadable = Vec::new();
                for record in records {
                    match normalize_event(&record) {
                        Some(event) => events.push(event),
                        None => unreadable.push(record),
                    }
                }
                (events, unreadable)
            }
            Some(_) => {
                warn!("Stored events are not a list; starting empty");
                (Vec::new(), Vec::new())
            }
            None => (Vec::new(), Vec::new()),
        }
    }

    fn write_records(&self, events: &[EventItem], unreadable: &[Value]) -> Result<()> {
        debug!(
            "Persisting {} events ({} kept unreadable)",
            events.len(),
            unreadable.len()
        );
        if unreadable.is_empty() {
            return self.snapshots.save(keys::EVENTS, events);
        }
        let mut records = events
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        records.extend(unreadable.iter().cloned());
        self.snapshots.save(keys::EVENTS, &records)
    }
}

/// Best-effort coercion of one stored record into an [`EventItem`].
///
/// `occurredAt` may be an instant or a civil date-time in the system time
/// zone. An unknown `type` reads as untyped and missing `comments` as none.
/// Returns `None` when the record has no usable `id` or `occurredAt`, or a
/// comment without an `id`.
pub(crate) fn normalize_event(record: &Value) -> Option<EventItem> {
    let fields = record.as_object()?;
    let field = |name: &str| fields.get(name).filter(|value| !value.is_null());

    let id = field("id").and_then(scalar_to_string)?;
    let occurred_at = field("occurredAt").and_then(parse_timestamp)?;

    let comments = match field("comments") {
        None => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| normalize_comment(item, &id, occurred_at))
            .collect::<Option<Vec<_>>>()?,
        Some(_) => return None,
    };

    Some(EventItem {
        id,
        action_id: field("actionId").and_then(scalar_to_string),
        kind: field("type")
            .and_then(|value| serde_json::from_value::<EventKind>(value.clone()).ok()),
        description: field("description")
            .and_then(scalar_to_string)
            .unwrap_or_default(),
        occurred_at,
        comments,
    })
}

fn normalize_comment(record: &Value, event_id: &str, fallback: Timestamp) -> Option<EventComment> {
    let empty = Map::new();
    let fields = record.as_object().unwrap_or(&empty);
    let field = |name: &str| fields.get(name).filter(|value| !value.is_null());

    Some(EventComment {
        id: field("id").and_then(scalar_to_string)?,
        event_id: field("eventId")
            .and_then(scalar_to_string)
            .unwrap_or_else(|| event_id.to_string()),
        text: field("text").and_then(scalar_to_string).unwrap_or_default(),
        created_at: field("createdAt").and_then(parse_timestamp).unwrap_or(fallback),
    })
}

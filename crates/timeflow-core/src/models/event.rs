//! Timeline event and comment models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::EventKind;

/// A comment attached to an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventComment {
    pub id: String,
    pub event_id: String,
    pub text: String,
    pub created_at: Timestamp,
}

impl EventComment {
    /// Builds a comment for `event_id` with trimmed text.
    pub fn new(event_id: &str, text: &str, now: Timestamp) -> Self {
        Self {
            id: super::new_id(),
            event_id: event_id.to_string(),
            text: text.trim().to_string(),
            created_at: now,
        }
    }
}

/// An entry in the chronological timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    /// Opaque unique identifier
    pub id: String,

    /// Action that caused a derived event; not an ownership link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,

    /// Event tag; absent is read as [`EventKind::Manual`]
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EventKind>,

    pub description: String,

    pub occurred_at: Timestamp,

    /// Comments in insertion order
    #[serde(default)]
    pub comments: Vec<EventComment>,
}

impl EventItem {
    /// Builds a manually logged event.
    pub fn manual(description: &str, occurred_at: Timestamp) -> Self {
        Self {
            id: super::new_id(),
            action_id: None,
            kind: Some(EventKind::Manual),
            description: description.trim().to_string(),
            occurred_at,
            comments: Vec::new(),
        }
    }

    /// Builds an event derived from the action `action_id`.
    pub fn derived(
        action_id: &str,
        kind: EventKind,
        description: String,
        occurred_at: Timestamp,
    ) -> Self {
        Self {
            id: super::new_id(),
            action_id: Some(action_id.to_string()),
            kind: Some(kind),
            description,
            occurred_at,
            comments: Vec::new(),
        }
    }

    /// The event tag with the manual default applied.
    pub fn effective_kind(&self) -> EventKind {
        self.kind.unwrap_or(EventKind::Manual)
    }
}

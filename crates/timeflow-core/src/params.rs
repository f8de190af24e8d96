//! Parameter structures for tracker operations
//!
//! These structures are shared across interfaces (the CLI today, anything
//! else tomorrow) without framework-specific derives. Interface layers define
//! their own argument types and convert into these with `From`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│    Tracker      │
//! │  (clap derives) │    │ (minimal deps)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::models::ActionStatus;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: String,
}

/// Where a new unscheduled action lands among the other unscheduled ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    /// At the position of the first unscheduled action
    Start,
    /// Right after the last unscheduled action
    #[default]
    End,
}

/// Parameters for creating a planned action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAction {
    pub description: String,
    /// Scheduled time; `None` creates an unscheduled action
    pub planned_at: Option<Timestamp>,
    /// Ignored for scheduled actions
    #[serde(default)]
    pub insert_at: InsertPosition,
}

/// Parameters for replacing an action's description and schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAction {
    pub id: String,
    pub description: String,
    pub planned_at: Option<Timestamp>,
}

/// Parameters for moving an unscheduled action within the manual order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveAction {
    pub id: String,
    /// 0-based rank among unscheduled actions; clamped into range
    pub target_index: usize,
}

/// Parameters for a status transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetStatus {
    pub id: String,
    pub status: ActionStatus,
}

/// Parameters for deleting an action or event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Delete {
    pub id: String,
    /// Explicit confirmation; required while the confirm-delete preference
    /// is enabled
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for listing actions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListActions {
    pub search: Option<String>,
    /// Sort scheduled actions latest first
    #[serde(default)]
    pub descending: bool,
}

/// Parameters for logging a manual event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogEvent {
    pub description: String,
    /// Defaults to the current time
    pub occurred_at: Option<Timestamp>,
}

/// Parameters for editing an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEvent {
    pub id: String,
    pub description: String,
    pub occurred_at: Timestamp,
}

/// Parameters for listing events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListEvents {
    pub search: Option<String>,
    /// Oldest first instead of newest first
    #[serde(default)]
    pub ascending: bool,
}

/// Parameters for commenting on an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddComment {
    pub event_id: String,
    pub text: String,
}

/// Parameters for removing a comment from an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveComment {
    pub event_id: String,
    pub comment_id: String,
}

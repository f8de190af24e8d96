//! Planned action model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ActionStatus;

/// A user task, optionally scheduled to a point in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedAction {
    /// Opaque unique identifier
    pub id: String,

    /// Free text, trimmed on write
    pub description: String,

    /// Scheduled time; `None` means the action is ordered manually
    pub planned_at: Option<Timestamp>,

    /// Lifecycle status
    pub status: ActionStatus,

    /// Manual position among unscheduled actions (0-indexed)
    pub order: i64,

    /// Timestamp when the action was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the action was last changed (UTC)
    pub updated_at: Timestamp,
}

impl PlannedAction {
    /// Builds a new active action stamped with `now`.
    pub fn new(description: &str, planned_at: Option<Timestamp>, order: i64, now: Timestamp) -> Self {
        Self {
            id: super::new_id(),
            description: description.trim().to_string(),
            planned_at,
            status: ActionStatus::Active,
            order,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the action carries a `planned_at` time.
    pub fn is_scheduled(&self) -> bool {
        self.planned_at.is_some()
    }

    /// Whether the action is active and its planned time lies before `now`.
    pub fn is_overdue_at(&self, now: Timestamp) -> bool {
        self.status == ActionStatus::Active && self.planned_at.is_some_and(|at| at < now)
    }
}

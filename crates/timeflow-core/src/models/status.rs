//! Status and tag enumerations for actions and events.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of action statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    /// Action is pending
    #[default]
    Active,

    /// Action has been done
    Completed,

    /// Action was abandoned
    Cancelled,
}

impl FromStr for ActionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ActionStatus::Active),
            "completed" => Ok(ActionStatus::Completed),
            "cancelled" => Ok(ActionStatus::Cancelled),
            _ => Err(format!("Invalid action status: {s}")),
        }
    }
}

impl ActionStatus {
    /// Stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::Active => "active",
            ActionStatus::Completed => "completed",
            ActionStatus::Cancelled => "cancelled",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use timeflow_core::models::ActionStatus;
    ///
    /// assert_eq!(ActionStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(ActionStatus::Cancelled.with_icon(), "✗ Cancelled");
    /// assert_eq!(ActionStatus::Active.with_icon(), "○ Active");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ActionStatus::Completed => "✓ Completed",
            ActionStatus::Cancelled => "✗ Cancelled",
            ActionStatus::Active => "○ Active",
        }
    }
}

/// Tag of a timeline event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// Logged by the user
    Manual,
    ActionCompleted,
    ActionCancelled,
    ActionOverdue,
    ActionReopened,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Manual => "manual",
            EventKind::ActionCompleted => "action-completed",
            EventKind::ActionCancelled => "action-cancelled",
            EventKind::ActionOverdue => "action-overdue",
            EventKind::ActionReopened => "action-reopened",
        }
    }
}

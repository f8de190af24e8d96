//! Data models for planned actions and timeline events.
//!
//! This module contains the domain models of the tracker. Display
//! implementations for these models live in [`crate::display::models`] so that
//! data structures and presentation stay separate.
//!
//! # Serialized Shape
//!
//! Every model serializes with camelCase field names (`plannedAt`,
//! `actionId`, `occurredAt`, ...) and RFC 3339 timestamps, which is the shape
//! stored in the snapshot blobs.
//!
//! # Examples
//!
//! ```rust
//! use timeflow_core::models::{ActionStatus, PlannedAction};
//! use jiff::Timestamp;
//!
//! let now = Timestamp::now();
//! let action = PlannedAction {
//!     id: "a-1".to_string(),
//!     description: "Pay rent".to_string(),
//!     planned_at: Some(now),
//!     status: ActionStatus::Active,
//!     order: 0,
//!     created_at: now,
//!     updated_at: now,
//! };
//! assert!(action.is_scheduled());
//! ```

pub mod action;
pub mod event;
pub mod filters;
pub mod settings;
pub mod status;


pub use action::PlannedAction;
pub use event::{EventComment, EventItem};
pub use filters::{ActionFilter, EventFilter, SortDirection};
pub use settings::Theme;
pub use status::{ActionStatus, EventKind};

/// Generates a fresh opaque identifier for actions, events and comments.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

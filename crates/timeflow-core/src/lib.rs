//! Core library for the Timeflow action tracker.
//!
//! Timeflow keeps two collections: **planned actions** (intentions, optionally
//! scheduled for a time) and **events** (a timeline of things that happened).
//! A reconciliation engine derives timeline events from action state, so
//! completing, cancelling or reopening a scheduled action, or letting it pass
//! its planned time, leaves a record in the timeline.
//!
//! # Layers
//!
//! - [`store`]: Key/blob persistence ([`SqliteStore`], [`MemoryStore`])
//! - [`repository`]: Typed access to the stored collections, including
//!   normalization of legacy action records
//! - [`ledger`]: In-memory collections, ordering rules and reconciliation
//! - [`tracker`]: The async [`Tracker`] facade used by interfaces
//! - [`display`]: Markdown formatting for models and operation results
//!
//! # Quick Start
//!
//! ```rust
//! use timeflow_core::{params::{CreateAction, Id}, MemoryStore, TrackerBuilder};
//! use jiff::{Timestamp, ToSpan};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_store(Arc::new(MemoryStore::new()))
//!     .build()
//!     .await?;
//!
//! let action = tracker
//!     .create_action(&CreateAction {
//!         description: "Pay rent".to_string(),
//!         planned_at: Some(Timestamp::now().checked_add(2.hours())?),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! tracker.complete_action(&Id { id: action.id }).await?;
//! let timeline = tracker.event_feed(&Default::default()).await?;
//! assert_eq!(timeline.0[0].description, "Action completed: Pay rent");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod params;
pub mod repository;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    ActionFeed, Actions, CreateResult, DeleteResult, Events, LocalDateTime, OperationStatus,
    UpdateResult,
};
pub use error::{Result, TrackerError};
pub use ledger::StatusChange;
pub use models::{
    ActionStatus, EventComment, EventItem, EventKind, PlannedAction, SortDirection, Theme,
};
pub use params::{
    AddComment, CreateAction, Delete, Id, InsertPosition, ListActions, ListEvents, LogEvent,
    MoveAction, RemoveComment, SetStatus, UpdateAction, UpdateEvent,
};
pub use store::{CollectionStore, MemoryStore, Snapshots, SqliteStore};
pub use tracker::{Session, Tracker, TrackerBuilder};

//! Display formatting for models, collections and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and operation outcomes are wrapped in small newtypes so each output context
//! formats consistently.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Collections &   │    │    Markdown     │
//! │ (Action, Event) │───▶│  Result Types   │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Actions, Events, ActionFeed)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use timeflow_core::{
//!     display::{CreateResult, OperationStatus},
//!     models::PlannedAction,
//! };
//! use jiff::Timestamp;
//!
//! let action = PlannedAction::new("Buy milk", None, 0, Timestamp::now());
//! let output = format!("{}", CreateResult::new(action.clone()));
//! assert!(output.contains(&format!("Created action with ID: {}", action.id)));
//!
//! let status = OperationStatus::success("Theme set to dark".to_string());
//! assert_eq!(format!("{status}"), "Success: Theme set to dark\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{ActionFeed, Actions, Events};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;

//! High-level tracker API for managing actions and events.
//!
//! [`Tracker`] is the async entry point of the crate. It owns a [`Session`]
//! (both ledgers plus preferences) behind a mutex and runs every operation on
//! the blocking thread pool, so storage I/O never stalls the runtime and no
//! two operations interleave.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Tracker      │    │    Session      │    │   Snapshots     │
//! │ (action_ops,    │───▶│ (ledgers and    │───▶│ (SQLite or      │
//! │  event_ops)     │    │  reconcile)     │    │  memory)        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Tracker`] instances
//! - [`action_ops`]: Planned action operations and feeds
//! - [`event_ops`]: Event, comment and timeline operations
//! - [`preference_ops`]: Confirm-delete and theme preferences
//!
//! # Usage
//!
//! ```rust
//! use timeflow_core::{params::CreateAction, MemoryStore, TrackerBuilder};
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
//!         description: "Buy milk".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("Created: {}", action);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tokio::{sync::Mutex, task};

use crate::error::{Result, TrackerError};

pub mod action_ops;
pub mod builder;
pub mod event_ops;
pub mod preference_ops;
mod session;


pub use builder::TrackerBuilder;
pub use session::Session;

/// Main tracker interface.
#[derive(Clone)]
pub struct Tracker {
    session: Arc<Mutex<Session>>,
}

impl Tracker {
    pub(crate) fn new(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Runs `op` against the session on the blocking pool.
    async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Session) -> Result<T> + Send + 'static,
    {
        let session = Arc::clone(&self.session);
        task::spawn_blocking(move || {
            let mut session = session.blocking_lock();
            op(&mut session)
        })
        .await
        .map_err(TrackerError::join)?
    }
}

//! In-memory ledgers and the reconciliation engine.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  ActionLedger   │───▶│   reconcile     │───▶│   EventLedger   │
//! │ (ordering ops)  │    │ (derive events) │    │ (timeline ops)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          │                                             │
//!          ▼                                             ▼
//!   ActionRepository                              EventRepository
//! ```
//!
//! Both ledgers own a snapshot of their collection. Every mutation builds the
//! next snapshot, installs it, then persists it with a single write. Readers
//! only ever see a whole snapshot through `items()`.

pub mod actions;
pub mod events;
pub mod ordering;
pub mod reconcile;

pub use actions::{ActionLedger, StatusChange};
pub use events::EventLedger;

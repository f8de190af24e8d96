//! Repositories mapping domain collections onto named snapshots.
//!
//! Each repository reads and writes one whole collection through
//! [`Snapshots`](crate::store::Snapshots). Loading never fails: records are
//! coerced where possible, and a corrupt payload degrades to an empty
//! collection (or the preference default).

pub mod actions;
mod coerce;
pub mod events;
pub mod preferences;

pub use actions::ActionRepository;
pub use events::EventRepository;
pub use preferences::Preferences;

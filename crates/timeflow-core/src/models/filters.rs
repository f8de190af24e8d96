//! Filter types for querying the action and event feeds.

use crate::params::{ListActions, ListEvents};

/// Sort direction for time-ordered feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Case-insensitive substring match; an empty query matches everything.
fn matches_query(query: Option<&str>, description: &str) -> bool {
    match query.map(str::trim) {
        None | Some("") => true,
        Some(query) => description
            .to_lowercase()
            .contains(&query.to_lowercase()),
    }
}

/// Filter options for the action feeds.
#[derive(Debug, Clone)]
pub struct ActionFilter {
    /// Description search (case-insensitive partial match)
    pub search: Option<String>,

    /// Ordering of the scheduled feed by planned time
    pub direction: SortDirection,
}

impl Default for ActionFilter {
    fn default() -> Self {
        Self {
            search: None,
            direction: SortDirection::Ascending,
        }
    }
}

impl ActionFilter {
    /// Whether `description` passes the search query.
    pub fn matches(&self, description: &str) -> bool {
        matches_query(self.search.as_deref(), description)
    }
}

impl From<&ListActions> for ActionFilter {
    fn from(params: &ListActions) -> Self {
        Self {
            search: params.search.clone(),
            direction: if params.descending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        }
    }
}

/// Filter options for the event feed.
#[derive(Debug, Clone)]
pub struct EventFilter {
    /// Description search (case-insensitive partial match)
    pub search: Option<String>,

    /// Ordering by `occurred_at`; newest first by default
    pub direction: SortDirection,
}

impl Default for EventFilter {
    fn default() -> Self {
        Self {
            search: None,
            direction: SortDirection::Descending,
        }
    }
}

impl EventFilter {
    /// Whether `description` passes the search query.
    pub fn matches(&self, description: &str) -> bool {
        matches_query(self.search.as_deref(), description)
    }
}

impl From<&ListEvents> for EventFilter {
    fn from(params: &ListEvents) -> Self {
        Self {
            search: params.search.clone(),
            direction: if params.ascending {
                SortDirection::Ascending
            } else {
                SortDirection::Descending
            },
        }
    }
}

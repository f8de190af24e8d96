//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{EventItem, PlannedAction};

/// Newtype wrapper for displaying a list of planned actions.
///
/// # Examples
///
/// ```rust
/// use timeflow_core::{display::Actions, models::PlannedAction};
/// use jiff::Timestamp;
///
/// let actions = Actions(vec![PlannedAction::new("Buy milk", None, 0, Timestamp::now())]);
/// assert!(format!("{actions}").contains("### Buy milk"));
/// assert_eq!(format!("{}", Actions(vec![])), "No actions found.\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Actions(pub Vec<PlannedAction>);

impl Actions {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlannedAction> {
        self.0.iter()
    }
}

impl IntoIterator for Actions {
    type Item = PlannedAction;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Actions {
    type Item = &'a PlannedAction;
    type IntoIter = std::slice::Iter<'a, PlannedAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Actions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No actions found.");
        }
        for action in &self.0 {
            write!(f, "{action}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a timeline.
#[derive(Debug, Clone, Default)]
pub struct Events(pub Vec<EventItem>);

impl Events {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventItem> {
        self.0.iter()
    }
}

impl IntoIterator for Events {
    type Item = EventItem;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Events {
    type Item = &'a EventItem;
    type IntoIter = std::slice::Iter<'a, EventItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No events found.");
        }
        for event in &self.0 {
            write!(f, "{event}")?;
        }
        Ok(())
    }
}

/// The active action feed, split into its scheduled and unscheduled parts.
#[derive(Debug, Clone, Default)]
pub struct ActionFeed {
    pub scheduled: Actions,
    pub unscheduled: Actions,
}

impl ActionFeed {
    pub fn is_empty(&self) -> bool {
        self.scheduled.is_empty() && self.unscheduled.is_empty()
    }
}

impl fmt::Display for ActionFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No active actions.");
        }
        if !self.scheduled.is_empty() {
            writeln!(f, "## Scheduled")?;
            writeln!(f)?;
            write!(f, "{}", self.scheduled)?;
        }
        if !self.unscheduled.is_empty() {
            writeln!(f, "## Unscheduled")?;
            writeln!(f)?;
            write!(f, "{}", self.unscheduled)?;
        }
        Ok(())
    }
}

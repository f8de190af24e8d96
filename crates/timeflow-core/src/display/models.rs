//! Display implementations for domain models.
//!
//! Every model renders as markdown: a `###` heading followed by a metadata
//! list, so a collection of them reads as a sequence of sections.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{ActionStatus, EventComment, EventItem, EventKind, PlannedAction, Theme};

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlannedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.description, self.status.with_icon())?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        match &self.planned_at {
            Some(planned_at) => writeln!(f, "- Planned: {}", LocalDateTime(planned_at))?,
            None => writeln!(f, "- Planned: unscheduled (position {})", self.order)?,
        }
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)
    }
}

impl fmt::Display for EventComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} ({}, ID: {})",
            self.text,
            LocalDateTime(&self.created_at),
            self.id
        )
    }
}

impl fmt::Display for EventItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.description, self.effective_kind())?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Occurred: {}", LocalDateTime(&self.occurred_at))?;
        if let Some(action_id) = &self.action_id {
            writeln!(f, "- Action: {action_id}")?;
        }
        writeln!(f)?;

        if !self.comments.is_empty() {
            writeln!(f, "#### Comments")?;
            writeln!(f)?;
            for comment in &self.comments {
                write!(f, "{comment}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

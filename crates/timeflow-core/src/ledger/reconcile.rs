//! Reconciliation engine: derive timeline events from action state.
//!
//! Two kinds of derived events exist:
//!
//! - **Transition events** (`action-completed`, `action-cancelled`,
//!   `action-reopened`) are emitted synchronously, once per effective status
//!   change of a scheduled action.
//! - **Overdue events** are found by scanning. The scan keys on the action id
//!   alone: once an `action-overdue` event for an action exists anywhere in
//!   the timeline, that action is never flagged again, so repeated scans are
//!   idempotent.

use std::collections::HashSet;

use jiff::Timestamp;
use log::debug;

use super::{ActionLedger, EventLedger};
use crate::{
    error::Result,
    models::{ActionStatus, EventItem, EventKind, PlannedAction},
};

/// Builds the event for an action that moved from `previous` to its current
/// status. Unscheduled actions and unchanged statuses produce nothing.
pub fn transition_event(
    action: &PlannedAction,
    previous: ActionStatus,
    now: Timestamp,
) -> Option<EventItem> {
    if !action.is_scheduled() || previous == action.status {
        return None;
    }

    let (kind, description) = match action.status {
        ActionStatus::Completed => (
            EventKind::ActionCompleted,
            format!("Action completed: {}", action.description),
        ),
        ActionStatus::Cancelled => (
            EventKind::ActionCancelled,
            format!("Action cancelled: {}", action.description),
        ),
        ActionStatus::Active => (
            EventKind::ActionReopened,
            format!("Action returned to active: {}", action.description),
        ),
    };
    Some(EventItem::derived(&action.id, kind, description, now))
}

/// Builds one `action-overdue` event for every active action planned before
/// `now` that has no overdue event in `events` yet.
pub fn overdue_events(
    actions: &[PlannedAction],
    events: &[EventItem],
    now: Timestamp,
) -> Vec<EventItem> {
    let flagged: HashSet<&str> = events
        .iter()
        .filter(|event| event.kind == Some(EventKind::ActionOverdue))
        .filter_map(|event| event.action_id.as_deref())
        .collect();

    actions
        .iter()
        .filter(|action| action.is_overdue_at(now) && !flagged.contains(action.id.as_str()))
        .map(|action| {
            EventItem::derived(
                &action.id,
                EventKind::ActionOverdue,
                format!("Action overdue: {}", action.description),
                now,
            )
        })
        .collect()
}

/// Appends the missing overdue events to `events` with a single write and
/// returns them. Calling it again without an intervening change appends
/// nothing.
pub fn sync_overdue(
    actions: &ActionLedger,
    events: &mut EventLedger,
    now: Timestamp,
) -> Result<Vec<EventItem>> {
    events.load();
    let overdue = overdue_events(actions.items(), events.items(), now);
    if !overdue.is_empty() {
        debug!("Flagging {} overdue actions", overdue.len());
        events.append_all(overdue.clone())?;
    }
    Ok(overdue)
}

#[cfg(test)]
mod tests {
    use jiff::ToSpan;

    use super::*;

    fn action(description: &str, planned_at: Option<Timestamp>, status: ActionStatus) -> PlannedAction {
        let now = Timestamp::now();
        let mut action = PlannedAction::new(description, planned_at, 0, now);
        action.status = status;
        action
    }

    fn yesterday() -> Timestamp {
        Timestamp::now().checked_sub(24.hours()).unwrap()
    }

    #[test]
    fn test_transition_table() {
        let now = Timestamp::now();
        let cases = [
            (ActionStatus::Active, ActionStatus::Completed, EventKind::ActionCompleted, "Action completed: Pay rent"),
            (ActionStatus::Cancelled, ActionStatus::Completed, EventKind::ActionCompleted, "Action completed: Pay rent"),
            (ActionStatus::Active, ActionStatus::Cancelled, EventKind::ActionCancelled, "Action cancelled: Pay rent"),
            (ActionStatus::Completed, ActionStatus::Cancelled, EventKind::ActionCancelled, "Action cancelled: Pay rent"),
            (ActionStatus::Completed, ActionStatus::Active, EventKind::ActionReopened, "Action returned to active: Pay rent"),
            (ActionStatus::Cancelled, ActionStatus::Active, EventKind::ActionReopened, "Action returned to active: Pay rent"),
        ];

        for (previous, next, kind, description) in cases {
            let action = action("Pay rent", Some(now), next);
            let event = transition_event(&action, previous, now)
                .unwrap_or_else(|| panic!("{previous:?} -> {next:?} should derive an event"));
            assert_eq!(event.kind, Some(kind));
            assert_eq!(event.description, description);
            assert_eq!(event.action_id.as_deref(), Some(action.id.as_str()));
            assert_eq!(event.occurred_at, now);
            assert!(event.comments.is_empty());
        }
    }

    #[test]
    fn test_unscheduled_or_unchanged_derive_nothing() {
        let now = Timestamp::now();
        let unscheduled = action("Note", None, ActionStatus::Completed);
        assert!(transition_event(&unscheduled, ActionStatus::Active, now).is_none());

        let scheduled = action("Pay rent", Some(now), ActionStatus::Completed);
        assert!(transition_event(&scheduled, ActionStatus::Completed, now).is_none());
    }

    #[test]
    fn test_overdue_only_for_active_past_actions() {
        let now = Timestamp::now();
        let tomorrow = now.checked_add(24.hours()).unwrap();
        let actions = vec![
            action("Pay rent", Some(yesterday()), ActionStatus::Active),
            action("Dentist", Some(tomorrow), ActionStatus::Active),
            action("Old", Some(yesterday()), ActionStatus::Completed),
            action("Note", None, ActionStatus::Active),
        ];

        let events = overdue_events(&actions, &[], now);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, Some(EventKind::ActionOverdue));
        assert_eq!(events[0].description, "Action overdue: Pay rent");
        assert_eq!(events[0].action_id.as_deref(), Some(actions[0].id.as_str()));
    }

    #[test]
    fn test_overdue_deduplicates_on_action_id() {
        let now = Timestamp::now();
        let actions = vec![action("Pay rent", Some(yesterday()), ActionStatus::Active)];
        let existing = overdue_events(&actions, &[], now);

        assert!(overdue_events(&actions, &existing, now).is_empty());

        // Other event kinds referencing the action do not count.
        let reopened = EventItem::derived(
            &actions[0].id,
            EventKind::ActionReopened,
            "Action returned to active: Pay rent".to_string(),
            now,
        );
        assert_eq!(overdue_events(&actions, &[reopened], now).len(), 1);
    }
}

//! Synchronous composition of both ledgers.

use jiff::Timestamp;
use log::debug;

use crate::{
    error::{Result, TrackerError},
    ledger::{reconcile, ActionLedger, EventLedger, StatusChange},
    models::{EventItem, PlannedAction},
    params::{CreateAction, Delete, MoveAction, SetStatus, UpdateAction},
    repository::{ActionRepository, EventRepository, Preferences},
    store::Snapshots,
};

/// One writer's view of the tracker: both ledgers plus preferences.
///
/// Every action mutation persists the actions first, then reconciles the
/// timeline.
pub struct Session {
    pub(crate) actions: ActionLedger,
    pub(crate) events: EventLedger,
    pub(crate) preferences: Preferences,
}

impl Session {
    pub fn new(snapshots: Snapshots) -> Self {
        Self {
            actions: ActionLedger::new(ActionRepository::new(snapshots.clone())),
            events: EventLedger::new(EventRepository::new(snapshots.clone())),
            preferences: Preferences::new(snapshots),
        }
    }

    /// Loads both ledgers (once) and flags overdue actions.
    pub fn load(&mut self, now: Timestamp) -> Result<()> {
        self.actions.load();
        self.events.load();
        self.sync_overdue(now)?;
        Ok(())
    }

    pub fn sync_overdue(&mut self, now: Timestamp) -> Result<Vec<EventItem>> {
        reconcile::sync_overdue(&self.actions, &mut self.events, now)
    }

    pub fn create_action(&mut self, params: &CreateAction, now: Timestamp) -> Result<PlannedAction> {
        let action = self.actions.create(params, now)?;
        self.sync_overdue(now)?;
        Ok(action)
    }

    pub fn update_action(
        &mut self,
        params: &UpdateAction,
        now: Timestamp,
    ) -> Result<Option<PlannedAction>> {
        let action = self.actions.update(params, now)?;
        self.sync_overdue(now)?;
        Ok(action)
    }

    pub fn move_action(&mut self, params: &MoveAction, now: Timestamp) -> Result<Option<PlannedAction>> {
        self.actions.reorder_unscheduled(params, now)
    }

    /// Applies a status transition, reconciles overdue actions, then appends
    /// the transition event for scheduled actions.
    pub fn set_status(&mut self, params: &SetStatus, now: Timestamp) -> Result<Option<StatusChange>> {
        let Some(change) = self.actions.set_status(&params.id, params.status, now)? else {
            return Ok(None);
        };
        self.sync_overdue(now)?;

        if let Some(event) = reconcile::transition_event(&change.action, change.previous, now) {
            debug!("Deriving {} for action {}", event.effective_kind().as_str(), change.action.id);
            self.events.append(event)?;
        }
        Ok(Some(change))
    }

    pub fn delete_action(&mut self, params: &Delete) -> Result<Option<PlannedAction>> {
        self.ensure_confirmed(params, "Action")?;
        self.actions.delete(&params.id)
    }

    pub fn delete_event(&mut self, params: &Delete) -> Result<Option<EventItem>> {
        self.ensure_confirmed(params, "Event")?;
        self.events.delete(&params.id)
    }

    /// Rejects an unconfirmed deletion while the confirm-delete preference
    /// is on.
    fn ensure_confirmed(&self, params: &Delete, what: &str) -> Result<()> {
        if params.confirmed || !self.preferences.confirm_delete() {
            return Ok(());
        }
        Err(TrackerError::invalid_input("confirmed").with_reason(format!(
            "{what} deletion requires explicit confirmation. Set 'confirmed' to true or disable the confirm-delete preference."
        )))
    }
}

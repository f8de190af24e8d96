//! The action ledger: canonical in-memory planned actions.

use jiff::Timestamp;
use log::debug;

use super::ordering::{move_unscheduled, normalize_order, sort_manual, unscheduled_insert_index};
use crate::{
    error::Result,
    models::{ActionFilter, ActionStatus, PlannedAction, SortDirection},
    params::{CreateAction, MoveAction, UpdateAction},
    repository::ActionRepository,
};

/// Outcome of an effective status transition.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    /// Status before the transition
    pub previous: ActionStatus,
    /// The action after the transition
    pub action: PlannedAction,
}

/// Owns the planned action collection and persists it after every mutation.
pub struct ActionLedger {
    repository: ActionRepository,
    items: Vec<PlannedAction>,
    loaded: bool,
}

impl ActionLedger {
    pub fn new(repository: ActionRepository) -> Self {
        Self {
            repository,
            items: Vec::new(),
            loaded: false,
        }
    }

    /// Reads the stored collection once; later calls do nothing.
    pub fn load(&mut self) {
        if self.loaded {
            return;
        }
        self.items = self.repository.get_all();
        self.loaded = true;
        debug!("Loaded {} actions", self.items.len());
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Read-only view of the current snapshot, in raw (manual) sequence.
    pub fn items(&self) -> &[PlannedAction] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&PlannedAction> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Installs `next` as the current snapshot, then persists it.
    fn replace(&mut self, next: Vec<PlannedAction>) -> Result<()> {
        self.items = next;
        self.repository.save_all(&self.items)
    }

    /// Creates an active action.
    ///
    /// Unscheduled actions are spliced among the other unscheduled ones at
    /// `params.insert_at`; scheduled actions go to the end of the collection.
    pub fn create(&mut self, params: &CreateAction, now: Timestamp) -> Result<PlannedAction> {
        let action = PlannedAction::new(
            &params.description,
            params.planned_at,
            self.items.len() as i64,
            now,
        );

        let mut next = if action.is_scheduled() {
            let mut next = self.items.clone();
            next.push(action.clone());
            next
        } else {
            let mut ordered = sort_manual(&self.items);
            let index = unscheduled_insert_index(&ordered, params.insert_at);
            ordered.insert(index, action.clone());
            ordered
        };
        normalize_order(&mut next);
        self.replace(next)?;

        Ok(self.get(&action.id).cloned().unwrap_or(action))
    }

    /// Replaces description and schedule of an action. The collection is
    /// renormalized and persisted even when `params.id` is unknown.
    pub fn update(&mut self, params: &UpdateAction, now: Timestamp) -> Result<Option<PlannedAction>> {
        let mut next = self.items.clone();
        if let Some(item) = next.iter_mut().find(|item| item.id == params.id) {
            item.description = params.description.trim().to_string();
            item.planned_at = params.planned_at;
            item.updated_at = now;
        }
        normalize_order(&mut next);
        self.replace(next)?;

        Ok(self.get(&params.id).cloned())
    }

    /// Moves an unscheduled action to a new rank among unscheduled actions.
    /// Unknown or scheduled ids leave everything untouched.
    pub fn reorder_unscheduled(
        &mut self,
        params: &MoveAction,
        now: Timestamp,
    ) -> Result<Option<PlannedAction>> {
        let ordered = sort_manual(&self.items);
        let Some(mut next) = move_unscheduled(&ordered, &params.id, params.target_index, now) else {
            return Ok(None);
        };
        normalize_order(&mut next);
        self.replace(next)?;

        Ok(self.get(&params.id).cloned())
    }

    /// Changes the status of an action. Returns `None` without writing when
    /// the action is unknown or already has `status`.
    pub fn set_status(
        &mut self,
        id: &str,
        status: ActionStatus,
        now: Timestamp,
    ) -> Result<Option<StatusChange>> {
        let previous = match self.get(id) {
            Some(target) if target.status != status => target.status,
            _ => return Ok(None),
        };

        let mut next = self.items.clone();
        for item in next.iter_mut().filter(|item| item.id == id) {
            item.status = status;
            item.updated_at = now;
        }
        normalize_order(&mut next);
        self.replace(next)?;

        Ok(self
            .get(id)
            .cloned()
            .map(|action| StatusChange { previous, action }))
    }

    /// Removes an action. Events already derived from it are kept.
    pub fn delete(&mut self, id: &str) -> Result<Option<PlannedAction>> {
        let removed = self.get(id).cloned();
        let mut next: Vec<PlannedAction> =
            self.items.iter().filter(|item| item.id != id).cloned().collect();
        normalize_order(&mut next);
        self.replace(next)?;

        Ok(removed)
    }

    /// Active scheduled actions ordered by planned time.
    pub fn scheduled(&self, filter: &ActionFilter) -> Vec<PlannedAction> {
        let mut list: Vec<PlannedAction> = self
            .items
            .iter()
            .filter(|item| {
                item.status == ActionStatus::Active
                    && item.is_scheduled()
                    && filter.matches(&item.description)
            })
            .cloned()
            .collect();
        list.sort_by_key(|item| item.planned_at);
        if filter.direction == SortDirection::Descending {
            list.reverse();
        }
        list
    }

    /// Active unscheduled actions in manual order.
    pub fn unscheduled(&self, filter: &ActionFilter) -> Vec<PlannedAction> {
        let list: Vec<PlannedAction> = self
            .items
            .iter()
            .filter(|item| {
                item.status == ActionStatus::Active
                    && !item.is_scheduled()
                    && filter.matches(&item.description)
            })
            .cloned()
            .collect();
        sort_manual(&list)
    }

    /// Completed and cancelled actions, most recently updated first.
    pub fn archived(&self, filter: &ActionFilter) -> Vec<PlannedAction> {
        let mut list: Vec<PlannedAction> = self
            .items
            .iter()
            .filter(|item| item.status != ActionStatus::Active && filter.matches(&item.description))
            .cloned()
            .collect();
        list.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        list
    }
}

//! Planned action operations for the Tracker.

use jiff::Timestamp;

use super::Tracker;
use crate::{
    display::{ActionFeed, Actions},
    error::Result,
    ledger::StatusChange,
    models::{ActionFilter, ActionStatus, PlannedAction},
    params::{CreateAction, Delete, Id, ListActions, MoveAction, SetStatus, UpdateAction},
};

impl Tracker {
    /// Creates a planned action and flags it if it is already overdue.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use timeflow_core::{params::{CreateAction, InsertPosition}, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let action = tracker
    ///     .create_action(&CreateAction {
    ///         description: "Call Bob".to_string(),
    ///         planned_at: None,
    ///         insert_at: InsertPosition::Start,
    ///     })
    ///     .await?;
    /// # Result::<(), timeflow_core::TrackerError>::Ok(())
    /// # };
    /// ```
    pub async fn create_action(&self, params: &CreateAction) -> Result<PlannedAction> {
        let params = params.clone();
        self.run(move |session| session.create_action(&params, Timestamp::now()))
            .await
    }

    /// Replaces an action's description and schedule. Returns `None` for an
    /// unknown id.
    pub async fn update_action(&self, params: &UpdateAction) -> Result<Option<PlannedAction>> {
        let params = params.clone();
        self.run(move |session| session.update_action(&params, Timestamp::now()))
            .await
    }

    /// Moves an unscheduled action within the manual order.
    pub async fn move_action(&self, params: &MoveAction) -> Result<Option<PlannedAction>> {
        let params = params.clone();
        self.run(move |session| session.move_action(&params, Timestamp::now()))
            .await
    }

    /// Changes an action's status, deriving timeline events for scheduled
    /// actions. Returns `None` when the id is unknown or the status is
    /// unchanged.
    pub async fn set_action_status(&self, params: &SetStatus) -> Result<Option<StatusChange>> {
        let params = params.clone();
        self.run(move |session| session.set_status(&params, Timestamp::now()))
            .await
    }

    /// Marks an action completed.
    pub async fn complete_action(&self, params: &Id) -> Result<Option<StatusChange>> {
        self.transition(params, ActionStatus::Completed).await
    }

    /// Marks an action cancelled.
    pub async fn cancel_action(&self, params: &Id) -> Result<Option<StatusChange>> {
        self.transition(params, ActionStatus::Cancelled).await
    }

    /// Returns a completed or cancelled action to active.
    pub async fn reopen_action(&self, params: &Id) -> Result<Option<StatusChange>> {
        self.transition(params, ActionStatus::Active).await
    }

    async fn transition(&self, params: &Id, status: ActionStatus) -> Result<Option<StatusChange>> {
        self.set_action_status(&SetStatus {
            id: params.id.clone(),
            status,
        })
        .await
    }

    /// Deletes an action. Derived events referencing it are kept.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if `confirmed` is false while the
    /// confirm-delete preference is enabled
    pub async fn delete_action(&self, params: &Delete) -> Result<Option<PlannedAction>> {
        let params = params.clone();
        self.run(move |session| session.delete_action(&params)).await
    }

    /// Retrieves a single action by its ID.
    pub async fn get_action(&self, params: &Id) -> Result<Option<PlannedAction>> {
        let id = params.id.clone();
        self.run(move |session| Ok(session.actions.get(&id).cloned()))
            .await
    }

    /// All actions in manual sequence.
    pub async fn all_actions(&self) -> Result<Actions> {
        self.run(|session| Ok(Actions(session.actions.items().to_vec())))
            .await
    }

    /// The active feed: scheduled actions by time, then unscheduled actions
    /// in manual order.
    pub async fn action_feed(&self, params: &ListActions) -> Result<ActionFeed> {
        let filter = ActionFilter::from(params);
        self.run(move |session| {
            Ok(ActionFeed {
                scheduled: Actions(session.actions.scheduled(&filter)),
                unscheduled: Actions(session.actions.unscheduled(&filter)),
            })
        })
        .await
    }

    /// Completed and cancelled actions, most recently updated first.
    pub async fn archived_actions(&self, params: &ListActions) -> Result<Actions> {
        let filter = ActionFilter::from(params);
        self.run(move |session| Ok(Actions(session.actions.archived(&filter))))
            .await
    }
}

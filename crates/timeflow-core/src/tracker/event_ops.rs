//! Event, comment and reconciliation operations for the Tracker.

use jiff::Timestamp;

use super::Tracker;
use crate::{
    display::Events,
    error::Result,
    models::{EventComment, EventFilter, EventItem},
    params::{AddComment, Delete, Id, ListEvents, LogEvent, RemoveComment, UpdateEvent},
};

impl Tracker {
    /// Loads both collections if needed, then flags overdue actions.
    pub async fn load(&self) -> Result<()> {
        self.run(|session| session.load(Timestamp::now())).await
    }

    /// Appends an `action-overdue` event for every newly overdue action and
    /// returns the appended events. Safe to call repeatedly.
    pub async fn sync_overdue(&self) -> Result<Events> {
        self.run(|session| session.sync_overdue(Timestamp::now()).map(Events))
            .await
    }

    /// Logs a manual event.
    pub async fn log_event(&self, params: &LogEvent) -> Result<EventItem> {
        let params = params.clone();
        self.run(move |session| session.events.log(&params, Timestamp::now()))
            .await
    }

    /// Edits an event's description and time. Returns `None` for an unknown
    /// id.
    pub async fn update_event(&self, params: &UpdateEvent) -> Result<Option<EventItem>> {
        let params = params.clone();
        self.run(move |session| session.events.update(&params)).await
    }

    /// Deletes an event and its comments.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if `confirmed` is false while the
    /// confirm-delete preference is enabled
    pub async fn delete_event(&self, params: &Delete) -> Result<Option<EventItem>> {
        let params = params.clone();
        self.run(move |session| session.delete_event(&params)).await
    }

    /// Retrieves a single event by its ID.
    pub async fn get_event(&self, params: &Id) -> Result<Option<EventItem>> {
        let id = params.id.clone();
        self.run(move |session| Ok(session.events.get(&id).cloned()))
            .await
    }

    /// The timeline, newest first unless `ascending` is set.
    pub async fn event_feed(&self, params: &ListEvents) -> Result<Events> {
        let filter = EventFilter::from(params);
        self.run(move |session| Ok(Events(session.events.feed(&filter))))
            .await
    }

    /// Comments on an event. Returns `None` when the event does not exist.
    pub async fn add_comment(&self, params: &AddComment) -> Result<Option<EventComment>> {
        let params = params.clone();
        self.run(move |session| session.events.comment(&params, Timestamp::now()))
            .await
    }

    /// Removes a comment from an event. Returns the removed comment, if any.
    pub async fn remove_comment(&self, params: &RemoveComment) -> Result<Option<EventComment>> {
        let params = params.clone();
        self.run(move |session| session.events.remove_comment(&params))
            .await
    }
}

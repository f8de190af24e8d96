//! The event ledger: canonical in-memory timeline.

use jiff::Timestamp;
use log::debug;

use crate::{
    error::Result,
    models::{EventComment, EventFilter, EventItem, SortDirection},
    params::{AddComment, LogEvent, RemoveComment, UpdateEvent},
    repository::EventRepository,
};

/// Owns the event collection and persists it after every mutation.
pub struct EventLedger {
    repository: EventRepository,
    items: Vec<EventItem>,
    loaded: bool,
}

impl EventLedger {
    pub fn new(repository: EventRepository) -> Self {
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
        debug!("Loaded {} events", self.items.len());
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Read-only view of the current snapshot, in insertion order.
    pub fn items(&self) -> &[EventItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&EventItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn replace(&mut self, next: Vec<EventItem>) -> Result<()> {
        self.items = next;
        self.repository.save_all(&self.items)
    }

    pub fn append(&mut self, event: EventItem) -> Result<()> {
        self.append_all(vec![event])
    }

    /// Appends several events with a single write. Nothing is written for an
    /// empty batch.
    pub fn append_all(&mut self, events: Vec<EventItem>) -> Result<()> {
        if events.is_empty() {
            return Ok(());
        }
        let mut next = self.items.clone();
        next.extend(events);
        self.replace(next)
    }

    /// Logs a manual event, stamped now unless a time is given.
    pub fn log(&mut self, params: &LogEvent, now: Timestamp) -> Result<EventItem> {
        let event = EventItem::manual(&params.description, params.occurred_at.unwrap_or(now));
        self.append(event.clone())?;
        Ok(event)
    }

    pub fn update(&mut self, params: &UpdateEvent) -> Result<Option<EventItem>> {
        let next = self
            .items
            .iter()
            .map(|item| {
                if item.id == params.id {
                    EventItem {
                        description: params.description.trim().to_string(),
                        occurred_at: params.occurred_at,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        self.replace(next)?;

        Ok(self.get(&params.id).cloned())
    }

    /// Removes an event together with its comments.
    pub fn delete(&mut self, id: &str) -> Result<Option<EventItem>> {
        let removed = self.get(id).cloned();
        let next = self.items.iter().filter(|item| item.id != id).cloned().collect();
        self.replace(next)?;

        Ok(removed)
    }

    /// Appends `comment` to the event `event_id`. Returns `false` when the
    /// event does not exist.
    pub fn add_comment(&mut self, event_id: &str, comment: EventComment) -> Result<bool> {
        if self.get(event_id).is_none() {
            return Ok(false);
        }
        self.items = self.repository.add_comment(event_id, comment)?;
        Ok(true)
    }

    /// Builds a comment from `params` and appends it.
    pub fn comment(&mut self, params: &AddComment, now: Timestamp) -> Result<Option<EventComment>> {
        let comment = EventComment::new(&params.event_id, &params.text, now);
        let added = self.add_comment(&params.event_id, comment.clone())?;
        Ok(added.then_some(comment))
    }

    /// Removes a comment from one event. Returns the removed comment, if any.
    pub fn remove_comment(&mut self, params: &RemoveComment) -> Result<Option<EventComment>> {
        let removed = self
            .get(&params.event_id)
            .and_then(|event| event.comments.iter().find(|c| c.id == params.comment_id))
            .cloned();
        if removed.is_none() {
            return Ok(None);
        }
        self.items = self
            .repository
            .delete_comment(&params.event_id, &params.comment_id)?;
        Ok(removed)
    }

    /// Events matching `filter`, ordered by `occurred_at`.
    pub fn feed(&self, filter: &EventFilter) -> Vec<EventItem> {
        let mut list: Vec<EventItem> = self
            .items
            .iter()
            .filter(|item| filter.matches(&item.description))
            .cloned()
            .collect();
        list.sort_by_key(|item| item.occurred_at);
        if filter.direction == SortDirection::Descending {
            list.reverse();
        }
        list
    }
}

//! Command handlers rendering tracker results to the terminal.

use anyhow::{anyhow, Context, Result};
use log::debug;
use timeflow_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    params::{Id, ListActions, ListEvents},
    StatusChange, Tracker,
};

use crate::{
    cli::{ActionCommands, CommentCommands, EventCommands, SettingsCommands},
    renderer::TerminalRenderer,
};

/// Runs one CLI command against a tracker.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_action_command(&self, command: ActionCommands) -> Result<()> {
        match command {
            ActionCommands::Add(args) => {
                let action = self
                    .tracker
                    .create_action(&args.into())
                    .await
                    .context("Failed to create action")?;
                self.renderer.render(&CreateResult::new(action).to_string())
            }
            ActionCommands::List(args) => {
                let params = ListActions::from(&args);
                if args.archived {
                    self.list_archived(&params).await
                } else {
                    self.list_actions(&params).await
                }
            }
            ActionCommands::Show(args) => {
                let params = Id::from(args);
                let action = self
                    .tracker
                    .get_action(&params)
                    .await
                    .context("Failed to get action")?
                    .ok_or_else(|| anyhow!("Action with ID {} not found", params.id))?;
                self.renderer.render(&action.to_string())
            }
            ActionCommands::Edit(args) => {
                let id = args.id.clone();
                let action = self
                    .tracker
                    .update_action(&args.into())
                    .await
                    .context("Failed to update action")?
                    .ok_or_else(|| anyhow!("Action with ID {id} not found"))?;
                self.renderer.render(&UpdateResult::new(action).to_string())
            }
            ActionCommands::Move(args) => {
                let id = args.id.clone();
                let action = self
                    .tracker
                    .move_action(&args.into())
                    .await
                    .context("Failed to move action")?
                    .ok_or_else(|| anyhow!("No unscheduled action with ID {id}"))?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Moved '{}' to position {}",
                        action.description, action.order
                    ))
                    .to_string(),
                )
            }
            ActionCommands::Complete(args) => {
                let params = Id::from(args);
                let change = self.tracker.complete_action(&params).await;
                self.render_status_change(&params, change)
            }
            ActionCommands::Cancel(args) => {
                let params = Id::from(args);
                let change = self.tracker.cancel_action(&params).await;
                self.render_status_change(&params, change)
            }
            ActionCommands::Reopen(args) => {
                let params = Id::from(args);
                let change = self.tracker.reopen_action(&params).await;
                self.render_status_change(&params, change)
            }
            ActionCommands::Delete(args) => {
                let id = args.id.clone();
                let action = self
                    .tracker
                    .delete_action(&args.into())
                    .await
                    .context("Failed to delete action")?
                    .ok_or_else(|| anyhow!("Action with ID {id} not found"))?;
                self.renderer.render(&DeleteResult::new(action).to_string())
            }
        }
    }

    pub async fn handle_event_command(&self, command: EventCommands) -> Result<()> {
        match command {
            EventCommands::Add(args) => {
                let event = self
                    .tracker
                    .log_event(&args.into())
                    .await
                    .context("Failed to log event")?;
                self.renderer.render(&CreateResult::new(event).to_string())
            }
            EventCommands::List(args) => {
                let events = self
                    .tracker
                    .event_feed(&ListEvents::from(args))
                    .await
                    .context("Failed to list events")?;
                self.renderer.render(&format!("# Timeline\n\n{events}"))
            }
            EventCommands::Show(args) => {
                let params = Id::from(args);
                let event = self
                    .tracker
                    .get_event(&params)
                    .await
                    .context("Failed to get event")?
                    .ok_or_else(|| anyhow!("Event with ID {} not found", params.id))?;
                self.renderer.render(&event.to_string())
            }
            EventCommands::Edit(args) => {
                let id = args.id.clone();
                let event = self
                    .tracker
                    .update_event(&args.into())
                    .await
                    .context("Failed to update event")?
                    .ok_or_else(|| anyhow!("Event with ID {id} not found"))?;
                self.renderer.render(&UpdateResult::new(event).to_string())
            }
            EventCommands::Delete(args) => {
                let id = args.id.clone();
                let event = self
                    .tracker
                    .delete_event(&args.into())
                    .await
                    .context("Failed to delete event")?
                    .ok_or_else(|| anyhow!("Event with ID {id} not found"))?;
                self.renderer.render(&DeleteResult::new(event).to_string())
            }
        }
    }

    pub async fn handle_comment_command(&self, command: CommentCommands) -> Result<()> {
        match command {
            CommentCommands::Add(args) => {
                let event_id = args.event_id.clone();
                let comment = self
                    .tracker
                    .add_comment(&args.into())
                    .await
                    .context("Failed to add comment")?
                    .ok_or_else(|| anyhow!("Event with ID {event_id} not found"))?;
                self.renderer.render(&CreateResult::new(comment).to_string())
            }
            CommentCommands::Delete(args) => {
                let comment_id = args.comment_id.clone();
                let comment = self
                    .tracker
                    .remove_comment(&args.into())
                    .await
                    .context("Failed to remove comment")?
                    .ok_or_else(|| anyhow!("Comment with ID {comment_id} not found"))?;
                self.renderer.render(&DeleteResult::new(comment).to_string())
            }
        }
    }

    pub async fn handle_settings_command(&self, command: SettingsCommands) -> Result<()> {
        match command {
            SettingsCommands::Show => {
                let confirm_delete = self.tracker.confirm_delete().await?;
                let theme = self.tracker.theme().await?;
                self.renderer.render(&format!(
                    "# Settings\n\n- Confirm delete: {}\n- Theme: {theme}\n",
                    if confirm_delete { "on" } else { "off" }
                ))
            }
            SettingsCommands::ConfirmDelete { state } => {
                let enabled = bool::from(state);
                self.tracker
                    .set_confirm_delete(enabled)
                    .await
                    .context("Failed to save preference")?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Deletion confirmation turned {}",
                        if enabled { "on" } else { "off" }
                    ))
                    .to_string(),
                )
            }
            SettingsCommands::Theme { theme } => {
                let theme = theme.into();
                self.tracker
                    .set_theme(theme)
                    .await
                    .context("Failed to save preference")?;
                self.renderer
                    .render(&OperationStatus::success(format!("Theme set to {theme}")).to_string())
            }
        }
    }

    /// Renders the active feed.
    pub async fn list_actions(&self, params: &ListActions) -> Result<()> {
        let feed = self
            .tracker
            .action_feed(params)
            .await
            .context("Failed to list actions")?;
        self.renderer.render(&format!("# Actions\n\n{feed}"))
    }

    async fn list_archived(&self, params: &ListActions) -> Result<()> {
        let actions = self
            .tracker
            .archived_actions(params)
            .await
            .context("Failed to list archived actions")?;
        self.renderer.render(&format!("# Archived Actions\n\n{actions}"))
    }

    fn render_status_change(
        &self,
        params: &Id,
        change: timeflow_core::Result<Option<StatusChange>>,
    ) -> Result<()> {
        let change = change.context("Failed to change action status")?;
        let Some(StatusChange { previous, action }) = change else {
            debug!("No status change for action {}", params.id);
            return self.renderer.render(
                &OperationStatus::failure(format!(
                    "Action with ID {} not found or already in that status",
                    params.id
                ))
                .to_string(),
            );
        };

        let changes = vec![format!("Status: {previous} → {}", action.status)];
        self.renderer
            .render(&UpdateResult::with_changes(action, changes).to_string())
    }
}

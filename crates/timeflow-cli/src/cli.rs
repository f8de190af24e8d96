//! Command-line argument wrappers using clap.
//!
//! Each wrapper carries the clap derives and help text for one command and
//! converts into the matching core parameter type with `From`, keeping the
//! core types free of CLI concerns.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use clap::{Args, Subcommand, ValueEnum};
use jiff::{civil::DateTime, tz::TimeZone, Timestamp};
use timeflow_core::{models::Theme, params::*, TrackerError};

/// Parses an RFC 3339 timestamp, or a civil `YYYY-MM-DDTHH:MM[:SS]` in the
/// system time zone.
pub fn parse_datetime(value: &str) -> Result<Timestamp, TrackerError> {
    let value = value.trim();
    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    value
        .parse::<DateTime>()
        .and_then(|civil| civil.to_zoned(TimeZone::system()))
        .map(|zoned| zoned.timestamp())
        .map_err(|e| {
            TrackerError::invalid_input("datetime").with_reason(format!(
                "'{value}' is neither an RFC 3339 timestamp nor YYYY-MM-DDTHH:MM[:SS] ({e})"
            ))
        })
}

// ============================================================================
// Actions
// ============================================================================

/// Add a planned action
///
/// Without --at the action is unscheduled and ordered by hand; it goes to the
/// end of the unscheduled list unless --start is given.
#[derive(Args)]
pub struct AddActionArgs {
    /// What to do
    pub description: String,
    /// Planned time (RFC 3339 or YYYY-MM-DDTHH:MM in local time)
    #[arg(long, value_parser = parse_datetime)]
    pub at: Option<Timestamp>,
    /// Put an unscheduled action first instead of last
    #[arg(long, conflicts_with = "at")]
    pub start: bool,
}

impl From<AddActionArgs> for CreateAction {
    fn from(val: AddActionArgs) -> Self {
        CreateAction {
            description: val.description,
            planned_at: val.at,
            insert_at: if val.start {
                InsertPosition::Start
            } else {
                InsertPosition::End
            },
        }
    }
}

/// List planned actions
///
/// Shows the active feed (scheduled actions by time, then unscheduled actions
/// in manual order) or, with --archived, completed and cancelled actions.
#[derive(Args)]
pub struct ListActionsArgs {
    /// Only show actions whose description contains this text
    #[arg(short, long)]
    pub search: Option<String>,
    /// Latest scheduled actions first
    #[arg(long)]
    pub desc: bool,
    /// Show completed and cancelled actions instead
    #[arg(long)]
    pub archived: bool,
}

impl From<&ListActionsArgs> for ListActions {
    fn from(val: &ListActionsArgs) -> Self {
        ListActions {
            search: val.search.clone(),
            descending: val.desc,
        }
    }
}

/// Edit an action's description and planned time
///
/// Omitting --at makes the action unscheduled.
#[derive(Args)]
pub struct EditActionArgs {
    #[arg(help = "Identifier of the action to edit")]
    pub id: String,
    /// New description
    pub description: String,
    /// New planned time (RFC 3339 or YYYY-MM-DDTHH:MM in local time)
    #[arg(long, value_parser = parse_datetime)]
    pub at: Option<Timestamp>,
}

impl From<EditActionArgs> for UpdateAction {
    fn from(val: EditActionArgs) -> Self {
        UpdateAction {
            id: val.id,
            description: val.description,
            planned_at: val.at,
        }
    }
}

/// Move an unscheduled action to a new position
#[derive(Args)]
pub struct MoveActionArgs {
    #[arg(help = "Identifier of the unscheduled action to move")]
    pub id: String,
    #[arg(help = "0-based position among unscheduled actions")]
    pub index: usize,
}

impl From<MoveActionArgs> for MoveAction {
    fn from(val: MoveActionArgs) -> Self {
        MoveAction {
            id: val.id,
            target_index: val.index,
        }
    }
}

/// Arguments for commands taking a single identifier
#[derive(Args)]
pub struct IdArgs {
    #[arg(help = "Identifier of the item")]
    pub id: String,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete an action or event
#[derive(Args)]
pub struct DeleteArgs {
    #[arg(help = "Identifier of the item to delete")]
    pub id: String,
    /// Confirm the deletion (required while confirm-delete is on)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteArgs> for Delete {
    fn from(val: DeleteArgs) -> Self {
        Delete {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum ActionCommands {
    /// Add a planned action
    #[command(alias = "a")]
    Add(AddActionArgs),
    /// List planned actions
    #[command(aliases = ["l", "ls"])]
    List(ListActionsArgs),
    /// Show a single action
    #[command(alias = "s")]
    Show(IdArgs),
    /// Edit an action's description and planned time
    #[command(alias = "e")]
    Edit(EditActionArgs),
    /// Move an unscheduled action to a new position
    #[command(alias = "m")]
    Move(MoveActionArgs),
    /// Mark an action completed
    #[command(alias = "done")]
    Complete(IdArgs),
    /// Mark an action cancelled
    Cancel(IdArgs),
    /// Return an action to active
    Reopen(IdArgs),
    /// Delete an action
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

// ============================================================================
// Events and comments
// ============================================================================

/// Log a manual event
#[derive(Args)]
pub struct AddEventArgs {
    /// What happened
    pub description: String,
    /// When it happened; defaults to now
    #[arg(long, value_parser = parse_datetime)]
    pub at: Option<Timestamp>,
}

impl From<AddEventArgs> for LogEvent {
    fn from(val: AddEventArgs) -> Self {
        LogEvent {
            description: val.description,
            occurred_at: val.at,
        }
    }
}

/// List the timeline, newest first
#[derive(Args)]
pub struct ListEventsArgs {
    /// Only show events whose description contains this text
    #[arg(short, long)]
    pub search: Option<String>,
    /// Oldest first
    #[arg(long)]
    pub asc: bool,
}

impl From<ListEventsArgs> for ListEvents {
    fn from(val: ListEventsArgs) -> Self {
        ListEvents {
            search: val.search,
            ascending: val.asc,
        }
    }
}

/// Edit an event's description and time
#[derive(Args)]
pub struct EditEventArgs {
    #[arg(help = "Identifier of the event to edit")]
    pub id: String,
    /// New description
    pub description: String,
    /// New time (RFC 3339 or YYYY-MM-DDTHH:MM in local time)
    #[arg(long, value_parser = parse_datetime)]
    pub at: Timestamp,
}

impl From<EditEventArgs> for UpdateEvent {
    fn from(val: EditEventArgs) -> Self {
        UpdateEvent {
            id: val.id,
            description: val.description,
            occurred_at: val.at,
        }
    }
}

#[derive(Subcommand)]
pub enum EventCommands {
    /// Log a manual event
    #[command(alias = "a")]
    Add(AddEventArgs),
    /// List the timeline
    #[command(aliases = ["l", "ls"])]
    List(ListEventsArgs),
    /// Show a single event with its comments
    #[command(alias = "s")]
    Show(IdArgs),
    /// Edit an event's description and time
    #[command(alias = "e")]
    Edit(EditEventArgs),
    /// Delete an event and its comments
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

/// Comment on an event
#[derive(Args)]
pub struct AddCommentArgs {
    #[arg(help = "Identifier of the event to comment on")]
    pub event_id: String,
    /// Comment text
    pub text: String,
}

impl From<AddCommentArgs> for AddComment {
    fn from(val: AddCommentArgs) -> Self {
        AddComment {
            event_id: val.event_id,
            text: val.text,
        }
    }
}

/// Remove a comment from an event
#[derive(Args)]
pub struct DeleteCommentArgs {
    #[arg(help = "Identifier of the event holding the comment")]
    pub event_id: String,
    #[arg(help = "Identifier of the comment to remove")]
    pub comment_id: String,
}

impl From<DeleteCommentArgs> for RemoveComment {
    fn from(val: DeleteCommentArgs) -> Self {
        RemoveComment {
            event_id: val.event_id,
            comment_id: val.comment_id,
        }
    }
}

#[derive(Subcommand)]
pub enum CommentCommands {
    /// Comment on an event
    #[command(alias = "a")]
    Add(AddCommentArgs),
    /// Remove a comment from an event
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteCommentArgs),
}

// ============================================================================
// Settings
// ============================================================================

/// On/off switch for boolean preferences
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(val: Toggle) -> Self {
        val == Toggle::On
    }
}

/// Command-line representation of the theme preference
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(val: ThemeArg) -> Self {
        match val {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current preferences
    Show,
    /// Require --confirm for deletions
    ConfirmDelete {
        #[arg(value_enum)]
        state: Toggle,
    },
    /// Set the color theme tag
    Theme {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

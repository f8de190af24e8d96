use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ActionCommands, CommentCommands, EventCommands, SettingsCommands};

/// Personal action and event tracker
///
/// Timeflow keeps a list of planned actions, optionally scheduled for a time,
/// and a timeline of events. Completing, cancelling or reopening a scheduled
/// action, or letting it pass its planned time, is recorded in the timeline
/// automatically.
#[derive(Parser)]
#[command(version, about, name = "tf")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/timeflow/timeflow.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Timeflow CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage planned actions
    #[command(alias = "a")]
    Action {
        #[command(subcommand)]
        command: ActionCommands,
    },
    /// Manage timeline events
    #[command(alias = "e")]
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },
    /// Manage comments on events
    #[command(alias = "c")]
    Comment {
        #[command(subcommand)]
        command: CommentCommands,
    },
    /// Show or change preferences
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

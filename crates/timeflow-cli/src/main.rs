//! Timeflow CLI Application
//!
//! Command-line interface for the timeflow action and event tracker.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handlers::Cli;
use log::info;
use renderer::TerminalRenderer;
use timeflow_core::{params::ListActions, TrackerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    info!("Timeflow started");

    let cli = Cli::new(tracker, TerminalRenderer::new(!no_color));
    match command {
        Some(Action { command }) => cli.handle_action_command(command).await,
        Some(Event { command }) => cli.handle_event_command(command).await,
        Some(Comment { command }) => cli.handle_comment_command(command).await,
        Some(Settings { command }) => cli.handle_settings_command(command).await,
        None => cli.list_actions(&ListActions::default()).await,
    }
}

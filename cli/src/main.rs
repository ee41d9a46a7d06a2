//! Taskpad - a small persistent todo list for the terminal.
//!
//! # Commands
//!
//! - `taskpad list`: show all items, newest first (default)
//! - `taskpad add <title...>`: add an item
//! - `taskpad toggle <id>`: flip an item between open and completed
//! - `taskpad remove <id>`: delete an item
//! - `taskpad stats`: completed versus total counts
//! - `taskpad theme [show|toggle|dark|light]`: light/dark appearance
//!
//! # Environment Variables
//!
//! See the [`config`] module for available configuration options.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use taskpad_core::FileStorage;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use taskpad::commands::{execute, Cli, Command};
use taskpad::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    let config =
        Config::from_env_with_data_dir(cli.data_dir).context("Failed to load configuration")?;

    debug!(data_dir = %config.data_dir.display(), "Using data directory");

    let storage = FileStorage::new(&config.data_dir);
    let command = cli.command.unwrap_or(Command::List);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&command, &storage, &config, &mut out)?;

    Ok(())
}

/// Initializes the logging subsystem.
///
/// Logs go to stderr so command output on stdout stays clean.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

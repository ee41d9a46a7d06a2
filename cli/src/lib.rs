//! Taskpad - a small persistent todo list for the terminal.
//!
//! This crate is the host for [`taskpad_core`]: it reads configuration from
//! the environment, parses the command line, and runs each command against
//! a [`FileStorage`](taskpad_core::FileStorage) in the configured data
//! directory.
//!
//! # Modules
//!
//! - [`config`]: Configuration from environment variables
//! - [`commands`]: clap command definitions and execution

pub mod commands;
pub mod config;

pub use commands::{execute, Cli, Command, CommandError, ThemeAction};
pub use config::{Config, ConfigError};

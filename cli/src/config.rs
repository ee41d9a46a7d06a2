//! Configuration module for the Taskpad command line.
//!
//! This module handles parsing configuration from environment variables.
//!
//! # Environment Variables
//!
//! | Variable | Required | Default | Description |
//! |----------|----------|---------|-------------|
//! | `TASKPAD_DATA_DIR` | No | platform data dir | Directory holding `<key>.json` files |
//! | `TASKPAD_LIST_KEY` | No | `todos` | Storage key for the todo list |
//! | `TASKPAD_APPEARANCE_KEY` | No | `darkMode` | Storage key for the appearance flag |
//!
//! The platform data dir comes from [`directories::ProjectDirs`], e.g.
//! `~/.local/share/taskpad` on Linux.
//!
//! # Example
//!
//! ```no_run
//! use taskpad::config::Config;
//!
//! let config = Config::from_env().expect("Failed to load configuration");
//! println!("Data directory: {}", config.data_dir.display());
//! ```

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;
use taskpad_core::storage::validate_key;
use taskpad_core::{DEFAULT_APPEARANCE_KEY, DEFAULT_LIST_KEY};
use thiserror::Error;

/// Application name used to derive the platform data directory.
const APP_NAME: &str = "taskpad";

const ENV_DATA_DIR: &str = "TASKPAD_DATA_DIR";
const ENV_LIST_KEY: &str = "TASKPAD_LIST_KEY";
const ENV_APPEARANCE_KEY: &str = "TASKPAD_APPEARANCE_KEY";

/// Errors that can occur during configuration parsing.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has an invalid value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    /// No data directory was given and none could be derived.
    #[error("failed to determine data directory; set TASKPAD_DATA_DIR")]
    NoDataDirectory,
}

/// Configuration for the Taskpad command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the storage adapter writes into.
    pub data_dir: PathBuf,

    /// Storage key for the todo list.
    pub list_key: String,

    /// Storage key for the light/dark flag.
    pub appearance_key: String,
}

impl Config {
    /// Creates a new `Config` by parsing environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if:
    /// - `TASKPAD_DATA_DIR` is set but empty
    /// - a key variable is set to something that is not a valid storage key
    /// - `TASKPAD_LIST_KEY` and `TASKPAD_APPEARANCE_KEY` name the same key
    /// - no data directory is configured and the platform one is unknown
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_data_dir(None)
    }

    /// Like [`Config::from_env`], but an explicit `data_dir` (e.g. from a
    /// command-line flag) takes precedence over `TASKPAD_DATA_DIR` and the
    /// platform default.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`], minus the data directory checks when
    /// `data_dir` is given.
    pub fn from_env_with_data_dir(data_dir: Option<PathBuf>) -> Result<Self, ConfigError> {
        let data_dir = match (data_dir, env::var(ENV_DATA_DIR)) {
            (Some(dir), _) => dir,
            (None, Ok(val)) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    key: ENV_DATA_DIR.to_string(),
                    message: "data directory cannot be empty".to_string(),
                });
            }
            (None, Ok(val)) => PathBuf::from(val),
            (None, Err(_)) => default_data_dir()?,
        };

        let list_key = parse_key(ENV_LIST_KEY, DEFAULT_LIST_KEY)?;
        let appearance_key = parse_key(ENV_APPEARANCE_KEY, DEFAULT_APPEARANCE_KEY)?;

        if list_key == appearance_key {
            return Err(ConfigError::InvalidValue {
                key: ENV_APPEARANCE_KEY.to_string(),
                message: format!("must differ from the list key '{list_key}'"),
            });
        }

        Ok(Self {
            data_dir,
            list_key,
            appearance_key,
        })
    }
}

fn default_data_dir() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(ConfigError::NoDataDirectory)
}

fn parse_key(var: &str, default: &str) -> Result<String, ConfigError> {
    let Ok(val) = env::var(var) else {
        return Ok(default.to_string());
    };

    let key = val.trim().to_string();
    validate_key(&key).map_err(|e| ConfigError::InvalidValue {
        key: var.to_string(),
        message: e.to_string(),
    })?;

    Ok(key)
}

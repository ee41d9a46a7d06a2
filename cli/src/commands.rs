//! Command-line surface and command execution.
//!
//! Parsing is done with clap; [`execute`] runs one parsed [`Command`] against
//! a todo store and appearance preference built on a shared storage adapter,
//! writing human-readable output to any [`Write`].

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use taskpad_core::{
    AppearancePreference, KeyValueStorage, TodoItem, TodoList, TodoStore, ValidationError,
};
use thiserror::Error;

use crate::config::Config;

/// Taskpad - a small persistent todo list.
///
/// Items are listed newest first. Every change is saved immediately.
#[derive(Parser, Debug)]
#[command(name = "taskpad")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
ENVIRONMENT VARIABLES:
    TASKPAD_DATA_DIR        Storage directory (default: platform data dir)
    TASKPAD_LIST_KEY        Storage key for the list (default: todos)
    TASKPAD_APPEARANCE_KEY  Storage key for the theme (default: darkMode)
    RUST_LOG                Log filter (default: warn)

EXAMPLES:
    taskpad add Buy milk
    taskpad list
    taskpad toggle lx2k9q1c-4f7h2m9dq0ze
    taskpad theme toggle
")]
pub struct Cli {
    /// Override the storage directory.
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show all items, newest first (default).
    List,

    /// Add an item. Words are joined with single spaces.
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Flip an item between open and completed.
    Toggle { id: String },

    /// Delete an item.
    Remove { id: String },

    /// Show completed versus total counts.
    Stats,

    /// Show or change the light/dark appearance.
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
}

/// What to do with the appearance preference.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Dark,
    Light,
}

/// Errors surfaced by command execution.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Input rejected by the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Writing output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Runs one command against storage configured by `config`.
///
/// # Errors
///
/// Returns [`CommandError::Validation`] when `add` gets a blank title and
/// [`CommandError::Output`] when `out` cannot be written.
pub fn execute<S: KeyValueStorage>(
    command: &Command,
    storage: S,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CommandError> {
    match command {
        Command::Theme { action } => {
            let mut appearance = AppearancePreference::with_key(storage, &config.appearance_key);
            match action {
                ThemeAction::Show => {}
                ThemeAction::Toggle => {
                    appearance.toggle();
                }
                ThemeAction::Dark => appearance.set_dark(true),
                ThemeAction::Light => appearance.set_dark(false),
            }
            writeln!(out, "Appearance: {}", appearance.theme())?;
        }
        Command::List => {
            let store = TodoStore::with_key(storage, &config.list_key);
            write_list(out, store.items())?;
        }
        Command::Stats => {
            let store = TodoStore::with_key(storage, &config.list_key);
            writeln!(out, "{}", store.progress())?;
        }
        Command::Add { title } => {
            let mut store = TodoStore::with_key(storage, &config.list_key);
            let list = store.add(&title.join(" "))?;
            if let Some(item) = list.items().first() {
                writeln!(out, "Added {}", item.id)?;
            }
        }
        Command::Toggle { id } => {
            let mut store = TodoStore::with_key(storage, &config.list_key);
            match store.toggle(id).get(id) {
                Some(item) => writeln!(out, "{}", format_item(item))?,
                None => writeln!(out, "No item with id {id}")?,
            }
        }
        Command::Remove { id } => {
            let mut store = TodoStore::with_key(storage, &config.list_key);
            let existed = store.items().contains(id);
            store.remove(id);
            if existed {
                writeln!(out, "Removed {id}")?;
            } else {
                writeln!(out, "No item with id {id}")?;
            }
        }
    }

    Ok(())
}

fn write_list(out: &mut dyn Write, list: &TodoList) -> io::Result<()> {
    if list.is_empty() {
        return writeln!(out, "No todos yet.");
    }

    for item in list {
        writeln!(out, "{}", format_item(item))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", list.progress())
}

/// Renders one item as `[x] <id>  <title>`.
#[must_use]
pub fn format_item(item: &TodoItem) -> String {
    let mark = if item.completed { 'x' } else { ' ' };
    format!("[{mark}] {}  {}", item.id, item.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskpad_core::MemoryStorage;

    fn test_config() -> Config {
        Config {
            data_dir: PathBuf::from("/unused"),
            list_key: "todos".to_string(),
            appearance_key: "darkMode".to_string(),
        }
    }

    fn run(command: Command, storage: &MemoryStorage) -> Result<String, CommandError> {
        let mut out = Vec::new();
        execute(&command, storage, &test_config(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn add(storage: &MemoryStorage, title: &str) -> String {
        let output = run(
            Command::Add {
                title: vec![title.to_string()],
            },
            storage,
        )
        .unwrap();
        output.trim().trim_start_matches("Added ").to_string()
    }

    #[test]
    fn parses_default_command_as_none() {
        let cli = Cli::try_parse_from(["taskpad"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.data_dir.is_none());
    }

    #[test]
    fn parses_multi_word_add() {
        let cli = Cli::try_parse_from(["taskpad", "add", "Buy", "oat", "milk"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Add {
                title: vec!["Buy".to_string(), "oat".to_string(), "milk".to_string()]
            })
        );
    }

    #[test]
    fn add_requires_a_title() {
        assert!(Cli::try_parse_from(["taskpad", "add"]).is_err());
    }

    #[test]
    fn parses_global_data_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["taskpad", "list", "--data-dir", "/tmp/x"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert_eq!(cli.command, Some(Command::List));
    }

    #[test]
    fn theme_defaults_to_show() {
        let cli = Cli::try_parse_from(["taskpad", "theme"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Theme {
                action: ThemeAction::Show
            })
        );
    }

    #[test]
    fn list_empty() {
        let storage = MemoryStorage::new();
        assert_eq!(run(Command::List, &storage).unwrap(), "No todos yet.\n");
    }

    #[test]
    fn add_then_list_shows_newest_first() {
        let storage = MemoryStorage::new();
        let first = add(&storage, "Buy milk");
        let second = add(&storage, "Call mum");

        let output = run(Command::List, &storage).unwrap();
        let expected = format!("[ ] {second}  Call mum\n[ ] {first}  Buy milk\n\n0/2 completed\n");
        assert_eq!(output, expected);
    }

    #[test]
    fn blank_add_is_a_validation_error() {
        let storage = MemoryStorage::new();
        let err = run(
            Command::Add {
                title: vec!["  ".to_string()],
            },
            &storage,
        )
        .unwrap_err();

        assert!(matches!(err, CommandError::Validation(ValidationError::EmptyTitle)));
        assert_eq!(err.to_string(), "todo title cannot be empty");
        assert!(storage.is_empty());
    }

    #[test]
    fn toggle_prints_new_state() {
        let storage = MemoryStorage::new();
        let id = add(&storage, "Buy milk");

        let output = run(Command::Toggle { id: id.clone() }, &storage).unwrap();
        assert_eq!(output, format!("[x] {id}  Buy milk\n"));

        let output = run(Command::Stats, &storage).unwrap();
        assert_eq!(output, "1/1 completed\n");
    }

    #[test]
    fn missing_ids_are_reported_not_errors() {
        let storage = MemoryStorage::new();
        add(&storage, "Buy milk");

        let output = run(Command::Toggle { id: "nope".to_string() }, &storage).unwrap();
        assert_eq!(output, "No item with id nope\n");

        let output = run(Command::Remove { id: "nope".to_string() }, &storage).unwrap();
        assert_eq!(output, "No item with id nope\n");
    }

    #[test]
    fn remove_deletes_item() {
        let storage = MemoryStorage::new();
        let id = add(&storage, "Buy milk");

        let output = run(Command::Remove { id: id.clone() }, &storage).unwrap();
        assert_eq!(output, format!("Removed {id}\n"));
        assert_eq!(run(Command::List, &storage).unwrap(), "No todos yet.\n");
    }

    #[test]
    fn theme_actions() {
        let storage = MemoryStorage::new();
        let theme = |action| run(Command::Theme { action }, &storage).unwrap();

        assert_eq!(theme(ThemeAction::Show), "Appearance: light\n");
        assert_eq!(theme(ThemeAction::Toggle), "Appearance: dark\n");
        assert_eq!(theme(ThemeAction::Show), "Appearance: dark\n");
        assert_eq!(theme(ThemeAction::Light), "Appearance: light\n");
        assert_eq!(theme(ThemeAction::Dark), "Appearance: dark\n");
    }

    #[test]
    fn format_item_marks_completion() {
        let mut item = TodoItem::new("a".to_string(), "Buy milk".to_string());
        assert_eq!(format_item(&item), "[ ] a  Buy milk");
        item.completed = true;
        assert_eq!(format_item(&item), "[x] a  Buy milk");
    }
}

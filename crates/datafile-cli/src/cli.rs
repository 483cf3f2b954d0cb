//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use datafile_acl::Visibility;

/// Datafile - record who may use which data files
#[derive(Parser, Debug)]
#[command(name = "datafile")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Store file (overrides config and DATAFILE_STORE)
    #[arg(short, long, global = true)]
    pub store: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create an empty store file
    Init {
        /// Replace an existing store
        #[arg(long)]
        force: bool,
    },

    /// Add a descriptor for a file (replaces any descriptor under the same key)
    Register {
        /// Path of the data file being described
        path: String,

        /// Store key (defaults to the path's file name)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Allow a user to access a file
    GrantUser {
        /// Store key of the descriptor
        key: String,
        /// User identity
        user: String,
    },

    /// Allow a group to access a file
    GrantGroup {
        /// Store key of the descriptor
        key: String,
        /// Group identity
        group: String,
    },

    /// Set a file's visibility
    SetVisibility {
        /// Store key of the descriptor
        key: String,
        /// One of: private, public, free
        visibility: Visibility,
    },

    /// Print one descriptor as JSON
    Show {
        /// Store key of the descriptor
        key: String,
    },

    /// List all descriptors
    List,

    /// Configuration commands
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Command {
    /// Whether the command reads the configuration file.
    ///
    /// `config init` writes a fresh file and must work even when the
    /// existing one does not parse.
    pub fn needs_config(&self) -> bool {
        !matches!(
            self,
            Command::Config {
                action: ConfigAction::Init { .. }
            }
        )
    }
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the config file path in use
    Path,

    /// Print the resolved configuration as TOML
    Show,

    /// Print one value by dotted key (e.g. `store.path`)
    Get {
        /// Dotted key
        key: String,
    },

    /// Write a default configuration file
    Init {
        /// Destination (defaults to the platform config path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

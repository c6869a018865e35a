//! Error types for gabbs operations

use crate::github::GitHubError;
use thiserror::Error;

/// Main error type for the dispatcher, the process runner and the built-in commands
#[derive(Error, Debug)]
pub enum GabbsError {
    #[error("No subcommand provided")]
    MissingSubcommand,

    #[error("Invalid arguments: {0}")]
    InvalidArgument(String),

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    /// The spawned process wrote to its error stream
    #[error("'{command}' wrote to stderr: {stderr}")]
    Process { command: String, stderr: String },

    #[error("Failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    GitHub(#[from] GitHubError),
}

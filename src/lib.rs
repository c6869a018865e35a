//! Gabbs - a small scaffold for internal command line tools
//!
//! Subcommands are resolved by name through a [`CommandRegistry`], external
//! processes run through [`ProcessRunner`], and GitHub is reached through
//! [`github::GitHubClient`].

pub mod commands;
pub mod config;
pub mod constants;
pub mod dispatcher;
pub mod error;
pub mod github;
pub mod logger;
pub mod spawn;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandBase, builtin_registry};
pub use config::{HomeConfig, HomeConfigLookup};
pub use dispatcher::{CommandRegistry, Dispatcher};
pub use error::GabbsError;
pub use logger::{ConsoleLogger, Logger};
pub use spawn::{ProcessRunner, SpawnOptions};

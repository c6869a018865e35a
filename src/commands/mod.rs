//! Command pattern implementation for gabbs subcommands
//!
//! Every subcommand owns a [`CommandBase`] built from the CLI arguments and
//! implements [`Command`]. [`builtin_registry`] wires the built-in commands
//! into a [`CommandRegistry`](crate::dispatcher::CommandRegistry), with
//! [`SetupCommand`] as the default command.

pub mod base;
pub mod files;
pub mod lint;
pub mod release;
pub mod setup;
pub mod show;

pub use base::{Command, CommandBase};
pub use files::FilesCommand;
pub use lint::LintCommand;
pub use release::ReleaseCommand;
pub use setup::SetupCommand;
pub use show::ShowCommand;

use crate::config::HomeConfigLookup;
use crate::constants::{self, config_keys};
use crate::dispatcher::CommandRegistry;
use crate::github::GitHubClient;
use crate::logger::Logger;
use anyhow::Result;
use std::sync::Arc;

/// Registry holding every built-in command
pub fn builtin_registry(logger: Arc<dyn Logger>) -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    let setup_logger = logger.clone();
    registry.register_default(constants::DEFAULT_COMMAND, move |args| {
        let command: Box<dyn Command> = Box::new(SetupCommand::new(args, setup_logger.clone())?);
        Ok(command)
    });

    let lint_logger = logger.clone();
    registry.register("lint", move |args| {
        let command: Box<dyn Command> = Box::new(LintCommand::new(args, lint_logger.clone())?);
        Ok(command)
    });

    let files_logger = logger.clone();
    registry.register("files", move |args| {
        let command: Box<dyn Command> = Box::new(FilesCommand::new(args, files_logger.clone())?);
        Ok(command)
    });

    let show_logger = logger.clone();
    registry.register("show", move |args| {
        let command: Box<dyn Command> = Box::new(ShowCommand::new(args, show_logger.clone())?);
        Ok(command)
    });

    registry.register("release", move |args| {
        let command: Box<dyn Command> = Box::new(ReleaseCommand::new(args, logger.clone())?);
        Ok(command)
    });

    registry
}

/// GitHub credentials taken from the home configuration
///
/// The token falls back to the `GITHUB_TOKEN` environment variable.
pub(crate) fn github_credentials(home_config: &HomeConfigLookup) -> Option<(String, String)> {
    let username = home_config.get_str(config_keys::GITHUB_USERNAME)?;
    let token = home_config
        .get_str(config_keys::GITHUB_TOKEN)
        .map(str::to_string)
        .or_else(|| std::env::var(constants::env::GITHUB_TOKEN).ok())?;
    Some((username.to_string(), token))
}

/// GitHub client, authenticated when credentials are available
pub(crate) fn github_client(
    home_config: &HomeConfigLookup,
    logger: Arc<dyn Logger>,
) -> Result<GitHubClient> {
    let mut client = GitHubClient::new()?.with_logger(logger);
    if let Some((username, token)) = github_credentials(home_config) {
        client.connect(&username, &token);
    }
    Ok(client)
}

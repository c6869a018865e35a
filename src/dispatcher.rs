//! Subcommand resolution and sequencing
//!
//! The [`Dispatcher`] looks the first CLI argument up in a [`CommandRegistry`].
//! When the registry has a default command, the resolved command is not that
//! default, and a home configuration was found, the default command runs to
//! completion before the resolved one starts.

use crate::Result;
use crate::commands::Command;
use crate::error::GabbsError;
use crate::logger::Logger;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Builds a command from the full CLI argument list
pub type CommandFactory = Box<dyn Fn(Vec<String>) -> Result<Box<dyn Command>> + Send + Sync>;

struct Registration {
    factory: CommandFactory,
    is_default: bool,
}

/// Subcommands known to the dispatcher, keyed by exact name
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Registration>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        F: Fn(Vec<String>) -> Result<Box<dyn Command>> + Send + Sync + 'static,
    {
        self.insert(name, Box::new(factory), false);
        self
    }

    /// Register the command run before any other when a home configuration exists
    ///
    /// Only one default is kept; registering another one demotes the previous.
    pub fn register_default<F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        F: Fn(Vec<String>) -> Result<Box<dyn Command>> + Send + Sync + 'static,
    {
        for registration in self.commands.values_mut() {
            registration.is_default = false;
        }
        self.insert(name, Box::new(factory), true);
        self
    }

    fn insert(&mut self, name: &str, factory: CommandFactory, is_default: bool) {
        self.commands
            .insert(name.to_string(), Registration { factory, is_default });
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    pub fn default_command(&self) -> Option<&str> {
        self.default_registration().map(|(name, _)| name)
    }

    fn default_registration(&self) -> Option<(&str, &Registration)> {
        self.commands
            .iter()
            .find(|(_, registration)| registration.is_default)
            .map(|(name, registration)| (name.as_str(), registration))
    }
}

pub struct Dispatcher {
    registry: CommandRegistry,
    logger: Arc<dyn Logger>,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry, logger: Arc<dyn Logger>) -> Self {
        Self { registry, logger }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Resolve and run the subcommand named by `args[0]`
    ///
    /// # Errors
    /// - [`GabbsError::MissingSubcommand`] when `args` is empty
    /// - [`GabbsError::UnknownCommand`] when no command is registered under the name
    /// - any error raised while building or running the commands
    pub async fn start(&self, args: Vec<String>) -> Result<()> {
        let Some(first) = args.first() else {
            return Err(GabbsError::MissingSubcommand.into());
        };
        let name = first.strip_prefix("--").unwrap_or(first);

        let registration = self
            .registry
            .commands
            .get(name)
            .ok_or_else(|| GabbsError::UnknownCommand(name.to_string()))?;

        let command = (registration.factory)(args.clone())?;

        if !registration.is_default
            && let Some((default_name, default)) = self.registry.default_registration()
        {
            if command.home_config().is_found() {
                self.logger
                    .debug(&format!("Running '{}' before '{}'", default_name, name));
                let default_command = (default.factory)(args.clone())?;
                default_command.run().await?;
            } else {
                self.logger.debug(&format!(
                    "No home configuration found, skipping '{}'",
                    default_name
                ));
            }
        }

        self.logger.debug(&format!("Running '{}'", name));
        command.run().await
    }
}

//! Setup command, run before other commands once a home configuration exists

use super::{Command, CommandBase};
use crate::config::HomeConfigLookup;
use crate::constants::config_keys;
use crate::logger::Logger;
use crate::spawn::{ProcessRunner, SpawnOptions};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Home configuration key listing the tools that must be installed
pub const REQUIRED_TOOLS_KEY: &str = "required_tools";

const DEFAULT_TOOLS: &[&str] = &["git"];

/// Checks that the required tools are installed and reports who is configured
pub struct SetupCommand {
    base: CommandBase,
    logger: Arc<dyn Logger>,
    runner: ProcessRunner,
}

impl SetupCommand {
    pub fn new(args: Vec<String>, logger: Arc<dyn Logger>) -> Result<Self> {
        Ok(Self::with_base(CommandBase::new(args, None)?, logger))
    }

    pub fn with_base(base: CommandBase, logger: Arc<dyn Logger>) -> Self {
        let runner = ProcessRunner::new(logger.clone());
        Self {
            base,
            logger,
            runner,
        }
    }

    /// Tools to check, from `required_tools` or the built-in list
    fn required_tools(&self) -> Vec<String> {
        self.base
            .home_config()
            .config()
            .and_then(|config| config.get(REQUIRED_TOOLS_KEY))
            .and_then(|value| value.as_sequence())
            .map(|tools| {
                tools
                    .iter()
                    .filter_map(|tool| tool.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_else(|| DEFAULT_TOOLS.iter().map(|t| t.to_string()).collect())
    }
}

#[async_trait]
impl Command for SetupCommand {
    async fn run(&self) -> Result<()> {
        for tool in self.required_tools() {
            let version = self
                .runner
                .run(&tool, &["--version".to_string()], &SpawnOptions::new())
                .await
                .with_context(|| format!("'{}' is required but could not be run", tool))?;
            self.logger
                .log(&format!("{}: {}", tool, version.lines().next().unwrap_or("").trim()));
        }

        match self.base.home_config().get_str(config_keys::GITHUB_USERNAME) {
            Some(username) => self.logger.log(&format!("GitHub user: {}", username)),
            None => self.logger.debug("No GitHub user configured"),
        }

        Ok(())
    }

    fn home_config(&self) -> &HomeConfigLookup {
        self.base.home_config()
    }
}

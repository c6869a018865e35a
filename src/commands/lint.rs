//! Lint command implementation

use super::{Command, CommandBase};
use crate::config::HomeConfigLookup;
use crate::constants::{self, config_keys};
use crate::logger::Logger;
use crate::spawn::{ProcessRunner, SpawnOptions};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Runs the configured linter over the destination path
///
/// `gabbs lint [--es6] <path>`
pub struct LintCommand {
    base: CommandBase,
    logger: Arc<dyn Logger>,
    runner: ProcessRunner,
}

impl LintCommand {
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

    fn linter(&self) -> &str {
        self.base
            .home_config()
            .get_str(config_keys::LINT_COMMAND)
            .unwrap_or(constants::DEFAULT_LINT_COMMAND)
    }

    fn parameters(&self) -> Vec<String> {
        let mut parameters = vec![
            "-c".to_string(),
            self.base.lint_rules_path().to_string_lossy().into_owned(),
        ];
        parameters.extend(self.base.extra_params().iter().cloned());
        parameters.push(self.base.destination().to_string_lossy().into_owned());
        parameters
    }
}

#[async_trait]
impl Command for LintCommand {
    async fn run(&self) -> Result<()> {
        let linter = self.linter();
        self.logger.log(&format!(
            "Linting {} with {}",
            self.base.destination().display(),
            linter
        ));

        let output = self
            .runner
            .run(linter, &self.parameters(), &SpawnOptions::new())
            .await?;

        if !output.is_empty() {
            self.logger.raw(output.trim_end());
        }

        Ok(())
    }

    fn home_config(&self) -> &HomeConfigLookup {
        self.base.home_config()
    }
}

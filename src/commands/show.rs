//! Show command implementation

use super::{Command, CommandBase, github_client};
use crate::config::HomeConfigLookup;
use crate::error::GabbsError;
use crate::github::{DecodedFile, GitHubClient, GitHubTransport};
use crate::logger::Logger;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Prints a repository file, optionally at a given revision
///
/// `gabbs show <owner> <repo> <path> [ref]`
pub struct ShowCommand {
    base: CommandBase,
    logger: Arc<dyn Logger>,
}

impl ShowCommand {
    pub fn new(args: Vec<String>, logger: Arc<dyn Logger>) -> Result<Self> {
        Self::with_base(CommandBase::new(args, None)?, logger)
    }

    pub fn with_base(base: CommandBase, logger: Arc<dyn Logger>) -> Result<Self> {
        if !(4..=5).contains(&base.args().len()) {
            return Err(GabbsError::InvalidArgument(
                "usage: gabbs show <owner> <repo> <path> [ref]".to_string(),
            )
            .into());
        }
        Ok(Self { base, logger })
    }

    fn reference(&self) -> Option<&str> {
        self.base.args().get(4).map(String::as_str)
    }

    pub async fn fetch_with<T: GitHubTransport>(&self, client: &GitHubClient<T>) -> Result<DecodedFile> {
        let args = self.base.args();
        Ok(client
            .get_file_at_revision(&args[1], &args[2], &args[3], self.reference())
            .await?)
    }
}

#[async_trait]
impl Command for ShowCommand {
    async fn run(&self) -> Result<()> {
        let client = github_client(self.base.home_config(), self.logger.clone())?;
        let file = self.fetch_with(&client).await?;
        self.logger.raw(&file.content);
        Ok(())
    }

    fn home_config(&self) -> &HomeConfigLookup {
        self.base.home_config()
    }
}

//! Release command implementation

use super::{Command, CommandBase, github_client};
use crate::config::HomeConfigLookup;
use crate::error::GabbsError;
use crate::github::{GitHubClient, GitHubTransport};
use crate::logger::Logger;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Creates a GitHub release from an existing tag
///
/// `gabbs release <owner> <repo> <tag>`
pub struct ReleaseCommand {
    base: CommandBase,
    logger: Arc<dyn Logger>,
}

impl ReleaseCommand {
    pub fn new(args: Vec<String>, logger: Arc<dyn Logger>) -> Result<Self> {
        Self::with_base(CommandBase::new(args, None)?, logger)
    }

    pub fn with_base(base: CommandBase, logger: Arc<dyn Logger>) -> Result<Self> {
        if base.args().len() != 4 {
            return Err(GabbsError::InvalidArgument(
                "usage: gabbs release <owner> <repo> <tag>".to_string(),
            )
            .into());
        }
        Ok(Self { base, logger })
    }

    pub async fn release_with<T: GitHubTransport>(&self, client: &GitHubClient<T>) -> Result<()> {
        if !client.is_authenticated() {
            return Err(GabbsError::InvalidArgument(
                "creating a release needs github_username and github_token (or GITHUB_TOKEN)"
                    .to_string(),
            )
            .into());
        }

        let args = self.base.args();
        let (owner, repo, tag) = (&args[1], &args[2], &args[3]);

        client.create_release(owner, repo, tag).await?;
        self.logger
            .log(&format!("Created release {} for {}/{}", tag, owner, repo));
        Ok(())
    }
}

#[async_trait]
impl Command for ReleaseCommand {
    async fn run(&self) -> Result<()> {
        let client = github_client(self.base.home_config(), self.logger.clone())?;
        self.release_with(&client).await
    }

    fn home_config(&self) -> &HomeConfigLookup {
        self.base.home_config()
    }
}

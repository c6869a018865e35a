//! Pull request files command implementation

use super::{Command, CommandBase, github_client};
use crate::config::HomeConfigLookup;
use crate::error::GabbsError;
use crate::github::{GitHubClient, GitHubTransport, PullRequestFile, PullRequestRef};
use crate::logger::Logger;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use std::sync::Arc;

/// Lists the files changed by a pull request
///
/// `gabbs files <pull-request-url>`
pub struct FilesCommand {
    base: CommandBase,
    logger: Arc<dyn Logger>,
}

impl FilesCommand {
    pub fn new(args: Vec<String>, logger: Arc<dyn Logger>) -> Result<Self> {
        Self::with_base(CommandBase::new(args, None)?, logger)
    }

    pub fn with_base(base: CommandBase, logger: Arc<dyn Logger>) -> Result<Self> {
        if base.args().len() < 2 {
            return Err(GabbsError::InvalidArgument(
                "usage: gabbs files <pull-request-url>".to_string(),
            )
            .into());
        }
        Ok(Self { base, logger })
    }

    fn url(&self) -> &str {
        &self.base.args()[1]
    }

    /// Fetch and print the file list using `client`
    pub async fn list_with<T: GitHubTransport>(&self, client: &GitHubClient<T>) -> Result<()> {
        let PullRequestRef {
            owner,
            repo,
            pull_request_number,
        } = client.extract_repo_info_from_url(self.url())?;

        let files = client
            .get_files_from_pull_request(&owner, &repo, pull_request_number)
            .await?;

        self.logger.log(&format!(
            "{}/{}#{} changes {} files",
            owner,
            repo,
            pull_request_number,
            files.len()
        ));
        for file in &files {
            self.logger.raw(&format_file(file));
        }

        Ok(())
    }
}

fn format_file(file: &PullRequestFile) -> String {
    let status = match file.status.as_str() {
        "added" => file.status.green(),
        "removed" => file.status.red(),
        _ => file.status.yellow(),
    };
    format!(
        "{:>10} {} (+{} -{})",
        status, file.filename, file.additions, file.deletions
    )
}

#[async_trait]
impl Command for FilesCommand {
    async fn run(&self) -> Result<()> {
        let client = github_client(self.base.home_config(), self.logger.clone())?;
        self.list_with(&client).await
    }

    fn home_config(&self) -> &HomeConfigLookup {
        self.base.home_config()
    }
}

//! GitHub Pull Request API operations

use super::client::GitHubClient;
use super::error::GitHubError;
use super::transport::GitHubTransport;
use super::types::{PullRequestFile, PullRequestRef};
use regex::Regex;
use std::sync::LazyLock;

/// `<anything>/<owner>/<repo>/pull/<number>` with an optional sub-page
static PULL_REQUEST_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:[a-z][a-z0-9+.-]*://)?\S+?/([\w.-]+)/([\w.-]+)/pull/(\d+)(?:[/?#]\S*)?$")
        .unwrap()
});

impl<T: GitHubTransport> GitHubClient<T> {
    /// List the files changed by a pull request
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization)
    /// * `repo` - Repository name
    /// * `pull_number` - Pull request number
    pub async fn get_files_from_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<Vec<PullRequestFile>, GitHubError> {
        self.logger.debug(&format!(
            "Listing files of {}/{}#{}",
            owner, repo, pull_number
        ));
        self.transport
            .pull_request_files(owner, repo, pull_number)
            .await
    }

    /// Parse a pull request URL into its owner, repository and number
    ///
    /// Accepts `<host>[/<prefix>]/<owner>/<repo>/pull/<number>`, with or without
    /// a scheme, optionally followed by a sub-page such as `/files`.
    ///
    /// # Example
    /// ```rust
    /// use gabbs::github::GitHubClient;
    ///
    /// let client = GitHubClient::new().unwrap();
    /// let pr = client
    ///     .extract_repo_info_from_url("https://github.com/acme/widgets/pull/42")
    ///     .unwrap();
    /// assert_eq!(pr.owner, "acme");
    /// assert_eq!(pr.repo, "widgets");
    /// assert_eq!(pr.pull_request_number, 42);
    /// ```
    pub fn extract_repo_info_from_url(&self, url: &str) -> Result<PullRequestRef, GitHubError> {
        let captures = PULL_REQUEST_URL_REGEX
            .captures(url.trim())
            .ok_or_else(|| GitHubError::InvalidPullRequestUrl(url.to_string()))?;

        let pull_request_number = captures[3]
            .parse::<u64>()
            .map_err(|_| GitHubError::InvalidPullRequestUrl(url.to_string()))?;

        Ok(PullRequestRef {
            owner: captures[1].to_string(),
            repo: captures[2].to_string(),
            pull_request_number,
        })
    }
}

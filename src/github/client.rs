//! GitHub API client implementation
//!
//! `GitHubClient` is the entry point for all GitHub operations. It owns a
//! transport and the authentication state. Endpoint groups live in their own
//! modules, each extending the client with an `impl` block:
//! - `pull_requests.rs` - pull request files and URL parsing
//! - `repositories.rs` - file contents and releases

use super::error::GitHubError;
use super::transport::{GitHubTransport, HttpTransport};
use super::types::Credentials;
use crate::logger::{Logger, NullLogger};
use std::sync::Arc;

/// GitHub API client
///
/// Calls made before [`connect`](GitHubClient::connect) are unauthenticated,
/// which is enough for read-only endpoints on public repositories.
///
/// ## Example
///
/// ```rust,no_run
/// use gabbs::github::GitHubClient;
///
/// # async fn example() -> anyhow::Result<()> {
/// let mut client = GitHubClient::new()?;
/// client.connect("octocat", "ghp_token");
///
/// let pr = client.extract_repo_info_from_url("https://github.com/acme/widgets/pull/42")?;
/// let files = client
///     .get_files_from_pull_request(&pr.owner, &pr.repo, pr.pull_request_number)
///     .await?;
/// println!("{} files changed", files.len());
/// # Ok(())
/// # }
/// ```
pub struct GitHubClient<T: GitHubTransport = HttpTransport> {
    pub(crate) transport: T,
    pub(crate) logger: Arc<dyn Logger>,
    username: Option<String>,
}

impl GitHubClient<HttpTransport> {
    /// Client for the public GitHub API
    pub fn new() -> Result<Self, GitHubError> {
        Ok(Self::with_transport(HttpTransport::new()?))
    }
}

impl<T: GitHubTransport> GitHubClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            logger: Arc::new(NullLogger),
            username: None,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Authenticate every subsequent call with basic auth
    ///
    /// Calling it again replaces the previous credentials.
    pub fn connect(&mut self, username: &str, token: &str) {
        self.logger
            .debug(&format!("Authenticating against GitHub as {}", username));
        self.transport
            .authenticate(Credentials::new(username, token));
        self.username = Some(username.to_string());
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    /// Name of the authenticated user, if any
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

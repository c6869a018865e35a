//! GitHub data types
//!
//! Request parameters passed to a [`GitHubTransport`](super::GitHubTransport)
//! and the payloads it returns.

use serde::{Deserialize, Serialize};

/// Basic authentication credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }
}

/// A single file in a repository, optionally pinned to a revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub owner: String,
    pub repo: String,
    pub path: String,
    /// Commit, branch or tag. The default branch is used when absent.
    pub reference: Option<String>,
}

impl ContentRequest {
    pub fn new(owner: &str, repo: &str, path: &str) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            path: path.to_string(),
            reference: None,
        }
    }

    pub fn at_revision(mut self, reference: &str) -> Self {
        self.reference = Some(reference.to_string());
        self
    }
}

/// File entry returned when listing the files of a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestFile {
    #[serde(default)]
    pub sha: String,
    pub filename: String,
    pub status: String,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
    #[serde(default)]
    pub changes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_url: Option<String>,
}

/// Raw response of the contents endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileContent {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub encoding: Option<String>,
    /// Base64 encoded, possibly wrapped over several lines
    #[serde(default)]
    pub content: Option<String>,
}

/// A file path paired with its decoded content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedFile {
    pub filename: String,
    pub content: String,
}

/// Identifiers parsed from a pull request URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    pub owner: String,
    pub repo: String,
    pub pull_request_number: u64,
}

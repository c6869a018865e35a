//! Errors raised by the GitHub client and its transports

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid pull request URL: {0}")]
    InvalidPullRequestUrl(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("GitHub API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Failed to decode file content: {0}")]
    Decode(#[from] base64::DecodeError),
}

//! GitHub API integration module
//!
//! A thin wrapper over GitHub's REST API. Every call is a single
//! async request with no retries, carrying the authentication set through
//! [`GitHubClient::connect`].
//!
//! ## Architecture
//!
//! - [`client`]: Core client holding the transport and authentication state
//! - [`transport`]: The [`GitHubTransport`] seam and its reqwest implementation
//! - [`pull_requests`]: Pull request files and pull request URL parsing
//! - [`repositories`]: File contents and releases
//! - [`types`]: Request and response types
//! - [`error`]: Error type shared by all of the above

pub mod client;
pub mod error;
pub mod pull_requests;
pub mod repositories;
pub mod transport;
pub mod types;

pub use client::GitHubClient;
pub use error::GitHubError;
pub use repositories::decode_file_content;
pub use transport::{GitHubTransport, HttpTransport};
pub use types::{
    ContentRequest, Credentials, DecodedFile, FileContent, PullRequestFile, PullRequestRef,
};

pub use crate::constants::github::{API_BASE, USER_AGENT};

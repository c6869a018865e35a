//! HTTP transport for the GitHub REST API
//!
//! [`GitHubTransport`] is the seam between [`GitHubClient`](super::GitHubClient)
//! and the network. [`HttpTransport`] is the reqwest implementation; tests
//! substitute a mock.

use super::error::GitHubError;
use super::types::{ContentRequest, Credentials, FileContent, PullRequestFile};
use crate::constants::github::{ACCEPT, API_BASE, TIMEOUT_SECS, USER_AGENT};
use async_trait::async_trait;
use reqwest::{Client, Method, Request, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

/// One-shot remote calls made on behalf of the client
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitHubTransport: Send + Sync {
    /// Use basic authentication for every subsequent request
    fn authenticate(&mut self, credentials: Credentials);

    async fn pull_request_files(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<PullRequestFile>, GitHubError>;

    async fn get_content(&self, request: &ContentRequest) -> Result<FileContent, GitHubError>;

    async fn create_release(&self, owner: &str, repo: &str, tag: &str)
    -> Result<(), GitHubError>;
}

/// reqwest backed transport with a fixed timeout and user agent
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl HttpTransport {
    /// Transport pointed at the public GitHub API
    pub fn new() -> Result<Self, GitHubError> {
        Self::with_base_url(API_BASE)
    }

    /// Transport pointed at another API root, e.g. a GitHub Enterprise instance
    pub fn with_base_url(base_url: &str) -> Result<Self, GitHubError> {
        let parsed = Url::parse(base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                GitHubError::InvalidArgument(format!("invalid API base URL '{}'", base_url))
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: parsed,
            credentials: None,
        })
    }

    /// API URL for `segments`, each one percent-encoded as a single path segment
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut request = self.client.request(method, url).header("Accept", ACCEPT);

        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.token));
        }

        request
    }

    pub(crate) fn pull_request_files_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Request, GitHubError> {
        let number = number.to_string();
        let url = self.endpoint(["repos", owner, repo, "pulls", number.as_str(), "files"]);
        Ok(self.request(Method::GET, url).build()?)
    }

    pub(crate) fn content_request(&self, request: &ContentRequest) -> Result<Request, GitHubError> {
        let url = self.endpoint(
            ["repos", request.owner.as_str(), request.repo.as_str(), "contents"]
                .into_iter()
                .chain(request.path.split('/').filter(|segment| !segment.is_empty())),
        );

        let mut builder = self.request(Method::GET, url);
        if let Some(reference) = &request.reference {
            builder = builder.query(&[("ref", reference)]);
        }

        Ok(builder.build()?)
    }

    pub(crate) fn release_request(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
    ) -> Result<Request, GitHubError> {
        let url = self.endpoint(["repos", owner, repo, "releases"]);
        Ok(self
            .request(Method::POST, url)
            .json(&json!({ "tag_name": tag }))
            .build()?)
    }

    async fn execute(&self, request: Request) -> Result<Response, GitHubError> {
        let response = self.client.execute(request).await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(GitHubError::Api {
            status: status.as_u16(),
            body,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, request: Request) -> Result<T, GitHubError> {
        Ok(self.execute(request).await?.json().await?)
    }
}

#[async_trait]
impl GitHubTransport for HttpTransport {
    fn authenticate(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    async fn pull_request_files(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<PullRequestFile>, GitHubError> {
        let request = self.pull_request_files_request(owner, repo, number)?;
        self.fetch(request).await
    }

    async fn get_content(&self, request: &ContentRequest) -> Result<FileContent, GitHubError> {
        let request = self.content_request(request)?;
        self.fetch(request).await
    }

    async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
    ) -> Result<(), GitHubError> {
        let request = self.release_request(owner, repo, tag)?;
        self.execute(request).await?;
        Ok(())
    }
}
